//! Career-stage eligibility (junior / classic / senior year).
//!
//! Resolution walks an ordered list of rules and keeps the first answer. The
//! default list tries the categorical `Year` label, then the numeric `Year No`
//! column. When both give nothing, no flag is set.

use crate::models::RawRow;
use crate::models::table::columns;

pub const JUNIOR_LABEL: &str = "ジュニア級";
pub const CLASSIC_LABEL: &str = "クラシック級";
pub const SENIOR_LABEL: &str = "シニア級";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eligibility {
    pub junior: bool,
    pub classics: bool,
    pub senior: bool,
}

impl Eligibility {
    pub const JUNIOR: Self = Self {
        junior: true,
        classics: false,
        senior: false,
    };
    pub const CLASSIC: Self = Self {
        junior: false,
        classics: true,
        senior: false,
    };
    pub const SENIOR: Self = Self {
        junior: false,
        classics: false,
        senior: true,
    };

    /// Year number 1, 2 or 3 to its single flag; anything else sets none.
    pub fn from_year_number(n: i64) -> Self {
        match n {
            1 => Self::JUNIOR,
            2 => Self::CLASSIC,
            3 => Self::SENIOR,
            _ => Self::default(),
        }
    }

    pub fn count(&self) -> usize {
        [self.junior, self.classics, self.senior]
            .iter()
            .filter(|f| **f)
            .count()
    }
}

pub trait EligibilityRule {
    /// `None` hands the row to the next rule.
    fn resolve(&self, row: &RawRow) -> Option<Eligibility>;
}

/// Exact match of the `Year` column against the three stage labels.
pub struct CategoricalLabel;

impl EligibilityRule for CategoricalLabel {
    fn resolve(&self, row: &RawRow) -> Option<Eligibility> {
        match row.text(columns::YEAR) {
            JUNIOR_LABEL => Some(Eligibility::JUNIOR),
            CLASSIC_LABEL => Some(Eligibility::CLASSIC),
            SENIOR_LABEL => Some(Eligibility::SENIOR),
            _ => None,
        }
    }
}

/// Integer in the `Year No` column.
pub struct NumericYear;

impl EligibilityRule for NumericYear {
    fn resolve(&self, row: &RawRow) -> Option<Eligibility> {
        row.text(columns::YEAR_NO)
            .parse::<i64>()
            .ok()
            .map(Eligibility::from_year_number)
    }
}

pub const DEFAULT_RULES: &[&dyn EligibilityRule] = &[&CategoricalLabel, &NumericYear];

pub fn resolve_with(row: &RawRow, rules: &[&dyn EligibilityRule]) -> Eligibility {
    rules
        .iter()
        .find_map(|rule| rule.resolve(row))
        .unwrap_or_default()
}

pub fn resolve(row: &RawRow) -> Eligibility {
    resolve_with(row, DEFAULT_RULES)
}
