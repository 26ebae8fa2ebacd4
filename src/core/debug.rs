//! Diagnostic capture of the first normalized rows.

use crate::core::normalize::RowObserver;
use crate::models::{HeaderSet, RaceRecord, RawRow};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const SAMPLE_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    /// 1-based data row number
    pub row: usize,
    pub raw: RawRow,
    pub normalized: RaceRecord,
}

/// Keeps raw and normalized values of the first `limit` rows.
#[derive(Debug, Clone)]
pub struct SampleCollector {
    limit: usize,
    samples: Vec<Sample>,
}

impl SampleCollector {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            samples: Vec::with_capacity(limit),
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_dump(self, source: &str, header: &HeaderSet) -> DebugDump {
        DebugDump {
            source: source.to_string(),
            header: header.clone(),
            samples: self.samples,
        }
    }
}

impl Default for SampleCollector {
    fn default() -> Self {
        Self::new(SAMPLE_LIMIT)
    }
}

impl RowObserver for SampleCollector {
    fn observe(&mut self, index: usize, raw: &RawRow, record: &RaceRecord) {
        if self.samples.len() < self.limit {
            self.samples.push(Sample {
                row: index + 1,
                raw: raw.clone(),
                normalized: record.clone(),
            });
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DebugDump {
    pub source: String,
    pub header: HeaderSet,
    pub samples: Vec<Sample>,
}

/// Write the dump as pretty JSON. Every failure is swallowed; the return
/// value only tells whether the file was written.
pub fn write_best_effort(path: &Path, dump: &DebugDump) -> bool {
    let Ok(json) = serde_json::to_string_pretty(dump) else {
        return false;
    };
    fs::write(path, json).is_ok()
}
