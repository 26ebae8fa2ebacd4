pub mod race;
pub mod table;

pub use race::{MediaRef, RaceRecord, Season};
pub use table::{HeaderSet, RawRow};
