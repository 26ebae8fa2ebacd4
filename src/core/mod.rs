pub mod debug;
pub mod eligibility;
pub mod fetch;
pub mod generate;
pub mod mapping;
pub mod normalize;
pub mod reorder;
pub mod table;
