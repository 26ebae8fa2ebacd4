pub mod path;
pub mod text;

pub use path::{file_base_name, link_tail};
pub use text::normalize_cell;
