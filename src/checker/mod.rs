//! Version ordering used to classify components as outdated.

mod version;

pub use version::{compare, is_older};
