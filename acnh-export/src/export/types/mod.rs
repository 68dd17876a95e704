//! Declarative record schema for the exported categories

pub mod catalog;
pub mod category;
pub mod extract;

pub use category::{ALL_TIME_COLUMNS, CategorySpec, FieldSpec, Hemisphere, MONTH_COLUMNS, MONTHS};
pub use extract::Extract;
