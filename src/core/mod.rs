pub mod sizer;

pub use crate::domain::model::{AttributeSizes, Item, TypedValue};
pub use crate::utils::error::Result;
