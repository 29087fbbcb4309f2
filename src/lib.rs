pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::sizer::{
    item_statistics, item_statistics_from_json, number_attribute_size, string_attribute_size,
    string_size,
};
pub use crate::domain::model::{AttributeSizes, Item, TypedValue};
pub use crate::utils::error::{Result, SizerError};
