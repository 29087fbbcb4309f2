use crate::utils::error::Result;
use crate::utils::validation::{validate_nonempty, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// 與原始工具相同的預設範例 item。
pub const EXAMPLE_ITEM: &str = r#"{"vizzini": {"N": 123124}}"#;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "item-sizer")]
#[command(about = "Estimates per-attribute storage size for DynamoDB items")]
pub struct CliConfig {
    /// Item to size, as the JSON text from the table's item view
    #[arg(long, default_value = EXAMPLE_ITEM)]
    pub item: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_nonempty("item", &self.item)
    }
}
