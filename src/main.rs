use clap::Parser;
use item_sizer::utils::{logger, validation::Validate};
use item_sizer::{item_statistics_from_json, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting item-sizer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 計算每個屬性的大小
    let item_stats = match item_statistics_from_json(&config.item) {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("❌ Failed to compute item statistics: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("✅ Sized {} attributes", item_stats.len());

    // 結果輸出到 stdout
    println!("{}", serde_json::to_string(&item_stats)?);

    Ok(())
}
