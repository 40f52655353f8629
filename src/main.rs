use clap::Parser;
use foliogen::core::ConfigProvider;
use foliogen::utils::{logger, validation::Validate};
use foliogen::{
    CliConfig, HttpSource, LocalSource, LocalStorage, SiteEngine, SitePipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting foliogen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // TOML 設定檔優先於其他旗標
    let result = if let Some(config_path) = cli.config.clone() {
        match TomlConfig::from_file(&config_path) {
            Ok(config) => {
                if let Err(e) = config.validate() {
                    exit_on_invalid_config(e);
                }
                run(config, monitor_enabled).await
            }
            Err(e) => Err(e),
        }
    } else {
        if let Err(e) = cli.validate() {
            exit_on_invalid_config(e);
        }
        run(cli, monitor_enabled).await
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Site rendered successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Site rendered successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                foliogen::utils::error::ErrorSeverity::Low => 0,
                foliogen::utils::error::ErrorSeverity::Medium => 2,
                foliogen::utils::error::ErrorSeverity::High => 1,
                foliogen::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn exit_on_invalid_config(e: foliogen::SiteError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

async fn run<C: ConfigProvider>(config: C, monitoring: bool) -> foliogen::Result<String> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let location = config.source_location().to_string();

    if location.starts_with("http://") || location.starts_with("https://") {
        let pipeline = SitePipeline::new(HttpSource::new(location), storage, config);
        SiteEngine::new_with_monitoring(pipeline, monitoring).run().await
    } else {
        let pipeline = SitePipeline::new(LocalSource::new(location), storage, config);
        SiteEngine::new_with_monitoring(pipeline, monitoring).run().await
    }
}
