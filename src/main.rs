use clap::Parser;
use ifsc_txt::utils::{logger, validation::Validate};
use ifsc_txt::{CliConfig, IfscService, LookupEngine};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入配置：預設值 < TOML 檔案 < 命令列參數
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    logger::init_logger(config.verbose, config.log_format);
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(e.exit_code());
    }

    let service = match IfscService::from_config(&config) {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("❌ Failed to build HTTP client: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let engine = LookupEngine::new(service);
    match engine.run(&cli.query).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            if e.is_timeout() {
                tracing::error!("💡 Upstream did not answer within {}s", config.timeout_seconds);
            }
            std::process::exit(e.exit_code());
        }
    }
}
