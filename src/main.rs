use clap::Parser;
use s3_file_fetcher::utils::logger;
use s3_file_fetcher::utils::validation::Validate;
use s3_file_fetcher::{load_config, CliArgs, Result, S3FetchService};

#[tokio::main]
async fn main() {
    // 先載入 .env，再解析參數與初始化日誌
    let dotenv_result = dotenvy::dotenv();
    let args = CliArgs::parse();

    logger::init_logger(args.verbose, args.json_logs);

    match dotenv_result {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("⚠️ Failed to load .env file: {}", e),
    }

    match run().await {
        Ok(content) => {
            tracing::info!("✅ Fetched {} bytes", content.len());
            println!("S3 File Content: {}", content);
        }
        Err(e) => {
            tracing::error!("❌ Error fetching S3 file: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}

async fn run() -> Result<String> {
    let config = load_config()?;
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let service = S3FetchService::from_config(&config).await;
    let content = service.fetch_object().await?;

    Ok(content)
}
