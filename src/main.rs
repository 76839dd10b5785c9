use clap::Parser;
use testomatio_convert::utils::logger;
use testomatio_convert::{CliConfig, ConvertPipeline, EtlEngine, EtlError, LocalStorage};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), EtlError> {
    let config = cli.resolve()?;
    let output_path = config.output_path.clone();

    let pipeline = ConvertPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no output will be written");
        let result = engine.preview().await?;
        println!(
            "Would write {} test cases to {}",
            result.rows.len(),
            output_path
        );
        return Ok(());
    }

    let written = engine.run().await?;
    println!("Conversion complete. Output written to {}", written);
    Ok(())
}
