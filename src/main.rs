use jsonl_combine::utils::{logger, validation::Validate};
use jsonl_combine::{CliConfig, ConvertError, Converter, JsonlPipeline, LocalStorage};

fn main() {
    let config = match CliConfig::try_parse_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            println!("{}", e);
            std::process::exit(e.severity().exit_code());
        }
    };

    logger::init_cli_logger();

    tracing::info!("Starting jsonl-combine");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(e);
    }

    let pipeline = JsonlPipeline::new(LocalStorage::new(), config.conversion_config());
    let converter = Converter::new(pipeline);

    match converter.run() {
        Ok(summary) => {
            tracing::debug!(
                "Summary: {}",
                serde_json::to_string(&summary).unwrap_or_default()
            );
            println!(
                "Combined JSON objects from {} into {}",
                summary.input_path, summary.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(e);
        }
    }
}

fn fail(e: ConvertError) -> ! {
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Hint: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
