use clap::Parser;
use shop_access::utils::error::ShopError;
use shop_access::utils::logger;
use shop_access::CliConfig;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // Config comes first: it decides which log format to install. A broken
    // config is still reported through the compact logger.
    let config = match cli.load_shop_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration failed: {}", e);
            exit_with(e);
        }
    };

    // Logger
    if config.logging.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting shop-access CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // Results go to stdout, diagnostics to the log
    match shop_access::app::run(&cli.command, &config).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            // Full detail for the log, short message for the terminal
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(e);
        }
    }
}

fn exit_with(e: ShopError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // Every failure, a missing client or order included, exits non-zero
    std::process::exit(e.severity().exit_code())
}
