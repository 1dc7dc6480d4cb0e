use clap::Parser;
use doctorbase::core::ConfigProvider;
use doctorbase::utils::error::ErrorSeverity;
use doctorbase::utils::{logger, validation::Validate};
use doctorbase::{App, AppConfig, CliConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let mut config = AppConfig::load_or_default(&cli.config);
    cli.apply_to(&mut config);

    logger::init_logger(config.log_level(), config.log_format(), cli.verbose);

    tracing::info!("Starting DoctorBase");
    tracing::debug!("Config file: {}, effective config: {:?}", cli.config, config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = App::init(&config).and_then(|mut app| {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        app.run(stdin.lock(), &mut stdout)
    });

    if let Err(e) = result {
        tracing::error!(
            "❌ DoctorBase stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
