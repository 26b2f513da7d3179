use clap::Parser;
use weather_agent::utils::error::ErrorSeverity;
use weather_agent::utils::{logger, validation::Validate};
use weather_agent::{
    BedrockGenerator, CliConfig, CommandFetcher, ConfigProvider, Fetcher, HttpFetcher,
    TextGenerator, WeatherAgent,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting weather-agent CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let generator = BedrockGenerator::new(config.region(), config.model_id()).await;

    let result = if config.use_http_fetcher() {
        let fetcher = HttpFetcher::new(config.fetch_timeout_secs())?;
        run_agent(generator, fetcher).await
    } else {
        let fetcher = CommandFetcher::curl(config.fetch_timeout_secs());
        run_agent(generator, fetcher).await
    };

    if let Err(e) = result {
        tracing::error!("Weather agent failed: {} (Severity: {:?})", e, e.severity());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

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

async fn run_agent<G, F>(generator: G, fetcher: F) -> weather_agent::Result<()>
where
    G: TextGenerator,
    F: Fetcher,
{
    let agent = WeatherAgent::new(generator, fetcher);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    agent.run(stdin.lock(), stdout.lock()).await
}
