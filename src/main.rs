use clap::Parser;
use portfolio_content::utils::{logger, validation::Validate};
use portfolio_content::{CliConfig, ContentError, Exporter, OutputSink, StaticContent};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let content = StaticContent::new();
    if let Err(e) = content.validate() {
        report(&e);
        std::process::exit(1);
    }
    tracing::info!("✅ Content validated");

    if config.check {
        return Ok(());
    }

    let sink = OutputSink::new(config.output.as_deref());
    let result = Exporter::new(&content)
        .with_status(config.status)
        .render(config.section, config.format)
        .and_then(|rendered| sink.write(&rendered));

    if let Err(e) = result {
        report(&e);
        let exit_code = if e.is_content_error() { 1 } else { 2 };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn report(e: &ContentError) {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}
