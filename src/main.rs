use anyhow::Context;
use clap::Parser;
use course_advisor::utils::{logger, validation::Validate};
use course_advisor::{AdvisorConfig, CliConfig, FileSource, Shell};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Optional TOML settings
    let file_config = match &config.config {
        Some(path) => {
            let loaded = AdvisorConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            loaded.validate()?;
            Some(loaded)
        }
        None => None,
    };

    logger::init_cli_logger(
        config.verbose,
        file_config.as_ref().and_then(|c| c.log_level()),
    );

    tracing::info!("Starting course-advisor");
    tracing::debug!("CLI config: {:?}", config);

    let catalog_path = config.resolve_catalog_path(file_config.as_ref());
    tracing::info!("📁 Catalog source: {}", catalog_path);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), FileSource::new(catalog_path));
    shell.run()?;

    Ok(())
}
