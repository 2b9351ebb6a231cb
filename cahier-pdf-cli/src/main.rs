use anyhow::{bail, Context, Result};
use cahier_pdf::{generate_all, BriefConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "cahier_pdf=info,cahier_pdf_cli=info";

#[derive(Parser, Debug)]
#[command(
    name = "cahier-pdf",
    about = "Generate the Kah-Digital project brief PDFs in French and English",
    version,
    author
)]
struct Cli {
    /// Project root holding the font, the logo and the public/ directory
    #[arg(short, long, default_value = ".")]
    base_dir: PathBuf,

    /// Directory with fr.json / en.json overriding the built-in copy
    #[arg(short, long)]
    content_dir: Option<PathBuf>,

    /// Output directory (defaults to <base-dir>/public)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Draw image placeholders instead of fetching remote images
    #[arg(long)]
    offline: bool,

    /// Timeout for each remote image, in seconds
    #[arg(long, default_value_t = 6)]
    timeout: u64,
}

impl Cli {
    fn into_config(self) -> BriefConfig {
        let mut config = BriefConfig::from_base_dir(&self.base_dir)
            .with_offline(self.offline)
            .with_fetch_timeout(Duration::from_secs(self.timeout));
        if let Some(dir) = self.content_dir {
            config = config.with_content_dir(dir);
        }
        if let Some(dir) = self.output_dir {
            config = config.with_output_dir(dir);
        }
        config
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install the log subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    if !cli.base_dir.is_dir() {
        bail!("base directory {} does not exist", cli.base_dir.display());
    }

    let config = cli.into_config();
    debug!(
        base_dir = %config.base_dir.display(),
        output_dir = %config.output_dir.display(),
        offline = config.offline,
        "starting generation"
    );
    let report = generate_all(&config);

    if report.font.is_fallback() {
        eprintln!("Warning: body font not found, text set in Helvetica");
    }
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(path) => println!("PDF generated: {}", path.display()),
            Err(err) => eprintln!("Error ({}): {}", outcome.language, err),
        }
    }

    let failed: Vec<String> = report.failures().map(|o| o.language.to_string()).collect();
    if !failed.is_empty() {
        bail!("generation failed for: {}", failed.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["cahier-pdf"]).unwrap();
        assert_eq!(cli.base_dir, PathBuf::from("."));
        assert!(!cli.offline);
        assert_eq!(cli.timeout, 6);

        let config = cli.into_config();
        assert_eq!(config.fetch_timeout, Duration::from_secs(6));
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "cahier-pdf",
            "--base-dir",
            "/tmp/site",
            "--offline",
            "--content-dir",
            "/tmp/copy",
            "--output-dir",
            "/tmp/out",
        ])
        .unwrap();
        let config = cli.into_config();
        assert!(config.offline);
        assert_eq!(config.base_dir, PathBuf::from("/tmp/site"));
        assert_eq!(config.content_dir, Some(PathBuf::from("/tmp/copy")));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }
}
