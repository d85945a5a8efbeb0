use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use boot_version_check::check::{check_pom, check_sbom};
use boot_version_check::config::{
    AppConfig, DEFAULT_POM_SUFFIX, DEFAULT_SBOM_SUFFIX, load_config,
};
use boot_version_check::logging;
use boot_version_check::reference::{ReferenceCache, SpringDocsSource};
use boot_version_check::report::OutputFormat;

#[derive(Parser)]
#[command(name = "boot-version-check")]
#[command(
    version,
    about = "Find dependency versions already managed by your Spring Boot release"
)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for cached Spring Boot reference tables
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Base URL of the Spring Boot documentation site
    #[arg(long, global = true)]
    docs_url: Option<String>,

    /// Report format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Log filter, e.g. `debug` or `boot_version_check=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check Maven pom.xml files
    Pom {
        /// Directory searched recursively. `.git`, `target`, `node_modules` and the
        /// cache directory are skipped
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// File name suffix to match
        #[arg(long, default_value = DEFAULT_POM_SUFFIX)]
        file: String,
    },
    /// Check JSON bill-of-materials files
    Sbom {
        /// Directory searched recursively. `.git`, `target`, `node_modules` and the
        /// cache directory are skipped
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// File name suffix to match
        #[arg(long, default_value = DEFAULT_SBOM_SUFFIX)]
        file: String,
    },
}

impl Cli {
    fn app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))?,
            None => AppConfig::default(),
        };

        if let Some(dir) = &self.cache_dir {
            config.cache.dir = dir.clone();
        }
        if let Some(url) = &self.docs_url {
            config.docs.base_url = url.clone();
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        Ok(config)
    }
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let source =
        SpringDocsSource::from_config(&config.docs).context("Failed to build HTTP client")?;
    let cache = ReferenceCache::new(&config.cache.dir, source);

    let report = match &cli.command {
        Command::Pom { path, file } => check_pom(path, file, &cache).await,
        Command::Sbom { path, file } => check_sbom(path, file, &cache).await,
    };

    println!("{}", report.render(cli.format)?.trim_end());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.app_config()?;
    let _guard = logging::init(&config.log)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli, config))
}
