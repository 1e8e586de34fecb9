use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use surahs::api::DetailStrategy;
use surahs::core::config::{self, CliOverrides, SurahsConfig};

#[derive(Parser)]
#[command(name = "surahs", about = "Browse the surahs of the Quran")]
struct Args {
    /// API base URL (overrides config and SURAHS_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Translation edition identifier, e.g. en.asad
    #[arg(short, long)]
    edition: Option<String>,

    /// How chapter details are fetched
    #[arg(long, value_enum)]
    detail_strategy: Option<DetailStrategy>,

    /// Directory for the cached chapter list
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Skip the on-disk cache entirely
    #[arg(long)]
    no_cache: bool,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            edition: args.edition,
            detail_strategy: args.detail_strategy,
            cache_dir: args.cache_dir,
            no_cache: args.no_cache,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to surahs.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("surahs.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unavailable, using defaults: {}", e);
        SurahsConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.into());

    log::info!(
        "Surahs starting up (base_url={}, edition={}, strategy={}, cache={:?})",
        resolved.base_url,
        resolved.edition,
        resolved.detail_strategy.label(),
        resolved.cache_dir
    );

    surahs::tui::run(resolved)
}
