use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use seo_engine::api::Dispatcher;
use seo_engine::config::DEFAULT_TOP_N;
use seo_engine::{
    default_pool, rank_trend_topics, score_content, strip_html, AppError, Config, RateLimiter,
    Result, RngVariance,
};

#[derive(Debug, Parser)]
#[command(name = "seo-engine", about = "Score articles, rank trend topics, gate callers")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an HTML article against a target keyword.
    Score {
        /// HTML article with heading tags intact
        #[arg(long)]
        html: PathBuf,
        #[arg(long)]
        keyword: String,
        /// Meta description text
        #[arg(long)]
        meta: Option<String>,
        /// Pre-stripped plain text; derived from the HTML when omitted
        #[arg(long)]
        plain: Option<PathBuf>,
    },
    /// Rank the built-in trend topic pool.
    Trends {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,
        /// Seed the variance for a reproducible ranking
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Answer line-delimited JSON requests on stdin, rate limited per key.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, cfg: Config) -> Result<()> {
    match cli.cmd {
        Command::Score { html, keyword, meta, plain } => {
            let html_content = read_file(&html)?;
            let content = match plain {
                Some(path) => read_file(&path)?,
                None => strip_html(&html_content),
            };
            let result = score_content(&content, &html_content, &keyword, meta.as_deref());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Trends { category, top, seed } => {
            let pool = default_pool();
            let ranked = match seed {
                Some(seed) => {
                    rank_trend_topics(&pool, category.as_deref(), top, &mut RngVariance::seeded(seed))
                }
                None => rank_trend_topics(&pool, category.as_deref(), top, &mut RngVariance::thread()),
            };
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
        Command::Serve => {
            let limiter = RateLimiter::new(cfg.rate_limit);
            let sweeper = limiter.spawn_sweeper();
            info!(
                max_requests = cfg.rate_limit.max_requests(),
                window_ms = cfg.rate_limit.window_ms(),
                "Serving JSON requests on stdin"
            );

            let mut dispatcher = Dispatcher::new(limiter, default_pool(), RngVariance::thread());
            let result = dispatcher
                .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await;
            sweeper.abort();
            result?;
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| AppError::Request(format!("cannot read {}: {e}", path.display())))
}
