//! gitfame - per-contributor line, commit and file ownership of a git repository
//!
//! # Usage
//! ```bash
//! gitfame --repository . --revision main               # Rank authors by lines
//! gitfame --order-by commits --use-committer            # Rank committers by commits
//! gitfame --languages rust,markdown --exclude 'vendor/*' --format json
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitfame::config::LanguageTable;
use gitfame::filter::FileFilter;
use gitfame::models::{ContributorMode, RankKey};
use gitfame::output::{render, OutputFormat};
use gitfame::pipeline::{analyze_repository, default_jobs, FameOptions};

/// Attribute every line of a repository to its last author and rank contributors
#[derive(Parser)]
#[command(name = "gitfame")]
#[command(about = "Per-contributor ownership statistics from git blame", long_about = None)]
struct Cli {
    /// Path to the git repository
    #[arg(long, default_value = ".")]
    repository: PathBuf,

    /// Commit, branch or tag to analyze
    #[arg(long, default_value = "HEAD")]
    revision: String,

    /// Statistic to rank by
    #[arg(long, value_enum, default_value_t = RankKey::Lines)]
    order_by: RankKey,

    /// Attribute lines to the committer instead of the author
    #[arg(long)]
    use_committer: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tabular)]
    format: OutputFormat,

    /// File extensions to keep, e.g. '.go,.md'
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Languages whose extensions to keep, e.g. 'go,markdown'
    #[arg(long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Glob patterns of files to exclude, e.g. 'foo/*,bar/*'
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Glob patterns of files to keep, ignoring all others
    #[arg(long, value_delimiter = ',')]
    restrict_to: Vec<String>,

    /// JSON table mapping languages to extensions (built-in table if omitted)
    #[arg(long, value_name = "PATH")]
    languages_config_path: Option<PathBuf>,

    /// Number of files to blame concurrently
    #[arg(short, long, default_value_t = default_jobs())]
    jobs: usize,

    /// Abort the run after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> gitfame::Result<FameOptions> {
        let mut extensions = self.extensions.clone();
        if !self.languages.is_empty() {
            let table = match &self.languages_config_path {
                Some(path) => LanguageTable::load(path)?,
                None => LanguageTable::builtin()?,
            };
            extensions.extend(table.extensions_for(&self.languages));
        }

        Ok(FameOptions {
            revision: self.revision.clone(),
            rank_key: self.order_by,
            mode: if self.use_committer {
                ContributorMode::Committer
            } else {
                ContributorMode::Author
            },
            filter: FileFilter::new(&extensions, &self.exclude, &self.restrict_to)?,
            jobs: self.jobs,
        })
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match cli.options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let cancel = CancellationToken::new();

    // Ctrl+C and --timeout both cancel outstanding work
    let watcher = cancel.clone();
    let timeout = cli.timeout.map(Duration::from_secs);
    tokio::spawn(async move {
        let deadline = async {
            match timeout {
                Some(t) => tokio::time::sleep(t).await,
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::warn!("Interrupted"),
            _ = deadline => tracing::warn!("Timed out"),
            _ = watcher.cancelled() => return,
        }
        watcher.cancel();
    });

    let report = match analyze_repository(&cli.repository, &options, cancel.clone()).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("✗ {}", e);
            eprintln!("  Repository: {}", cli.repository.display());
            std::process::exit(1);
        }
    };
    cancel.cancel();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&report.ranking, cli.format, &mut out)?;

    Ok(())
}
