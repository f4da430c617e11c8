//! phonetree - load a bopomofo vocabulary into a metric tree and query it.

mod config;
mod output;
mod tsi;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use giztoy_bopomofo::distance_str;
use giztoy_phonetree::{BkTree, Config, FqTree, Index, Tree};
use tracing_subscriber::EnvFilter;

use output::{Output, OutputFormat, QueryReport};

/// Fuzzy bopomofo lookup over a tsi.src vocabulary.
///
/// Every phrase's transcription is indexed by syllable count in either a
/// BK-tree or a fixed-query tree; queries return every entry closer than
/// the threshold under the component-wise phonetic distance.
#[derive(Parser)]
#[command(name = "phonetree")]
#[command(about = "Fuzzy bopomofo lookup over a tsi.src vocabulary")]
#[command(version)]
struct Cli {
    /// Index config file (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed-query-tree leaf capacity (overrides config)
    #[arg(long, global = true)]
    bucket_size: Option<usize>,

    /// Longest transcription to index, in syllables (overrides config)
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TreeKind {
    /// Burkhard-Keller tree
    Bk,
    /// Fixed-query tree
    Fq,
}

#[derive(Args)]
struct SourceArgs {
    /// Vocabulary file in tsi.src format
    #[arg(short = 's', long)]
    source: PathBuf,

    /// Index structure
    #[arg(long, value_enum, default_value_t = TreeKind::Bk)]
    tree: TreeKind,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index and print per-length counters
    Stats(SourceArgs),
    /// Build the index and look up each text
    Query {
        #[command(flatten)]
        source: SourceArgs,

        /// Exclusive distance bound
        #[arg(short = 't', long, default_value_t = 2)]
        threshold: u32,

        /// Space-separated bopomofo, e.g. "ㄘㄜˋ ㄕˋ"
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Print the phonetic distance between two transcriptions
    Distance { a: String, b: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli.format
    };
    let out = Output::new(format);
    let cfg = config::apply(
        config::load(cli.config.as_deref())?,
        cli.bucket_size,
        cli.max_length,
    );

    match &cli.command {
        Commands::Stats(src) => match src.tree {
            TreeKind::Bk => out.stats(&build::<BkTree>(&src.source, cfg)?.stats()),
            TreeKind::Fq => out.stats(&build::<FqTree>(&src.source, cfg)?.stats()),
        },
        Commands::Query {
            source: src,
            threshold,
            texts,
        } => {
            let reports = match src.tree {
                TreeKind::Bk => {
                    run_queries(&build::<BkTree>(&src.source, cfg)?, texts, *threshold)?
                }
                TreeKind::Fq => {
                    run_queries(&build::<FqTree>(&src.source, cfg)?, texts, *threshold)?
                }
            };
            out.queries(&reports)
        }
        Commands::Distance { a, b } => {
            println!("{}", distance_str(a, b)?);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build<T: Tree>(source: &Path, cfg: Config) -> Result<Index<T>> {
    let records = tsi::load(source)?;
    let mut index = Index::<T>::with_config(cfg)?;
    let summary = index.insert(records.iter().map(|r| r.bopomofo.as_str()));
    tracing::info!(
        source = %source.display(),
        records = records.len(),
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        rejected = summary.rejected.len(),
        "vocabulary indexed"
    );
    Ok(index)
}

fn run_queries<T: Tree>(
    index: &Index<T>,
    texts: &[String],
    threshold: u32,
) -> Result<Vec<QueryReport>> {
    texts
        .iter()
        .map(|text| -> Result<QueryReport> {
            let found = index.search(text, threshold)?;
            Ok(QueryReport {
                query: text.clone(),
                threshold,
                lookups: found.lookups,
                matches: found.matches,
            })
        })
        .collect()
}
