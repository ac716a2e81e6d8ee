use std::env;
use std::path::PathBuf;

use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use rimetab_cli::pipeline;

const DEFAULT_CORPUS: &str = "corpus.txt";
const DEFAULT_TABLE: &str = "table.csv";
const DEFAULT_OUTPUT: &str = "result.csv";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("corpus    : {}", config.corpus.display());
    info!("rule table: {}", config.table.display());
    info!("output    : {}", config.output.display());

    pipeline::run(&config.corpus, &config.table, &config.output)
}

#[derive(Debug, Clone)]
struct Config {
    corpus: PathBuf,
    table: PathBuf,
    output: PathBuf,
}

fn load_config() -> Config {
    let mut cli_corpus: Option<PathBuf> = None;
    let mut cli_table: Option<PathBuf> = None;
    let mut cli_output: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--corpus" => cli_corpus = args.next().map(PathBuf::from),
            "--table" => cli_table = args.next().map(PathBuf::from),
            "--output" => cli_output = args.next().map(PathBuf::from),
            _ => {
                if let Some(path) = arg.strip_prefix("--corpus=") {
                    cli_corpus = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--table=") {
                    cli_table = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--output=") {
                    cli_output = Some(PathBuf::from(path));
                }
            }
        }
    }

    let corpus = cli_corpus
        .or_else(|| env::var("CORPUS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS));
    let table = cli_table
        .or_else(|| env::var("RULE_TABLE_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE));
    let output = cli_output
        .or_else(|| env::var("REPORT_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    Config {
        corpus,
        table,
        output,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
