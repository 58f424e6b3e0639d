//! Lanai - Main entrypoint.
//!
//! Loads the configuration and a word-frequency corpus, then answers a single
//! lookup or completion query from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::corpus::CorpusLoader;
use lanai_lib::data_structures::KaulaTst;
use lanai_lib::error::{report_error, ErrorContext, LanaiError, LanaiResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word-frequency corpus, overriding `corpus.path`
    #[clap(long, value_parser)]
    corpus: Option<PathBuf>,

    /// Print results as a JSON array
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a word is in the dictionary
    Find {
        /// Word to look up
        word: String,
    },

    /// Complete a prefix with the most frequent words
    Complete {
        /// Prefix every result must start with
        prefix: String,

        /// Maximum number of results
        #[clap(short = 'n', long)]
        max_results: Option<usize>,
    },

    /// Match a fixed-length pattern with single-character wildcards
    Pattern {
        /// Pattern such as `g_t_`
        pattern: String,

        /// Maximum number of results
        #[clap(short = 'n', long)]
        max_results: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the dictionary from the configured corpus, if any.
fn build_dictionary(config: &LanaiConfig, corpus: Option<PathBuf>) -> LanaiResult<KaulaTst> {
    let mut tst = KaulaTst::with_config(config.dictionary.tst_config());

    match corpus.or_else(|| config.corpus.path.clone()) {
        Some(path) => {
            CorpusLoader::new(config.corpus.clone()).load_path(&path, &mut tst)?;
        }
        None => tracing::warn!("No corpus configured, dictionary is empty"),
    }

    Ok(tst)
}

/// Prints query results one per line, or as JSON.
fn print_words(words: &[String], json: bool) -> LanaiResult<()> {
    if json {
        println!("{}", serde_json::to_string(words)?);
    } else {
        for word in words {
            println!("{word}");
        }
    }
    Ok(())
}

fn run(args: Args, config: LanaiConfig) -> LanaiResult<()> {
    let default_max = config.dictionary.default_max_results;

    match args.command {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Find { word } => {
            let tst = build_dictionary(&config, args.corpus)?;
            let found = tst.find(&word);
            if args.json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                println!("{found}");
            }
            Ok(())
        }
        Command::Complete { prefix, max_results } => {
            let tst = build_dictionary(&config, args.corpus)?;
            let words = tst.predict_completions(&prefix, max_results.unwrap_or(default_max));
            print_words(&words, args.json)
        }
        Command::Pattern { pattern, max_results } => {
            let tst = build_dictionary(&config, args.corpus)?;
            let words = tst.predict_underscores(&pattern, max_results.unwrap_or(default_max));
            print_words(&words, args.json)
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }
    lanai_lib::init();

    if let Err(e) = run(args, config) {
        report_error(ErrorContext::new(e, "lanai"));
        process::exit(1);
    }
}
