use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use env_logger::Env;
use identsplit::cli::output::{self, OutputFormat};
use identsplit::{dict, expanders, Algorithm, Config, IdentifierSplitter};
use log::debug;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "identsplit")]
#[command(version, about = "Split source-code identifiers into dictionary words", long_about = None)]
struct Cli {
    /// Identifiers to split
    #[arg(value_name = "IDENTIFIERS")]
    identifiers: Vec<String>,

    /// Splitting algorithm (samurai, gentest)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Also expand abbreviations to dictionary words
    #[arg(short, long)]
    expand: bool,

    /// Files or directories to extract identifiers from
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Dictionary to use: an installed name or a path to an FST file
    #[arg(short, long)]
    dictionary: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (defaults to ./.identsplit.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
    /// List candidate expansions of abbreviations
    Expand {
        /// Abbreviations to expand
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List available dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Dictionary name (english, en_US, en_GB)
        name: String,
    },
    /// Build a dictionary from a one-word-per-line file
    Build {
        /// Word list to compile
        wordlist: PathBuf,
        /// Name to install the dictionary under
        name: String,
    },
    /// Show dictionary info
    Info {
        /// Dictionary name, path, or "embedded"
        name: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "identsplit", &mut io::stdout());
        return Ok(());
    }

    let colored_output = !cli.no_color;
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Dict { action }) => handle_dict(action),
        Some(Commands::Expand { tokens }) => {
            let config = Config::load(cli.config, None, cli.dictionary)?;
            expand(&config, &tokens, cli.format, colored_output)
        }
        None => {
            let config = Config::load(cli.config, cli.algorithm, cli.dictionary)?;

            if cli.identifiers.is_empty() && cli.files.is_empty() {
                anyhow::bail!("No identifiers or files specified. Use --help for usage information.");
            }

            split(&config, &cli.identifiers, &cli.files, cli.expand, cli.format, colored_output)
        }
    }
}

fn split(
    config: &Config,
    identifiers: &[String],
    files: &[PathBuf],
    expand: bool,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    let splitter = IdentifierSplitter::new(config)?;
    let algorithm = config.algorithm;
    debug!("splitting with {}", algorithm);

    let mut reports = splitter.split_identifiers(identifiers, algorithm, expand)?;
    if !files.is_empty() {
        reports.extend(splitter.split_files(files, algorithm, expand)?);
    }

    output::print_reports(&reports, algorithm, format, colored_output)
}

fn expand(config: &Config, tokens: &[String], format: OutputFormat, colored_output: bool) -> Result<()> {
    let splitter = IdentifierSplitter::new(config)?;
    let basic = expanders::basic_from_config(config, &splitter.resources().dictionary)?;

    let expansions = tokens
        .iter()
        .map(|token| -> Result<(String, Vec<String>)> { Ok((token.clone(), basic.expand(token)?)) })
        .collect::<Result<Vec<_>>>()?;

    output::print_expansions(&expansions, format, colored_output)
}

fn handle_dict(action: DictCommands) -> Result<()> {
    match action {
        DictCommands::List => dict::manager::list_dictionaries(),
        DictCommands::Download { name } => dict::manager::download_dictionary(&name),
        DictCommands::Build { wordlist, name } => dict::manager::build_dictionary(&wordlist, &name),
        DictCommands::Info { name } => dict::manager::show_info(&name),
    }
}
