//! i18n-asset CLI
//!
//! Command-line interface for inspecting message dictionaries and trying
//! lookups against them.

mod i18n;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use i18n::{t, t_args};
use i18n_asset_core::{Config, Dictionary, DictionaryVariant, Formatter};
use std::fmt::Display;
use std::path::PathBuf;

/// i18n-asset - Message Dictionary Tool
#[derive(Parser)]
#[command(name = "i18n-asset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output format (defaults to the config file setting)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON dictionary file
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Treat the dictionary as plain strings only
    #[arg(long)]
    plain: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information
    Version,
    /// Format a message with positional arguments
    M {
        /// Message code
        code: String,
        /// Positional arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
        /// Text used when the code has no entry
        #[arg(long)]
        default: Option<String>,
    },
    /// Resolve a message with a default and no arguments
    Md {
        /// Message code
        code: String,
        /// Text used when the code has no entry
        #[arg(long)]
        default: Option<String>,
    },
    /// Query the dictionary directly, without default handling
    Lookup {
        /// Message code
        code: String,
        /// Positional arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List all codes
    Codes,
    /// Report empty messages and template statistics
    Check,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
    Compact,
}

impl OutputFormat {
    /// Parse a config file value, falling back to pretty output
    fn from_config(value: &str) -> Self {
        <Self as ValueEnum>::from_str(value, true).unwrap_or(OutputFormat::Pretty)
    }
}

/// Result of one lookup, ready for printing
struct Outcome {
    code: String,
    template: Option<String>,
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = match cli.config {
        Some(ref path) => Config::load_from_path(path).map_err(|e| (path.display().to_string(), e)),
        None => Config::load().map_err(|e| ("~/.i18n-asset/config.toml".to_string(), e)),
    };
    let config = match loaded {
        Ok(config) => {
            init_tracing(cli.verbose || config.general.verbose);
            config
        }
        Err((path, e)) => {
            init_tracing(cli.verbose);
            tracing::warn!("{}", t_args("error-config", &[&path, &e]));
            Config::default()
        }
    };

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.general.default_format));
    let no_color = cli.no_color;

    let command = match cli.command {
        Some(Commands::Version) => {
            print_version();
            return Ok(());
        }
        Some(command) => command,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let dictionary = load_dictionary(cli.dictionary, cli.plain, &config)?;
    let formatter = Formatter::with_options(&dictionary, config.formatter.options());

    match command {
        Commands::M {
            code,
            args,
            default,
        } => {
            let output = formatter.m(&code, &as_args(&args), default.as_deref());
            print_outcome(&outcome(&dictionary, code, output), format, no_color)
        }
        Commands::Md { code, default } => {
            let output = formatter.md(&code, default.as_deref());
            print_outcome(&outcome(&dictionary, code, output), format, no_color)
        }
        Commands::Lookup { code, args } => {
            let output = dictionary.localize(&code, &as_args(&args));
            print_outcome(&outcome(&dictionary, code, output), format, no_color)
        }
        Commands::Codes => print_codes(&dictionary, format),
        Commands::Check => check_dictionary(&formatter, format, no_color),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the dictionary file from the command line, then the config file
fn load_dictionary(cli_path: Option<PathBuf>, plain: bool, config: &Config) -> Result<Dictionary> {
    let mut source = config.dictionary.clone();
    if let Some(path) = cli_path {
        source.path = Some(path);
    }
    if plain {
        source.variant = DictionaryVariant::Plain;
    }

    source
        .load()
        .context(t("error-dictionary"))?
        .context(t("error-no-dictionary"))
}

fn as_args(args: &[String]) -> Vec<&dyn Display> {
    args.iter().map(|a| a as &dyn Display).collect()
}

fn outcome(dictionary: &Dictionary, code: String, output: String) -> Outcome {
    let template = dictionary.lookup(&code).map(ToString::to_string);
    Outcome {
        code,
        template,
        output,
    }
}

fn print_version() {
    println!(
        "{} v{}",
        t("version-title").cyan().bold(),
        i18n_asset_core::VERSION
    );
    println!("{}", t("version-subtitle"));
    println!();
    println!("{}: {}", t("version-core-label"), i18n_asset_core::NAME);
}

fn print_usage() {
    println!("{}", t("usage-title").cyan().bold());
    println!("{}", t("usage-subtitle"));
    println!();
    println!("{}", t("usage-label").yellow());
    println!("    {}", t("usage-line"));
    println!();
    println!("{}", t("examples-label").yellow());
    println!("    {}", t("example-m"));
    println!("    {}", t("example-md"));
    println!("    {}", t("example-codes"));
    println!();
    println!("{}", t("usage-help-hint"));
}

fn print_outcome(outcome: &Outcome, format: OutputFormat, no_color: bool) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            let template = outcome
                .template
                .clone()
                .unwrap_or_else(|| t("result-missing"));
            println!();
            println!("  {} {}", t("result-code-label").dimmed(), outcome.code);
            if no_color || outcome.template.is_some() {
                println!("  {} {}", t("result-template-label").dimmed(), template);
            } else {
                println!("  {} {}", t("result-template-label").dimmed(), template.yellow());
            }
            if no_color {
                println!("  {} {}", t("result-output-label").dimmed(), outcome.output);
            } else {
                println!(
                    "  {} {}",
                    t("result-output-label").dimmed(),
                    outcome.output.green().bold()
                );
            }
            println!();
        }
        OutputFormat::Json => {
            let result = serde_json::json!({
                "code": outcome.code,
                "found": outcome.template.is_some(),
                "template": outcome.template,
                "output": outcome.output,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Compact => {
            println!("{}", outcome.output);
        }
    }

    Ok(())
}

fn print_codes(dictionary: &Dictionary, format: OutputFormat) -> Result<()> {
    let codes = dictionary.codes();

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = codes
                .iter()
                .filter_map(|code| dictionary.lookup(code).map(|template| (code, template)))
                .map(|(code, template)| {
                    serde_json::json!({
                        "code": code,
                        "structured": template.is_structured(),
                        "arity": template.arity(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Pretty | OutputFormat::Compact => {
            for code in &codes {
                println!("{}", code);
            }
            if format == OutputFormat::Pretty {
                println!();
                println!(
                    "{}",
                    t_args("codes-summary", &[&codes.len(), &dictionary.variant()]).dimmed()
                );
            }
        }
    }

    Ok(())
}

fn check_dictionary(formatter: &Formatter<'_>, format: OutputFormat, no_color: bool) -> Result<()> {
    let dictionary = formatter.dictionary();
    let structured = dictionary.iter().filter(|(_, template)| template.is_structured()).count();
    let plain = dictionary.len() - structured;
    let empty: Vec<&str> = dictionary
        .codes()
        .into_iter()
        .filter(|code| formatter.message(code).is_none())
        .collect();

    match format {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "entries": dictionary.len(),
                "structured": structured,
                "plain": plain,
                "empty": empty,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Pretty | OutputFormat::Compact => {
            if format == OutputFormat::Pretty {
                println!("{}", t("check-title").cyan().bold());
                println!("{}", "\u{2500}".repeat(50));
            }
            println!(
                "{}",
                t_args("check-entries", &[&dictionary.len(), &structured, &plain])
            );
            for code in &empty {
                println!("  {}", t_args("check-empty", &[code]));
            }
            let summary = if empty.is_empty() {
                t("check-ok")
            } else {
                t_args("check-problems", &[&empty.len()])
            };
            if no_color {
                println!("{}", summary);
            } else if empty.is_empty() {
                println!("{}", summary.green());
            } else {
                println!("{}", summary.red().bold());
            }
        }
    }

    if !empty.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
