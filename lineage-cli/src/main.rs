//! Command-line interface for lineage
//! Converts an OCR-derived genealogical register into structured markup.
//!
//! Usage:
//!   lineage `<path>` [--to `<format>`] [--output `<file>`]   - Convert a register
//!   lineage `<path>` --skip-log `<file>` --config `<file>`   - Override the side file and settings
//!   lineage --list-formats                                   - List all available output formats
//!
//! Rendered output goes to stdout unless `--output` is given. Counts and diagnostics go to
//! stderr; set `RUST_LOG` (e.g. `RUST_LOG=lineage_parser=debug`) for more detail.

use clap::{Arg, ArgAction, ArgMatches, Command};
use lineage_babel::{FormatError, FormatRegistry};
use lineage_config::{LineageConfig, LoadError, Loader};
use lineage_parser::{LoaderError, ParserOptions, RegisterLoader};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let matches = Command::new("lineage")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert OCR-derived genealogical registers into structured markup")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the register text file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output format (default: from --output extension, else the configured format)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write rendered output to this file instead of stdout"),
        )
        .arg(
            Arg::new("skip-log")
                .long("skip-log")
                .help("Side file listing records that could not be parsed"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match handle_convert_command(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if let CliError::Format(FormatError::FormatNotFound(_)) = err {
                eprintln!("\nAvailable formats:");
                for name in FormatRegistry::with_defaults().list_formats() {
                    eprintln!("  {}", name);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let registry = FormatRegistry::with_defaults();

    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let format = match matches.get_one::<String>("to") {
        Some(format) => format.clone(),
        None => output
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| registry.detect_from_extension(&ext.to_string_lossy()))
            .map(str::to_string)
            .unwrap_or_else(|| config.output.format.clone()),
    };
    // Fail on an unknown format before doing any work.
    registry.get(&format)?;

    let Some(path) = matches.get_one::<String>("path") else {
        return Ok(());
    };
    let outcome = RegisterLoader::from_path(path)?
        .with_options(parser_options(&config))
        .parse();
    debug!(
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        unresolved = outcome.unresolved_count(),
        "parsed register"
    );

    let skip_log = &config.output.skip_log;
    let file = File::create(skip_log).map_err(|source| write_error(skip_log, source))?;
    outcome
        .skipped
        .write_to(BufWriter::new(file))
        .map_err(|source| write_error(skip_log, source))?;

    let rendered = registry.serialize(&outcome.records, &format)?;
    match &output {
        Some(file) => fs::write(file, rendered).map_err(|source| write_error(file, source))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|()| handle.flush())
                .map_err(|source| write_error(Path::new("<stdout>"), source))?;
        }
    }

    eprintln!("Successfully processed {} entries", outcome.records.len());
    eprintln!("Skipped {} entries", outcome.skipped.len());
    if !outcome.skipped.is_empty() {
        eprintln!("Details of skipped entries written to {}", skip_log.display());
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", format.name());
            println!("    {}", format.description());
            println!();
        }
    }
}

fn load_config(matches: &ArgMatches) -> Result<LineageConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(skip_log) = matches.get_one::<String>("skip-log") {
        loader = loader.set_override("output.skip_log", skip_log.as_str())?;
    }
    Ok(loader.build()?)
}

fn parser_options(config: &LineageConfig) -> ParserOptions {
    ParserOptions {
        min_id_digits: config.parser.min_id_digits,
        bio_split_threshold: config.parser.bio_split_threshold,
        max_roman_length: config.parser.max_roman_length,
    }
}

fn write_error(path: &Path, source: io::Error) -> CliError {
    CliError::Write {
        path: path.to_path_buf(),
        source,
    }
}
