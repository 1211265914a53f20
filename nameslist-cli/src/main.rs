//! Command-line interface for the NamesList converter
//! Reads a Unicode NamesList.txt file and writes it out as XML (or one of the debug formats).
//!
//! Usage:
//!   nameslist [-n `<input>`] [-o `<output>`] [-f `<format>`] [-C]   - Convert a NamesList file
//!   nameslist --list-formats                                     - List the output formats
//!
//! Settings come from the embedded defaults, then `--config <file>`, then the flags above.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use nameslist_babel::formats::XmlFormat;
use nameslist_babel::{c_declarations, FormatRegistry};
use nameslist_config::{Loader, NamesListConfig};
use nameslist_parser::nameslist::{DocumentLoader, LoaderError};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const NAMESLIST_URL: &str = "http://www.unicode.org/Public/UNIDATA/NamesList.txt";

fn cli() -> Command {
    Command::new("nameslist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert the Unicode NamesList.txt file to XML")
        .arg(
            Arg::new("name")
                .short('n')
                .value_name("NAME")
                .help("NamesList file to read (default: NamesList.txt)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .value_name("OUTPUT")
                .help("File to write; the format's extension is appended when missing (default: NamesList.xml)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_name("FORMAT")
                .help("Output format (default: xml)"),
        )
        .arg(
            Arg::new("c-structs")
                .short('C')
                .help("Also print C structures with the XML tags and attributes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Log destination, empty for stderr (default: parser.log)"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let exit_code = match run(&matches) {
        Ok(()) => 0,
        Err(err) => {
            report(&err);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Defaults, then the `--config` file, then flags.
fn load_config(matches: &ArgMatches) -> Result<NamesListConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (arg, key) in [
        ("name", "input.path"),
        ("output", "output.path"),
        ("format", "output.format"),
        ("log-file", "logging.file"),
    ] {
        if let Some(value) = matches.get_one::<String>(arg) {
            loader = loader.set_override(key, value.as_str())?;
        }
    }
    loader.build().context("invalid configuration")
}

fn init_logging(config: &NamesListConfig) -> Result<()> {
    let writer = match config.logging.file_path() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

/// Append `.ext` unless the path already ends with it.
fn with_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().and_then(|e| e.to_str()) == Some(extension) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    init_logging(&config)?;

    let mut registry = FormatRegistry::default();
    registry.register(XmlFormat::new(
        config.xml.indent.as_str(),
        config.xml.declaration,
    ));
    let format = registry.get(&config.output.format)?;

    info!("Parsing {}", config.input.path.display());
    let doc = DocumentLoader::from_path(&config.input.path).parse()?;
    let serialized = format.serialize(&doc)?;

    let output = match format.file_extensions().first() {
        Some(extension) => with_extension(&config.output.path, extension),
        None => config.output.path.clone(),
    };
    fs::write(&output, serialized)
        .with_context(|| format!("cannot write {}", output.display()))?;
    info!(
        "Wrote {} nodes to {} as {}",
        doc.node_count(),
        output.display(),
        format.name()
    );

    if matches.get_flag("c-structs") {
        print!("{}", c_declarations());
    }
    Ok(())
}

fn report(err: &anyhow::Error) {
    if let Some(LoaderError::File { path, source }) = err.downcast_ref::<LoaderError>() {
        if source.kind() == ErrorKind::NotFound {
            eprintln!("No such file: {}", path.display());
            eprintln!("You can find the required file on: {}", NAMESLIST_URL);
            return;
        }
    }
    eprintln!("Error: {:#}", err);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
