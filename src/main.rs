//! The `mathspan` binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mathspan::Options;

const LOG_ENV: &str = "MATHSPAN_LOG";

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, mathspan will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --config-file none.  It is not an error if the file does not exist."
)]
struct Cli {
    /// Markdown file(s) to scan; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH")]
    config_file: Option<String>,

    /// Specify output format
    #[arg(short = 't', long = "to", value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not recognize $...$ and $$...$$
    #[arg(long)]
    no_dollars: bool,

    /// Do not recognize \(...\) and \[...\]
    #[arg(long)]
    no_escapes: bool,

    /// Punctuation allowed immediately before an inline opener
    #[arg(long, value_name = "CHARS")]
    open_punctuation: Option<String>,

    /// Punctuation allowed immediately after an inline closer
    #[arg(long, value_name = "CHARS")]
    close_punctuation: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Xml,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reading {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("reading standard input: {0}")]
    Stdin(#[source] io::Error),

    #[error("{0} is not valid UTF-8")]
    Utf8(String),

    #[error("config file {}: {}", .path, .source)]
    ConfigRead { path: String, source: io::Error },

    #[error("config file {}: {}", .path, .source)]
    ConfigParse {
        path: String,
        source: shell_words::ParseError,
    },

    #[error("writing output: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mathspan: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let cli = parse_cli()?;
    let options = options_from(&cli);

    let input = read_input(&cli.files)?;
    let doc = mathspan::parse_document(&input, &options);
    debug!(blocks = doc.children.len(), "parsed");

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut bw = BufWriter::new(&mut out);

    match cli.format {
        Format::Html => fmt2io::write(&mut bw, |w| mathspan::format_html(&doc, w))?,
        Format::Xml => fmt2io::write(&mut bw, |w| mathspan::format_xml(&doc, w))?,
    }
    bw.flush()?;

    Ok(())
}

/// Parse the command line, prepending any arguments from the config file.
fn parse_cli() -> Result<Cli, CliError> {
    let cli = Cli::parse();

    let requested = cli.config_file.clone();
    let config_file = match requested.as_deref() {
        Some("none") => return Ok(cli),
        Some(path) => path.to_string(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(cli),
        },
    };

    let buf = match fs::read_to_string(&config_file) {
        Ok(buf) => buf,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(cli),
        Err(source) => {
            return Err(CliError::ConfigRead {
                path: config_file,
                source,
            })
        }
    };

    let config_args = shell_words::split(&buf).map_err(|source| CliError::ConfigParse {
        path: config_file.clone(),
        source,
    })?;
    debug!(config_file = %config_file, args = config_args.len(), "read config file");

    let mut args = env::args_os().collect::<Vec<_>>();
    let at = args.len().min(1);
    args.splice(at..at, config_args.into_iter().map(OsString::from));
    Ok(Cli::parse_from(args))
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn default_config_path() -> Option<String> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mathspan").ok()?;
    let path = xdg_dirs.get_config_file("config");
    path.to_str().map(str::to_string)
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn default_config_path() -> Option<String> {
    None
}

fn options_from(cli: &Cli) -> Options {
    let mut options = Options::default();
    options.extension.math_dollars = !cli.no_dollars;
    options.extension.math_escapes = !cli.no_escapes;

    if let Some(ref open) = cli.open_punctuation {
        options.parse.boundary.open_punctuation = open.clone();
    }
    if let Some(ref close) = cli.close_punctuation {
        options.parse.boundary.close_punctuation = close.clone();
    }
    options
}

fn read_input(files: &[PathBuf]) -> Result<String, CliError> {
    let mut s: Vec<u8> = Vec::with_capacity(2048);

    if files.is_empty() {
        io::stdin().read_to_end(&mut s).map_err(CliError::Stdin)?;
        return String::from_utf8(s).map_err(|_| CliError::Utf8("standard input".to_string()));
    }

    for path in files {
        let mut bytes = fs::read(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        if std::str::from_utf8(&bytes).is_err() {
            return Err(CliError::Utf8(path.display().to_string()));
        }
        s.append(&mut bytes);
    }

    String::from_utf8(s).map_err(|_| CliError::Utf8("input".to_string()))
}
