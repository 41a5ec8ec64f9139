//! Command-line interface for webtools.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use webtools_capture::config::{CAPTURE_KEY, PATTERN_KEY};
use webtools_capture::{parse_email_bytes, parse_html_bytes, Action, Value};

use crate::config::FetchConfig;
use crate::error::Result;
use crate::http::{create_client, fetch_html};
use crate::parameters::load_parameters;

/// Webtools - capture structured values from HTML pages and emails.
#[derive(Parser)]
#[command(name = "webtools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture values from an HTML document.
    Html {
        /// HTML file to read (default: stdin)
        file: Option<PathBuf>,

        /// Capture parameter file (JSON, or YAML by extension)
        #[arg(short, long)]
        spec: PathBuf,

        /// Character encoding label (default: utf-8, or the byte order mark)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Capture values from a MIME email message.
    Email {
        /// Message file to read (default: stdin)
        file: Option<PathBuf>,

        /// Capture parameter file (JSON, or YAML by extension)
        #[arg(short, long)]
        spec: PathBuf,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch an HTML page over HTTP and capture values from it.
    Fetch {
        /// URL of the page
        url: String,

        /// Capture parameter file (JSON, or YAML by extension)
        #[arg(short, long)]
        spec: PathBuf,

        /// Maximum response size in bytes
        #[arg(long)]
        max_size: Option<u64>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a host action by name on a document or message.
    Run {
        /// Action name (see `webtools actions`)
        action: String,

        /// Content file to read (default: stdin)
        file: Option<PathBuf>,

        /// Parameter file with `capture` and, for email, `pattern`
        #[arg(short, long)]
        spec: PathBuf,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the action names a workflow host can register.
    Actions,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Html {
            file,
            spec,
            encoding,
            output,
        } => html_command(file.as_deref(), &spec, encoding.as_deref(), output.as_deref()),
        Commands::Email { file, spec, output } => {
            email_command(file.as_deref(), &spec, output.as_deref())
        }
        Commands::Fetch {
            url,
            spec,
            max_size,
            output,
        } => fetch_command(&url, &spec, max_size, output.as_deref()),
        Commands::Run {
            action,
            file,
            spec,
            output,
        } => run_command(&action, file.as_deref(), &spec, output.as_deref()),
        Commands::Actions => {
            actions_command();
            Ok(())
        }
    }
}

/// Execute the html command.
fn html_command(
    file: Option<&Path>,
    spec: &Path,
    encoding: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let parameters = load_parameters(spec)?;
    let result = parse_html_bytes(open_input(file)?, encoding, &parameters)?;
    write_result(&result, output)
}

/// Execute the email command.
fn email_command(file: Option<&Path>, spec: &Path, output: Option<&Path>) -> Result<()> {
    let parameters = load_parameters(spec)?;

    let mut raw = Vec::new();
    open_input(file)?.read_to_end(&mut raw)?;

    let result = parse_email_bytes(&raw, &parameters)?;
    write_result(&result, output)
}

/// Execute the fetch command.
fn fetch_command(
    url: &str,
    spec: &Path,
    max_size: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let parameters = load_parameters(spec)?;

    let mut config = FetchConfig::from_env()?;
    if let Some(max_size) = max_size {
        config = config.with_max_response_size(max_size);
    }

    let client = create_client(&config)?;

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Fetching {url}..."));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = fetch_html(&client, url, &parameters, &config);
    pb.finish_and_clear();

    write_result(&result?, output)
}

/// Execute the run command.
fn run_command(
    name: &str,
    file: Option<&Path>,
    spec: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let action = Action::from_name(name)?;
    let parameters = load_parameters(spec)?;

    let mut content = String::new();
    open_input(file)?.read_to_string(&mut content)?;

    let result = action.evaluate(
        Some(&content),
        parameters.get(CAPTURE_KEY),
        parameters.get(PATTERN_KEY).as_str(),
    )?;
    write_result(&result, output)
}

/// Print every registered action name.
fn actions_command() {
    for action in Action::ALL {
        println!("{}", action.name());
    }
}

/// Open the input file, or stdin when no file (or `-`) is given.
fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) if path != Path::new("-") => Ok(Box::new(File::open(path)?)),
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Write a result as pretty JSON.
///
/// An undefined result is not an error: a notice goes to stderr and nothing
/// is written.
fn write_result(result: &Value, output: Option<&Path>) -> Result<()> {
    if result.is_undefined() {
        eprintln!(
            "{} nothing was captured",
            style("No result:").yellow().bold()
        );
        return Ok(());
    }

    let json = serde_json::to_string_pretty(result)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
