use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info};
use md2html::{CliError, Config};

#[derive(Parser)]
#[command(name = "markdown2html")]
#[command(version, about = "Convert a Markdown file to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (created or overwritten)
    output: PathBuf,

    /// Anything after the two paths is ignored
    #[arg(hide = true)]
    extra: Vec<OsString>,

    /// TOML config file (defaults to the built-in settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only convert headings, bold and italic; leave list lines alone
    #[arg(long)]
    no_lists: bool,
}

impl Cli {
    /// Plain `<input> <output> [ignored...]` reading of the arguments, used when
    /// they don't parse as options (e.g. an input named `-notes.md`).
    fn from_paths(args: &[OsString]) -> Self {
        Self {
            input: PathBuf::from(&args[0]),
            output: PathBuf::from(&args[1]),
            extra: args[2..].to_vec(),
            config: None,
            no_lists: false,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<OsString> = std::env::args_os().collect();

    // Fewer than two arguments is always a usage error, `--help` included
    if args.len() < 3 {
        return Err(CliError::Usage {
            program: program_name(args.first()),
        });
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e)
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
                && args[1..].iter().any(|arg| is_help_or_version(arg)) =>
        {
            e.exit()
        }
        Err(e) => {
            debug!("argument error: {e}; treating the first two arguments as paths");
            Cli::from_paths(&args[1..])
        }
    };

    if !cli.extra.is_empty() {
        debug!("ignoring {} extra argument(s)", cli.extra.len());
    }

    // Nothing may touch the output before this check
    if !cli.input.is_file() {
        return Err(CliError::MissingInput(cli.input));
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default().clone(),
    };
    if cli.no_lists {
        config.passes.lists = false;
    }

    let markdown = fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;

    let html = md2html::translate_with_config(&markdown, &config);

    fs::write(&cli.output, &html).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;

    info!("Created {} ({} bytes)", cli.output.display(), html.len());
    Ok(())
}

// Only the exact flags; `-hello.md` is a file name, not `-h`.
fn is_help_or_version(arg: &OsString) -> bool {
    matches!(
        arg.to_str(),
        Some("-h" | "--help" | "-V" | "--version")
    )
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(
            || "markdown2html".to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
