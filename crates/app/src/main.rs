use std::fmt;

use drill_core::model::{MaxFactor, PackSize, PracticeConfig};
use services::SessionController;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
mod desktop;
mod terminal;

use terminal::TerminalFrontend;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue {
        flag: &'static str,
        source: drill_core::Error,
    },
    #[cfg_attr(feature = "desktop", allow(dead_code))]
    DesktopUnavailable,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, source } => write!(f, "invalid {flag} value: {source}"),
            ArgsError::DesktopUnavailable => {
                write!(f, "desktop frontend not built; rebuild with --features desktop")
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  drill [terminal|desktop] [--max-factor <2..12>] [--pack-size <5|10|20>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  terminal frontend, --max-factor 2, --pack-size 5");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_MAX_FACTOR, DRILL_PACK_SIZE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Terminal,
    Desktop,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "terminal" => Some(Self::Terminal),
            "desktop" => Some(Self::Desktop),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    config: PracticeConfig,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        defaults: PracticeConfig,
    ) -> Result<Self, ArgsError> {
        let mut config = defaults;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--max-factor" => {
                    let value = require_value(args, "--max-factor")?;
                    let max_factor =
                        value
                            .parse::<MaxFactor>()
                            .map_err(|err| ArgsError::InvalidValue {
                                flag: "--max-factor",
                                source: err.into(),
                            })?;
                    config = config.with_max_factor(max_factor);
                }
                "--pack-size" => {
                    let value = require_value(args, "--pack-size")?;
                    let pack_size =
                        value
                            .parse::<PackSize>()
                            .map_err(|err| ArgsError::InvalidValue {
                                flag: "--pack-size",
                                source: err.into(),
                            })?;
                    config = config.with_pack_size(pack_size);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config })
    }
}

/// Environment fallbacks; unparsable values are ignored with a warning.
fn config_from_env() -> PracticeConfig {
    let mut config = PracticeConfig::default();

    if let Ok(raw) = std::env::var("DRILL_MAX_FACTOR") {
        match raw.parse::<MaxFactor>() {
            Ok(max_factor) => config = config.with_max_factor(max_factor),
            Err(err) => warn!(%err, "ignoring DRILL_MAX_FACTOR"),
        }
    }
    if let Ok(raw) = std::env::var("DRILL_PACK_SIZE") {
        match raw.parse::<PackSize>() {
            Ok(pack_size) => config = config.with_pack_size(pack_size),
            Err(err) => warn!(%err, "ignoring DRILL_PACK_SIZE"),
        }
    }

    config
}

fn init_tracing() {
    // stderr keeps the terminal frontend's stdout clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Terminal,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Terminal,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, config_from_env()).map_err(|e| {
        print_usage();
        e
    })?;

    match cmd {
        Command::Terminal => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let session = SessionController::new(parsed.config);
            TerminalFrontend::new(session, stdin.lock(), stdout.lock()).run()?;
            Ok(())
        }
        Command::Desktop => launch_desktop(parsed.config),
    }
}

#[cfg(feature = "desktop")]
fn launch_desktop(config: PracticeConfig) -> Result<(), Box<dyn std::error::Error>> {
    desktop::launch(config);
    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn launch_desktop(_config: PracticeConfig) -> Result<(), Box<dyn std::error::Error>> {
    Err(ArgsError::DesktopUnavailable.into())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
