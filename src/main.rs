// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use ttaf2vtt::app_config::{self, Config};
use ttaf2vtt::app_controller::Controller;
use ttaf2vtt::converters::IdPolicy;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for IdPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliIdPolicy {
    Positional,
    Sequential,
}

impl From<CliIdPolicy> for IdPolicy {
    fn from(cli_policy: CliIdPolicy) -> Self {
        match cli_policy {
            CliIdPolicy::Positional => IdPolicy::Positional,
            CliIdPolicy::Sequential => IdPolicy::Sequential,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ttaf2vtt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ttaf2vtt - TTAF1 timed text to WebVTT converter
#[derive(Parser, Debug)]
#[command(name = "ttaf2vtt")]
#[command(version)]
#[command(about = "Convert TTAF1 XML subtitles into WebVTT files")]
#[command(long_about = "ttaf2vtt converts legacy TTAF1 (Timed Text Authoring Format) XML captions into WebVTT.

EXAMPLES:
    ttaf2vtt path/to/source.xml path/to/destination.vtt   # Convert a single file
    ttaf2vtt path/to/source_dir path/to/destination_dir   # Convert every .xml file in a directory
    ttaf2vtt --header Sample in.xml out.vtt               # Write `WEBVTT - Sample` as first line
    ttaf2vtt completions bash > ttaf2vtt.bash             # Generate bash completions

CONFIGURATION:
    Settings are read from conf.json when present. Command line options take
    precedence over the configuration file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source TTAF file or directory of TTAF files
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Destination WebVTT file or directory
    #[arg(value_name = "DESTINATION")]
    destination: Option<PathBuf>,

    /// Text appended to the WEBVTT header line
    #[arg(long)]
    header: Option<String>,

    /// Comment written as a NOTE block after the header
    #[arg(long)]
    comment: Option<String>,

    /// Cue id assignment when source cues are skipped
    #[arg(long, value_enum)]
    id_policy: Option<CliIdPolicy>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "ttaf2vtt", &mut std::io::stdout());
        return Ok(());
    }

    let (source, destination) = match (cli.source.clone(), cli.destination.clone()) {
        (Some(source), Some(destination)) => (source, destination),
        _ => {
            CommandLineOptions::command().print_help()?;
            return Err(anyhow!("SOURCE and DESTINATION are required"));
        }
    };

    let config = build_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    if source.is_dir() {
        let summary = controller.convert_directory(&source, &destination).await?;
        info!(
            "Converted {} file(s), {} failed",
            summary.converted, summary.failed
        );
    } else {
        controller.convert_file(&source, &destination)?;
    }

    Ok(())
}

// @merges: Config file values with command line overrides
fn build_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config_path)?;

    if let Some(header) = &cli.header {
        config.header_text = header.clone();
    }
    if let Some(comment) = &cli.comment {
        config.comment = comment.clone();
    }
    if let Some(id_policy) = &cli.id_policy {
        config.id_policy = id_policy.clone().into();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()?;
    Ok(config)
}
