//! xepnotify
//!
//! Compares two XEP registry snapshots and mails an announcement for every
//! change worth telling the community about.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use xepnotify_core::logging_facility::{self, Profile};

mod deliver;
mod error;
mod prompt;
mod run;
mod settings;
mod transport;

const CONFIG_HELP: &str = "\
Configuration file (INI, given with -c):

  [smtp]
  host=<smtp server to send through>
  port=587
  user=<optional user name for authentication>
  password=<optional password for authentication>
  from=<sender address>

Every option can be overridden with XEPNOTIFY_SMTP__<OPTION>, e.g.
XEPNOTIFY_SMTP__PASSWORD. If options are missing and both standard input
and standard output are terminals, they are asked for interactively. If no
terminal is connected, the tool exits with code 3 instead.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "xepnotify")]
#[command(about = "Send XEP update notifications", long_about = None)]
#[command(after_help = CONFIG_HELP)]
pub struct Cli {
    /// Configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Send without asking for confirmation
    #[arg(short = 'y')]
    pub yes: bool,

    /// Do not announce ProtoXEPs
    #[arg(long = "no-proto")]
    pub no_proto: bool,

    /// Print the emails instead of sending them (implies -y)
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Do not announce editorial (patch-level) version bumps
    #[arg(long = "no-editorial")]
    pub no_editorial: bool,

    /// Do not announce non-editorial (minor or major) version bumps
    #[arg(long = "no-non-editorial")]
    pub no_non_editorial: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,

    /// Old xep-infos XML file
    pub old: PathBuf,

    /// New xep-infos XML file
    pub new: PathBuf,

    /// Addresses to send the update mails to
    #[arg(required = true)]
    pub to: Vec<String>,
}

impl Cli {
    fn log_profile(&self) -> Profile {
        match (self.log_format, self.verbose) {
            (LogFormat::Json, _) => Profile::Production,
            (LogFormat::Human, true) => Profile::Development,
            (LogFormat::Human, false) => Profile::Interactive,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile());

    // The SMTP session lives inside run() and is released before exiting.
    let code = match run::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}
