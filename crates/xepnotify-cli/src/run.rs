//! Top-level flow of one invocation

use std::io::{self, IsTerminal};

use xepnotify_core::{collect_updates, load_registry, BumpFilter, Envelope, PlanOptions};

use crate::deliver::{deliver, AlwaysSend, Confirm, DeliveryOutcome, TerminalConfirm};
use crate::error::{exit_code, CliError};
use crate::settings::{self, SmtpOptions};
use crate::transport::{DryRunMailer, Mailer, SmtpMailer};
use crate::Cli;

/// Run one invocation and return the process exit code
///
/// The mailer is dropped before this returns, so an SMTP session is always
/// closed before the process exits.
///
/// # Errors
///
/// Any failure before or during delivery; see [`CliError::exit_code`].
pub fn run(cli: &Cli) -> Result<i32, CliError> {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let ask_confirmation = !(cli.yes || cli.dry_run);

    if ask_confirmation && !interactive {
        return Err(CliError::NotInteractive);
    }

    let mut smtp_options = settings::load(cli.config.as_deref())?;

    let old = load_registry(&cli.old)?;
    let new = load_registry(&cli.new)?;
    let options = PlanOptions {
        include_protoxep: !cli.no_proto,
        bump_filter: BumpFilter {
            include_editorial: !cli.no_editorial,
            include_non_editorial: !cli.no_non_editorial,
        },
    };
    let updates = collect_updates(&old, &new, &options);

    let (mut mailer, from): (Box<dyn Mailer>, Option<String>) = if cli.dry_run {
        let from = smtp_options.from.clone();
        (Box::new(DryRunMailer::new(io::stdout())), from)
    } else {
        let mailer = open_session(&mut smtp_options, interactive)?;
        (Box::new(mailer), smtp_options.from.clone())
    };

    let addressing = Envelope::new(from, cli.to.clone());
    let mut confirm: Box<dyn Confirm> = if ask_confirmation {
        Box::new(TerminalConfirm::new(io::stdin().lock(), io::stdout()))
    } else {
        Box::new(AlwaysSend)
    };

    match deliver(&updates, &addressing, mailer.as_mut(), confirm.as_mut())? {
        DeliveryOutcome::Completed { .. } => Ok(exit_code::SUCCESS),
        DeliveryOutcome::Aborted { .. } => {
            eprintln!("Exiting on user request.");
            Ok(exit_code::ABORTED)
        }
    }
}

fn open_session(options: &mut SmtpOptions, interactive: bool) -> Result<SmtpMailer, CliError> {
    if interactive {
        options.extend_interactively(
            &mut io::stdin().lock(),
            &mut io::stdout(),
            |prompt: &str| rpassword::prompt_password(prompt),
        )?;
    }

    let settings = options.resolve().map_err(|err| {
        if matches!(err, CliError::MissingConfig { .. }) && !interactive {
            eprintln!("(cannot ask for configuration on stdio because it is not a TTY)");
        }
        err
    })?;
    SmtpMailer::connect(&settings)
}
