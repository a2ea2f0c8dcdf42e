//! Delivery loop: compose, confirm, send

use std::io::{BufRead, Write};
use std::time::Instant;

use xepnotify_core::{compose, log_op_end, log_op_error, log_op_start};
use xepnotify_core::{Envelope, PendingUpdate};

use crate::error::CliError;
use crate::prompt::choose;
use crate::transport::Mailer;

pub const CUT_START: &str = "---8<---";
pub const CUT_END: &str = "--->8---";
pub const CONFIRM_PROMPT: &str = "Send this email? [y]es, [n]o, [a]bort: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Send,
    Skip,
    Abort,
}

/// Decides per rendered message whether it goes out
pub trait Confirm {
    /// # Errors
    ///
    /// I/O errors while talking to the user.
    fn confirm(&mut self, rendered: &str) -> Result<Choice, CliError>;
}

/// Used with `-y` and for dry runs
pub struct AlwaysSend;

impl Confirm for AlwaysSend {
    fn confirm(&mut self, _rendered: &str) -> Result<Choice, CliError> {
        Ok(Choice::Send)
    }
}

/// Shows the message between cut markers and asks on the terminal
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, rendered: &str) -> Result<Choice, CliError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", CUT_START)?;
        write!(self.output, "{}", rendered)?;
        writeln!(self.output, "{}", CUT_END)?;
        writeln!(self.output)?;

        let choice = choose(CONFIRM_PROMPT, "yna", 'a', &mut self.input, &mut self.output)?;
        Ok(match choice {
            'y' => Choice::Send,
            'n' => Choice::Skip,
            _ => Choice::Abort,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Completed { sent: usize, skipped: usize },
    Aborted { sent: usize, skipped: usize },
}

/// Compose, confirm and send every queued update in order
///
/// `addressing` supplies sender and recipients; each message is dated when
/// it is composed. Abort stops before anything else is sent.
///
/// # Errors
///
/// The first transport or prompt error; later updates are not attempted.
pub fn deliver(
    updates: &[PendingUpdate<'_>],
    addressing: &Envelope,
    mailer: &mut dyn Mailer,
    confirm: &mut dyn Confirm,
) -> Result<DeliveryOutcome, CliError> {
    let start = Instant::now();
    log_op_start!("deliver", updates_len = updates.len());

    let result = deliver_all(updates, addressing, mailer, confirm);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => log_op_end!("deliver", duration_ms = duration_ms, outcome = ?outcome),
        Err(err) => log_op_error!("deliver", err, duration_ms = duration_ms),
    }
    result
}

fn deliver_all(
    updates: &[PendingUpdate<'_>],
    addressing: &Envelope,
    mailer: &mut dyn Mailer,
    confirm: &mut dyn Confirm,
) -> Result<DeliveryOutcome, CliError> {
    let mut sent = 0;
    let mut skipped = 0;

    for update in updates {
        let notification = compose(update.action, update.info);
        let envelope = Envelope::new(addressing.from.clone(), addressing.to.clone());

        match confirm.confirm(&notification.render(&envelope))? {
            Choice::Send => {}
            Choice::Skip => {
                tracing::info!(xep = %update.key, action = %update.action, "skipped by user");
                skipped += 1;
                continue;
            }
            Choice::Abort => {
                tracing::warn!(xep = %update.key, "aborted by user");
                return Ok(DeliveryOutcome::Aborted { sent, skipped });
            }
        }

        mailer.send(&notification, &envelope)?;
        tracing::info!(xep = %update.key, action = %update.action, "notification sent");
        sent += 1;
    }

    Ok(DeliveryOutcome::Completed { sent, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Cursor;
    use xepnotify_core::{Action, Notification, Status, XepInfo, XepKey};

    #[derive(Default)]
    struct RecordingMailer {
        subjects: Vec<String>,
        fail: bool,
    }

    impl Mailer for RecordingMailer {
        fn send(&mut self, notification: &Notification, _: &Envelope) -> Result<(), CliError> {
            if self.fail {
                return Err(CliError::Transport("connection reset".into()));
            }
            self.subjects.push(notification.subject.clone());
            Ok(())
        }
    }

    struct Scripted(VecDeque<Choice>);

    impl Confirm for Scripted {
        fn confirm(&mut self, _: &str) -> Result<Choice, CliError> {
            Ok(self.0.pop_front().unwrap_or(Choice::Abort))
        }
    }

    fn infos() -> Vec<XepInfo> {
        vec![
            XepInfo::new(XepKey::Accepted(1), "One", Status::Experimental),
            XepInfo::new(XepKey::Accepted(2), "Two", Status::Experimental),
            XepInfo::new(XepKey::Accepted(3), "Three", Status::Experimental),
        ]
    }

    fn updates(infos: &[XepInfo]) -> Vec<PendingUpdate<'_>> {
        infos
            .iter()
            .map(|info| PendingUpdate {
                key: info.key.clone(),
                action: Action::New,
                info,
            })
            .collect()
    }

    fn addressing() -> Envelope {
        Envelope::new(None, vec!["standards@example.org".to_string()])
    }

    #[test]
    fn test_always_send_delivers_everything_in_order() {
        let infos = infos();
        let mut mailer = RecordingMailer::default();
        let outcome =
            deliver(&updates(&infos), &addressing(), &mut mailer, &mut AlwaysSend).unwrap();

        assert_eq!(outcome, DeliveryOutcome::Completed { sent: 3, skipped: 0 });
        assert_eq!(
            mailer.subjects,
            vec!["NEW: XEP-0001 (One)", "NEW: XEP-0002 (Two)", "NEW: XEP-0003 (Three)"]
        );
    }

    #[test]
    fn test_skip_continues_and_abort_stops() {
        let infos = infos();
        let mut mailer = RecordingMailer::default();
        let mut confirm = Scripted(VecDeque::from([Choice::Skip, Choice::Send, Choice::Abort]));
        let outcome = deliver(&updates(&infos), &addressing(), &mut mailer, &mut confirm).unwrap();

        assert_eq!(outcome, DeliveryOutcome::Aborted { sent: 1, skipped: 1 });
        assert_eq!(mailer.subjects, vec!["NEW: XEP-0002 (Two)"]);
    }

    #[test]
    fn test_transport_error_stops_delivery() {
        let infos = infos();
        let mut mailer = RecordingMailer {
            fail: true,
            ..RecordingMailer::default()
        };
        let err = deliver(&updates(&infos), &addressing(), &mut mailer, &mut AlwaysSend)
            .unwrap_err();
        assert!(matches!(err, CliError::Transport(_)));
    }

    #[test]
    fn test_empty_plan_completes() {
        let mut mailer = RecordingMailer::default();
        let outcome = deliver(&[], &addressing(), &mut mailer, &mut AlwaysSend).unwrap();
        assert_eq!(outcome, DeliveryOutcome::Completed { sent: 0, skipped: 0 });
    }

    #[test]
    fn test_terminal_confirm_shows_markers_and_parses_answers() {
        let mut output = Vec::new();
        {
            let mut confirm = TerminalConfirm::new(Cursor::new("what\ny\nn\n"), &mut output);
            assert_eq!(confirm.confirm("Subject: x\n\nbody\n").unwrap(), Choice::Send);
            assert_eq!(confirm.confirm("Subject: y\n\nbody\n").unwrap(), Choice::Skip);
            assert_eq!(confirm.confirm("Subject: z\n\nbody\n").unwrap(), Choice::Abort);
        }
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("\n---8<---\nSubject: x\n\nbody\n--->8---\n\n"));
        assert_eq!(text.matches(CONFIRM_PROMPT).count(), 4);
    }
}
