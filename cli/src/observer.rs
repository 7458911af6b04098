//! Forwards draw events to `tracing`.

use secret_santa_core_rs::{DrawEvent, DrawObserver};

/// Logs rejections at debug level and the outcome at info / warn
#[derive(Debug, Default)]
pub struct TracingObserver {
    rejections: usize,
}

impl DrawObserver for TracingObserver {
    fn on_event(&mut self, event: &DrawEvent) {
        match event {
            DrawEvent::AttemptStarted { attempt } => {
                tracing::trace!(attempt, "attempt started");
            }
            DrawEvent::CandidateRejected {
                attempt,
                position,
                giver_email,
                receiver_email,
                reason,
            } => {
                self.rejections += 1;
                tracing::debug!(
                    attempt,
                    position,
                    giver = %giver_email,
                    receiver = %receiver_email,
                    "candidate rejected: {}",
                    reason.as_str()
                );
            }
            DrawEvent::DrawSucceeded { attempt, participants } => {
                tracing::info!(
                    attempts = attempt,
                    participants,
                    rejections = self.rejections,
                    "valid draw found"
                );
            }
            DrawEvent::DrawFailed { attempt, participants } => {
                tracing::warn!(attempts = attempt, participants, "attempt budget exhausted");
            }
        }
    }
}
