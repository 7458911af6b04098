//! Draw events and the observer hook.
//!
//! The generator reports what it is doing through [`DrawObserver`]. Nothing
//! in the search depends on the observer: the default [`NoopObserver`]
//! discards everything, [`EventLog`] keeps events in memory for tests and
//! auditing, and front ends can forward events to their own logging.
//!
//! # Example
//!
//! ```rust
//! use secret_santa_core_rs::models::{DrawEvent, DrawObserver, EventLog};
//!
//! let mut log = EventLog::new();
//! log.on_event(&DrawEvent::AttemptStarted { attempt: 1 });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events()[0].attempt(), 1);
//! ```

/// Why a candidate pairing was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// Giver and receiver share an email
    SelfMatch,

    /// Giver had this receiver in the previous round
    RepeatOfPriorRound,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::SelfMatch => "self-match",
            RejectionReason::RepeatOfPriorRound => "repeat of prior round",
        }
    }
}

/// Something that happened during a draw.
///
/// All events carry the 1-based attempt number they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    /// A new shuffled receiver sequence is about to be checked
    AttemptStarted { attempt: usize },

    /// The candidate was abandoned at `position`
    CandidateRejected {
        attempt: usize,
        position: usize,
        giver_email: String,
        receiver_email: String,
        reason: RejectionReason,
    },

    /// Every position passed; the draw is complete
    DrawSucceeded { attempt: usize, participants: usize },

    /// Budget exhausted without a valid candidate
    DrawFailed { attempt: usize, participants: usize },
}

impl DrawEvent {
    /// Attempt number this event belongs to
    pub fn attempt(&self) -> usize {
        match self {
            DrawEvent::AttemptStarted { attempt } => *attempt,
            DrawEvent::CandidateRejected { attempt, .. } => *attempt,
            DrawEvent::DrawSucceeded { attempt, .. } => *attempt,
            DrawEvent::DrawFailed { attempt, .. } => *attempt,
        }
    }

    /// Event type name, for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            DrawEvent::AttemptStarted { .. } => "AttemptStarted",
            DrawEvent::CandidateRejected { .. } => "CandidateRejected",
            DrawEvent::DrawSucceeded { .. } => "DrawSucceeded",
            DrawEvent::DrawFailed { .. } => "DrawFailed",
        }
    }
}

/// Receives draw events as they happen
pub trait DrawObserver {
    fn on_event(&mut self, event: &DrawEvent);
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl DrawObserver for NoopObserver {
    fn on_event(&mut self, _event: &DrawEvent) {}
}

/// In-memory record of draw events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<DrawEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn log(&mut self, event: DrawEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    /// Events of one type, in order
    pub fn events_of_type(&self, event_type: &str) -> Vec<&DrawEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Rejections grouped by reason: (self-matches, prior-round repeats)
    pub fn rejection_counts(&self) -> (usize, usize) {
        self.events.iter().fold((0, 0), |(selfs, repeats), e| match e {
            DrawEvent::CandidateRejected {
                reason: RejectionReason::SelfMatch,
                ..
            } => (selfs + 1, repeats),
            DrawEvent::CandidateRejected {
                reason: RejectionReason::RepeatOfPriorRound,
                ..
            } => (selfs, repeats + 1),
            _ => (selfs, repeats),
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DrawObserver for EventLog {
    fn on_event(&mut self, event: &DrawEvent) {
        self.log(event.clone());
    }
}
