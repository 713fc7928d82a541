use std::time::Duration;

/// How long the "copied" indicator stays on after the last copy.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Identifies one scheduled reset of the copied indicator.
pub type FeedbackToken = u64;

/// Transient "copied" indicator.
///
/// Every trigger hands out a fresh token; only the expiry carrying the latest
/// token may switch the indicator off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardFeedback {
    active: bool,
    latest: FeedbackToken,
}

impl ClipboardFeedback {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turns the indicator on and returns the token for the reset to schedule.
    pub fn trigger(&mut self) -> FeedbackToken {
        self.latest += 1;
        self.active = true;
        self.latest
    }

    /// Applies a timer expiry. Returns true when the indicator was switched off.
    pub fn expire(&mut self, token: FeedbackToken) -> bool {
        if !self.active || token != self.latest {
            return false;
        }
        self.active = false;
        true
    }
}
