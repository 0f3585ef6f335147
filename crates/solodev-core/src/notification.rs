//! Success notification (snackbar) model.
//!
//! The notification auto-hides after [`AUTO_HIDE_DURATION`]. Scheduling is
//! left to the caller: [`Notification::show`] hands out a [`DismissTicket`]
//! and the caller later passes it back to [`Notification::expire`]. Every
//! show, pause and dismissal bumps an internal generation counter, so a
//! ticket from an earlier arming is ignored even if its timer still fires.

use std::time::Duration;

use tracing::debug;

/// How long the notification stays up without interaction
pub const AUTO_HIDE_DURATION: Duration = Duration::from_millis(6000);

/// Delay used when re-arming after the pointer leaves the notification
pub const RESUME_HIDE_DURATION: Duration = Duration::from_millis(3000);

/// Message shown after a successful subscribe
pub const SUBSCRIBED_MESSAGE: &str = "Thanks for subscribing!";

/// Why the notification was hidden
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// Close button on the alert
    CloseButton,
    /// Auto-hide timer elapsed
    Timeout,
    /// Click somewhere on the page outside the notification
    ClickAway,
    /// Escape key pressed
    EscapeKey,
}

/// Handle for one scheduled auto-hide
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
    delay: Duration,
}

impl DismissTicket {
    /// How long to wait before calling [`Notification::expire`]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Wait out a ticket's delay.
///
/// Cancellation is done by dropping the future (or aborting the task that
/// runs it); expiring a stale ticket afterwards is harmless anyway.
pub async fn wait(ticket: DismissTicket) -> DismissTicket {
    tokio::time::sleep(ticket.delay).await;
    ticket
}

/// A single, non-stacking notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    message: String,
    visible: bool,
    paused: bool,
    generation: u64,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(SUBSCRIBED_MESSAGE)
    }
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: false,
            paused: false,
            generation: 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Show the notification and arm a fresh auto-hide.
    ///
    /// Showing while already visible keeps a single notification and
    /// restarts the full duration.
    pub fn show(&mut self) -> DismissTicket {
        self.visible = true;
        self.paused = false;
        self.arm(AUTO_HIDE_DURATION)
    }

    /// Hide the notification. Returns false if it was already hidden.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.paused = false;
        self.generation += 1;
        debug!(?reason, "notification dismissed");
        true
    }

    /// Hide the notification if `ticket` is still the live arming.
    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        if ticket.generation != self.generation || self.paused {
            return false;
        }
        self.dismiss(DismissReason::Timeout)
    }

    /// Suspend auto-hide (pointer entered the notification).
    pub fn pause(&mut self) {
        if self.visible && !self.paused {
            self.paused = true;
            self.generation += 1;
        }
    }

    /// Resume auto-hide with [`RESUME_HIDE_DURATION`].
    ///
    /// Returns `None` when hidden or not paused.
    pub fn resume(&mut self) -> Option<DismissTicket> {
        if !self.visible || !self.paused {
            return None;
        }
        self.paused = false;
        Some(self.arm(RESUME_HIDE_DURATION))
    }

    fn arm(&mut self, delay: Duration) -> DismissTicket {
        self.generation += 1;
        DismissTicket {
            generation: self.generation,
            delay,
        }
    }
}
