//! Subscribe page model: the form plus its success notification.

use tracing::{debug, info};

use crate::form::{SubmitOutcome, SubscriptionForm};
use crate::notification::{DismissReason, DismissTicket, Notification};

/// All local state owned by the subscribe page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscribePage {
    form: SubscriptionForm,
    notification: Notification,
}

impl SubscribePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SubscriptionForm {
        &self.form
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn edit(&mut self, value: impl Into<String>) {
        self.form.edit(value);
    }

    /// Submit the form.
    ///
    /// On accept the notification is shown and the ticket for its auto-hide
    /// is returned. On reject the notification is left as it was.
    pub fn submit(&mut self) -> Option<DismissTicket> {
        match self.form.submit() {
            SubmitOutcome::Accepted { email } => {
                info!(len = email.len(), "subscription accepted");
                Some(self.notification.show())
            }
            SubmitOutcome::Rejected(reason) => {
                debug!(%reason, "subscription rejected");
                None
            }
        }
    }

    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        self.notification.dismiss(reason)
    }

    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        self.notification.expire(ticket)
    }

    pub fn pause(&mut self) {
        self.notification.pause();
    }

    pub fn resume(&mut self) -> Option<DismissTicket> {
        self.notification.resume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_submit_leaves_notification_alone() {
        let mut page = SubscribePage::new();
        assert!(page.submit().is_none());
        assert!(!page.notification().is_visible());

        page.edit("a@b.com");
        page.submit();
        assert!(page.notification().is_visible());

        // A failed submit while visible keeps it visible
        assert!(page.submit().is_none());
        assert!(page.notification().is_visible());
        assert!(page.form().is_invalid());
    }

    #[test]
    fn accepted_submit_shows_notification() {
        let mut page = SubscribePage::new();
        page.edit("a@b.com");
        let ticket = page.submit();

        assert!(ticket.is_some());
        assert!(page.notification().is_visible());
        assert_eq!(page.form().email(), "");
        assert!(!page.form().is_invalid());
    }

    #[test]
    fn click_away_dismisses() {
        let mut page = SubscribePage::new();
        page.edit("a@b.com");
        page.submit();

        assert!(page.dismiss(DismissReason::ClickAway));
        assert!(!page.notification().is_visible());
    }
}
