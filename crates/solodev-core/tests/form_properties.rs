//! Property-based tests for the subscription form
//!
//! Uses proptest to check the submit/edit invariants over arbitrary input.

use proptest::prelude::*;
use solodev_core::{FormState, SubmitOutcome, SubscribePage, SubscriptionForm};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any non-empty string, including whitespace and non-ASCII
fn non_empty_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{1,200}")
        .expect("valid regex")
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// User actions on the page
#[derive(Debug, Clone)]
enum PageOp {
    Edit(String),
    Submit,
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::string::string_regex("[a-z@. ]{0,20}")
                .expect("valid regex")
                .prop_map(PageOp::Edit),
            1 => Just(PageOp::Submit),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Submitting any non-empty text shows the notification and clears the field
    #[test]
    fn non_empty_submit_is_accepted(email in non_empty_strategy()) {
        let mut page = SubscribePage::new();
        page.edit(email.clone());

        let ticket = page.submit();

        prop_assert!(ticket.is_some());
        prop_assert!(page.notification().is_visible());
        prop_assert_eq!(page.form().email(), "");
        prop_assert!(!page.form().is_invalid());
    }

    /// The accepted outcome carries exactly what was typed
    #[test]
    fn accepted_email_is_verbatim(email in non_empty_strategy()) {
        let mut form = SubscriptionForm::new();
        form.edit(email.clone());
        prop_assert_eq!(form.submit(), SubmitOutcome::Accepted { email });
    }

    /// Editing stores exactly the typed value, whatever came before
    #[test]
    fn edit_is_identity(before in ".{0,50}", after in ".{0,50}") {
        let mut form = SubscriptionForm::new();
        form.edit(before);
        form.edit(after.clone());
        prop_assert_eq!(form.email(), after.as_str());
    }

    /// The invalid indicator always equals attempted && empty
    #[test]
    fn invalid_is_derived(ops in page_ops_strategy(40)) {
        let mut page = SubscribePage::new();
        let mut ever_accepted = false;

        for op in ops {
            match op {
                PageOp::Edit(s) => page.edit(s),
                PageOp::Submit => ever_accepted |= page.submit().is_some(),
            }

            let form = page.form();
            prop_assert_eq!(
                form.is_invalid(),
                form.submit_attempted() && form.email().is_empty()
            );
            prop_assert_eq!(
                form.state() == FormState::Invalid,
                form.is_invalid()
            );
            prop_assert_eq!(form.helper_text().is_some(), form.is_invalid());
            // Visible only after some accepted submit
            if page.notification().is_visible() {
                prop_assert!(ever_accepted);
            }
        }
    }
}
