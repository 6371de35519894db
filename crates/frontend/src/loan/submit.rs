use contracts::loan::LoanSubmitReply;

use crate::shared::page::PageDom;

/// Element ids the submit flow toggles.
pub const FORM_ID: &str = "loanForm";
pub const SUCCESS_MESSAGE_ID: &str = "success-message";

const GENERIC_REJECTION: &str = "Failed to submit application";

/// What one submission attempt produced.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// 2xx reply: the application was taken.
    Accepted(LoanSubmitReply),
    /// Non-2xx reply that still parsed as JSON.
    Rejected(LoanSubmitReply),
    /// The request never completed, or the body was not JSON.
    Failed(String),
}

/// Apply one submission outcome to the page.
///
/// Acceptance swaps the form for the confirmation block and scrolls up; both
/// error arms alert and leave the form visible for another attempt.
pub fn apply_outcome(page: &impl PageDom, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted(reply) => {
            if let Some(id) = reply.application_id.as_deref() {
                log::info!("application accepted: {}", id);
            }
            page.set_visible(FORM_ID, false);
            page.set_visible(SUCCESS_MESSAGE_ID, true);
            page.scroll_to_top();
        }
        SubmitOutcome::Rejected(reply) => {
            let detail = reply.detail.as_deref().unwrap_or(GENERIC_REJECTION);
            page.alert(&format!("Error: {}", detail));
        }
        SubmitOutcome::Failed(message) => {
            page.alert(&format!("Error submitting form: {}", message));
        }
    }
}
