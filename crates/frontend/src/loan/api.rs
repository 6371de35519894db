use contracts::loan::LoanSubmitReply;
use gloo_net::http::Request;
use web_sys::FormData;

use crate::loan::submit::SubmitOutcome;

/// Relative endpoint the form posts to, same origin as the page.
pub const SUBMIT_PATH: &str = "/loan-application";

/// POST the serialized form and classify the reply.
///
/// The body goes out as multipart/form-data; the browser supplies the
/// boundary header itself. The reply body is parsed as JSON whatever the
/// status code says.
pub async fn submit_application(form_data: FormData) -> SubmitOutcome {
    match post_form(form_data).await {
        Ok(outcome) => outcome,
        Err(message) => SubmitOutcome::Failed(message),
    }
}

async fn post_form(form_data: FormData) -> Result<SubmitOutcome, String> {
    let response = Request::post(SUBMIT_PATH)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let accepted = response.ok();
    let reply = response
        .json::<LoanSubmitReply>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(if accepted {
        SubmitOutcome::Accepted(reply)
    } else {
        SubmitOutcome::Rejected(reply)
    })
}
