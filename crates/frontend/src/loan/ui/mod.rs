use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::loan::{api, prefill, submit};
use crate::shared::page::BrowserPage;

/// Страница заявки на кредит: форма и скрытый блок подтверждения.
///
/// The submit handler is attached once, here; there is no second
/// registration path.
#[component]
pub fn LoanApplicationPage() -> impl IntoView {
    // Pre-fill runs once the inputs are in the DOM.
    Effect::new(move |_| {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        prefill::prefill_form(&BrowserPage, &search);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            log::error!("submit event without a form target");
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("failed to serialize form: {:?}", e);
                return;
            }
        };

        spawn_local(async move {
            let outcome = api::submit_application(form_data).await;
            submit::apply_outcome(&BrowserPage, &outcome);
        });
    };

    view! {
        <div class="loan-container">
            <h1>"Loan Application"</h1>

            <form id=submit::FORM_ID on:submit=on_submit>
                <div class="form-group">
                    <label for="legal_name">"Full legal name"</label>
                    <input type="text" id="legal_name" name="legal_name" required />
                </div>

                <div class="form-group">
                    <label for="dob">"Date of birth"</label>
                    <input type="date" id="dob" name="dob" required />
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input type="email" id="email" name="email" required />
                </div>

                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input type="tel" id="phone" name="phone" required />
                </div>

                <div class="form-group">
                    <label for="zip_code">"ZIP code"</label>
                    <input type="text" id="zip_code" name="zip_code" />
                </div>

                <div class="form-group">
                    <label for="ssn_last4">"Last 4 digits of SSN"</label>
                    <input
                        type="text"
                        id="ssn_last4"
                        name="ssn_last4"
                        inputmode="numeric"
                        maxlength="4"
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="monthly_income">"Monthly income"</label>
                    <input
                        type="number"
                        id="monthly_income"
                        name="monthly_income"
                        min="0"
                        step="0.01"
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="requested_amount">"Requested amount"</label>
                    <input
                        type="number"
                        id="requested_amount"
                        name="requested_amount"
                        min="0"
                        step="0.01"
                        required
                    />
                </div>

                <div class="form-group">
                    <label for="purpose_of_loan">"Purpose of loan"</label>
                    <input type="text" id="purpose_of_loan" name="purpose_of_loan" required />
                </div>

                <div class="form-group form-group--checkbox">
                    <input type="checkbox" id="terms_consent" name="terms_consent" value="yes" />
                    <label for="terms_consent">"I agree to the terms and conditions"</label>
                </div>

                <button type="submit" class="btn-primary">"Submit application"</button>
            </form>

            <div id=submit::SUCCESS_MESSAGE_ID class="success-message" style="display: none">
                <h2>"Application received"</h2>
                <p>"Thank you! We will review your application and get back to you shortly."</p>
            </div>
        </div>
    }
}
