use crate::loan::ui::LoanApplicationPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <LoanApplicationPage />
    }
}
