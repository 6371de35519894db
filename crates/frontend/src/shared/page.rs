use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, ScrollBehavior, ScrollToOptions};

/// Capability surface over the page the form lives in.
///
/// The production implementation talks to the real DOM; tests substitute an
/// in-memory page so the form logic runs off-browser.
pub trait PageDom {
    /// Current value of the input with this id, `None` when it is absent.
    fn field_value(&self, id: &str) -> Option<String>;

    /// Write a value into the input with this id. Returns `false` when the
    /// element is missing from the page.
    fn set_field_value(&self, id: &str, value: &str) -> bool;

    /// Show or hide the element with this id via its inline display style.
    fn set_visible(&self, id: &str, visible: bool);

    /// Smooth-scroll the page back to the top.
    fn scroll_to_top(&self);

    /// Blocking browser alert.
    fn alert(&self, message: &str);
}

/// `PageDom` over the real browser document.
#[derive(Clone, Copy)]
pub struct BrowserPage;

impl BrowserPage {
    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn element(&self, id: &str) -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl PageDom for BrowserPage {
    fn field_value(&self, id: &str) -> Option<String> {
        self.input(id).map(|input| input.value())
    }

    fn set_field_value(&self, id: &str, value: &str) -> bool {
        match self.input(id) {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(element) = self.element(id) {
            let display = if visible { "block" } else { "none" };
            let _ = element.style().set_property("display", display);
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
