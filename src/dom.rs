// Browser glue. Everything that touches `web_sys` directly lives here.

use gloo::console;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll_spy::{Span, Viewport};

/// Live page geometry.
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn section_bounds(&self, anchor: &str) -> Option<Span> {
        let doc = window()?.document()?;
        let rect = doc.get_element_by_id(anchor)?.get_bounding_client_rect();
        Some(Span::new(rect.top(), rect.bottom()))
    }
}

/// Smooth-scrolls to `#anchor`. Unknown anchors are logged and ignored.
pub fn scroll_to_anchor(anchor: &str) {
    let anchor = anchor.trim_start_matches('#');
    let Some(doc) = window().and_then(|w| w.document()) else { return; };
    let Some(el) = doc.get_element_by_id(anchor) else {
        console::warn!(format!("no section with id '{anchor}'"));
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn random() -> f64 {
    js_sys::Math::random()
}
