use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::scroll_spy::{offset_within, IndicatorBox, LayoutQuery, SectionId};

/// Live DOM measurements for the scroll container. Elements are looked up by
/// id on every query since sections can attach after the listener does.
pub struct DomLayout {
    document: Document,
    container: Element,
}

impl DomLayout {
    pub fn new(container: Element) -> Option<Self> {
        let document = window()?.document()?;
        Some(Self { document, container })
    }

    fn element_top(&self, element_id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(element_id)?;
        let container_top = self.container.get_bounding_client_rect().top();
        Some(offset_within(
            self.container.scroll_top() as f64,
            container_top,
            element.get_bounding_client_rect().top(),
        ))
    }

    /// Smooth-scrolls the container so the element's top meets the
    /// container's top edge. Returns false when no such element exists.
    pub fn scroll_to(&self, element_id: &str) -> bool {
        match self.element_top(element_id) {
            Some(top) => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.container.scroll_to_with_scroll_to_options(&options);
                true
            }
            None => false,
        }
    }
}

impl LayoutQuery for DomLayout {
    fn scroll_top(&self) -> f64 {
        self.container.scroll_top() as f64
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.element_top(id.as_str())
    }

    fn nav_link_box(&self, id: SectionId) -> Option<IndicatorBox> {
        let link = self
            .document
            .get_element_by_id(&id.nav_link_id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(IndicatorBox {
            left: link.offset_left() as f64,
            width: link.offset_width() as f64,
        })
    }
}

/// Scrolls `container` to the element with `element_id`, logging when the
/// target does not exist.
pub fn scroll_container_to(container: Element, element_id: &str) {
    match DomLayout::new(container) {
        Some(layout) => {
            if !layout.scroll_to(element_id) {
                log::debug!("No element with id '{}', ignoring anchor", element_id);
            }
        }
        None => log::warn!("Document unavailable, cannot scroll to '{}'", element_id),
    }
}
