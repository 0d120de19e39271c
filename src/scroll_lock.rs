use web_sys::{window, HtmlElement};

use crate::modal::ModalState;

/// Something whose scrolling can be switched off and back on.
pub trait OverflowTarget {
    fn suppress(&self);
    fn restore(&self);
}

/// Holds background scrolling off until dropped.
#[must_use]
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn engage(target: T) -> Self {
        target.suppress();
        Self { target }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.restore();
    }
}

/// Lock for the given modal state: held while open, nothing while closed.
/// Callers drop the previous lock before asking for the next one.
pub fn lock_for<T, F>(state: &ModalState, target: F) -> Option<ScrollLock<T>>
where
    T: OverflowTarget,
    F: FnOnce() -> T,
{
    state.is_open().then(|| ScrollLock::engage(target()))
}

/// `overflow: hidden` on the document body and the page scroll container.
pub struct DomOverflow {
    elements: Vec<HtmlElement>,
}

impl DomOverflow {
    pub fn new(container: Option<HtmlElement>) -> Self {
        let body = window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        Self {
            elements: body.into_iter().chain(container).collect(),
        }
    }
}

impl OverflowTarget for DomOverflow {
    fn suppress(&self) {
        for element in &self.elements {
            if let Err(e) = element.style().set_property("overflow", "hidden") {
                log::warn!("Failed to lock scrolling: {:?}", e);
            }
        }
    }

    fn restore(&self) {
        for element in &self.elements {
            if let Err(e) = element.style().remove_property("overflow") {
                log::warn!("Failed to restore scrolling: {:?}", e);
            }
        }
    }
}
