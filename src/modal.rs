use std::rc::Rc;

use yew::Reducible;

use crate::content::{ServiceCatalog, ServiceDetail};
use crate::scroll_spy::SectionId;

/// Which service detail overlay is showing, if any.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn service_id(&self) -> Option<&str> {
        match self {
            ModalState::Open(id) => Some(id),
            ModalState::Closed => None,
        }
    }

    /// Record to render. `None` when closed or when the id is not in the
    /// catalog, in which case no overlay is drawn.
    pub fn resolve<'a>(&self, catalog: &'a ServiceCatalog) -> Option<&'a ServiceDetail> {
        self.service_id().and_then(|id| catalog.find(id))
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open(id) => {
                log::debug!("Opening service modal '{}'", id);
                Rc::new(ModalState::Open(id))
            }
            ModalAction::Close => {
                if self.is_open() {
                    log::debug!("Closing service modal");
                }
                Rc::new(ModalState::Closed)
            }
        }
    }
}

/// Things a visitor can do to an open overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalControl {
    Backdrop,
    Panel,
    Close,
    BackToServices,
    StartProject,
    Escape,
}

impl ModalControl {
    /// State change and follow-up scroll target for a control. Clicks on the
    /// content panel never reach the backdrop and change nothing.
    pub fn effects(self) -> (Option<ModalAction>, Option<SectionId>) {
        match self {
            ModalControl::Panel => (None, None),
            ModalControl::Backdrop
            | ModalControl::Close
            | ModalControl::BackToServices
            | ModalControl::Escape => (Some(ModalAction::Close), None),
            ModalControl::StartProject => (Some(ModalAction::Close), Some(SectionId::Contact)),
        }
    }

    pub fn from_key(key: &str) -> Option<ModalControl> {
        matches!(key, "Escape" | "Esc").then_some(ModalControl::Escape)
    }
}

/// Section to scroll to once the overlay is gone. Held back while a modal is
/// still open so the scroll never starts on a locked container.
pub fn scroll_after_close(state: &ModalState, pending: Option<SectionId>) -> Option<SectionId> {
    if state.is_open() {
        None
    } else {
        pending
    }
}
