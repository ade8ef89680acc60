/// Category panels as seen through the page's presentation state

use crate::config::Conventions;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// One collapsible panel body. Its displayed state is the only state there is:
/// `is_open` reads what the user currently sees.
pub trait PanelView {
    fn element_id(&self) -> String;
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

/// Where panels live: lookup by element id and enumeration of every panel.
pub trait PanelSource {
    type Panel: PanelView;

    fn find(&self, element_id: &str) -> Option<Self::Panel>;
    fn all(&self) -> Vec<Self::Panel>;
}

/// A panel body element whose `style.display` carries the open state.
#[derive(Clone)]
pub struct DomPanel {
    element: HtmlElement,
    open_display: String,
    closed_display: String,
}

impl DomPanel {
    pub fn new(element: HtmlElement, conventions: &Conventions) -> Self {
        DomPanel {
            element,
            open_display: conventions.open_display.clone(),
            closed_display: conventions.closed_display.clone(),
        }
    }
}

impl PanelView for DomPanel {
    fn element_id(&self) -> String {
        self.element.id()
    }

    fn is_open(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|display| display == self.open_display)
            .unwrap_or(false)
    }

    fn set_open(&self, open: bool) {
        let display = if open {
            &self.open_display
        } else {
            &self.closed_display
        };

        if let Err(e) = self.element.style().set_property("display", display) {
            log::warn!("Failed to set display on #{}: {:?}", self.element.id(), e);
        }
    }
}

/// Panels found in a document by selector and element id.
pub struct DomPanels {
    document: Document,
    conventions: Conventions,
}

impl DomPanels {
    pub fn new(document: Document, conventions: Conventions) -> Self {
        DomPanels {
            document,
            conventions,
        }
    }

    /// Panels of the current page, if there is one.
    pub fn current(conventions: Conventions) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, conventions))
    }
}

impl PanelSource for DomPanels {
    type Panel = DomPanel;

    fn find(&self, element_id: &str) -> Option<DomPanel> {
        self.document
            .get_element_by_id(element_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| DomPanel::new(element, &self.conventions))
    }

    fn all(&self) -> Vec<DomPanel> {
        let nodes = match self.document.query_selector_all(&self.conventions.panel_selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                log::warn!(
                    "Bad panel selector {:?}: {:?}",
                    self.conventions.panel_selector,
                    e
                );
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| DomPanel::new(element, &self.conventions))
            .collect()
    }
}
