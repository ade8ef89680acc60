/// Naming conventions shared by the page markup, the store and the stepper

use serde::Deserialize;
use std::cell::RefCell;

/// Everything the page and the script must agree on.
///
/// Defaults follow the canonical `.cat-body` markup:
/// - panel bodies: `<div class="cat-body" id="cat-body-<id>" style="display: none">`
/// - store keys: `cat_open_<id>` holding `"1"` while the panel is open
/// - stepper: an empty or non-numeric input counts as `0`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conventions {
    pub panel_selector: String,
    pub panel_id_prefix: String,
    pub storage_prefix: String,
    pub open_display: String,
    pub closed_display: String,
    pub open_flag: String,
    pub stepper_baseline: i64,
}

impl Conventions {
    pub fn new() -> Self {
        Conventions {
            panel_selector: ".cat-body".to_string(),
            panel_id_prefix: "cat-body-".to_string(),
            storage_prefix: "cat_open_".to_string(),
            open_display: "block".to_string(),
            closed_display: "none".to_string(),
            open_flag: "1".to_string(),
            stepper_baseline: 0,
        }
    }

    /// Parse conventions from JSON; omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid conventions: {}", e))
    }

    /// Element id of the panel body for `category`.
    pub fn panel_element_id(&self, category: &str) -> String {
        format!("{}{}", self.panel_id_prefix, category)
    }

    /// Category id of a panel element: the first occurrence of the prefix is
    /// removed. Ids without the prefix are used as-is.
    pub fn category_from_element_id(&self, element_id: &str) -> String {
        element_id.replacen(self.panel_id_prefix.as_str(), "", 1)
    }

    /// Class name for panel bodies when the selector is a plain `.class`.
    pub fn panel_class(&self) -> Option<&str> {
        self.panel_selector
            .strip_prefix('.')
            .filter(|class| {
                !class.is_empty()
                    && class
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
            })
    }

    /// Store key holding the open flag for `category`.
    pub fn storage_key(&self, category: &str) -> String {
        format!("{}{}", self.storage_prefix, category)
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static ACTIVE: RefCell<Conventions> = RefCell::new(Conventions::new());
}

/// Snapshot of the conventions currently installed for this page.
pub fn active() -> Conventions {
    ACTIVE.with(|c| c.borrow().clone())
}

pub fn install(conventions: Conventions) {
    log::debug!("Installing conventions: {:?}", conventions);
    ACTIVE.with(|c| *c.borrow_mut() = conventions);
}
