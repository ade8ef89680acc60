/// Category open/close state: restoring it on load and flipping it on click
///
/// Invariant kept by every function here: a flag is stored under
/// `storage_key(c)` exactly when panel `c` is displayed open.

use crate::config::Conventions;
use crate::panel::{PanelSource, PanelView};
use crate::storage::FlagStore;

/// Open every panel whose flag is stored. Never closes a panel and never
/// writes to the store, so running it again changes nothing.
///
/// Returns the number of panels opened.
pub fn restore_panels<S, P>(conventions: &Conventions, store: &S, panels: &P) -> usize
where
    S: FlagStore + ?Sized,
    P: PanelSource,
{
    let opened = panels
        .all()
        .iter()
        .filter(|panel| restore_panel(conventions, store, *panel))
        .count();

    log::debug!("Restored {} open categories", opened);
    opened
}

/// Open one panel if its flag is stored. Returns whether it was opened.
pub fn restore_panel<S, V>(conventions: &Conventions, store: &S, panel: &V) -> bool
where
    S: FlagStore + ?Sized,
    V: PanelView,
{
    let element_id = panel.element_id();
    let category = conventions.category_from_element_id(&element_id);

    if store.is_flagged(&conventions.storage_key(&category)) {
        panel.set_open(true);
        true
    } else {
        false
    }
}

/// Flip the panel of `category` and bring its flag in line.
///
/// Returns the new open state, or `None` when the page has no such panel.
pub fn toggle_category<S, P>(
    conventions: &Conventions,
    store: &S,
    panels: &P,
    category: &str,
) -> Option<bool>
where
    S: FlagStore + ?Sized,
    P: PanelSource,
{
    let Some(panel) = panels.find(&conventions.panel_element_id(category)) else {
        log::debug!("No panel for category {:?}", category);
        return None;
    };

    Some(toggle_panel(conventions, store, &panel, category))
}

/// Flip an already located panel. Returns the new open state.
pub fn toggle_panel<S, V>(conventions: &Conventions, store: &S, panel: &V, category: &str) -> bool
where
    S: FlagStore + ?Sized,
    V: PanelView,
{
    let open = !panel.is_open();
    panel.set_open(open);

    let key = conventions.storage_key(category);
    let written = if open {
        store.set(&key, &conventions.open_flag)
    } else {
        store.remove(&key)
    };

    // Best effort: the panel still toggles, it just won't be remembered
    if let Err(e) = written {
        log::warn!("Could not persist category {:?}: {}", category, e);
    }

    log::debug!("Category {:?} is now {}", category, if open { "open" } else { "closed" });
    open
}
