//! Multi-tab dashboard state.
//!
//! Each tab owns an independent widget set and layout. The whole tab list
//! is written under the `tabs` key after every change, and the active tab
//! id under `active-tab`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutSet;
use crate::store::{Persistence, Store, ACTIVE_TAB_KEY, TABS_KEY};
use crate::widgets::{EditError, IdGenerator, Widget, WidgetSet};

/// Prefix of generated tab ids.
const TAB_ID_PREFIX: &str = "tab-";

/// Id of the tab created on first start.
///
/// Fixed so that the id stays the same across runs that never save.
pub const DEFAULT_TAB_ID: &str = "tab-1";

/// Stem of generated tab names (`Dashboard 1`, `Dashboard 2`, ...).
const TAB_NAME_STEM: &str = "Dashboard";

/// Errors produced by tab-scoped widget edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// No tab has the given id.
    #[error("no tab with id '{0}'")]
    UnknownTab(String),

    /// The widget edit itself was rejected.
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// A named, independently laid out widget collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Stable tab id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Widgets and their placements.
    pub set: WidgetSet,
}

impl Tab {
    /// Widgets in display order.
    pub fn widgets(&self) -> &[Widget] {
        self.set.widgets()
    }

    /// Current layout set.
    pub fn layouts(&self) -> &LayoutSet {
        self.set.layouts()
    }
}

/// Persisted shape of a tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedTab {
    id: String,
    name: String,
    #[serde(default)]
    widgets: Vec<Widget>,
    #[serde(default)]
    layouts: Option<LayoutSet>,
}

impl From<&Tab> for SavedTab {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            name: tab.name.clone(),
            widgets: tab.widgets().to_vec(),
            layouts: Some(tab.layouts().clone()),
        }
    }
}

impl From<SavedTab> for Tab {
    fn from(saved: SavedTab) -> Self {
        Self {
            id: saved.id,
            name: saved.name,
            set: WidgetSet::restore(saved.widgets, saved.layouts),
        }
    }
}

/// State manager for the tab list and the active tab.
///
/// Like [`Dashboard`](crate::Dashboard), writes are suppressed until
/// [`load`](TabManager::load) has run.
#[derive(Debug)]
pub struct TabManager<S> {
    persistence: Persistence<S>,
    tabs: Vec<Tab>,
    active: Option<String>,
    ids: IdGenerator,
    loaded: bool,
}

impl<S: Store> TabManager<S> {
    /// Creates a manager with no tabs, not yet loaded.
    pub fn new(persistence: Persistence<S>) -> Self {
        Self {
            persistence,
            tabs: Vec::new(),
            active: None,
            ids: IdGenerator::new(),
            loaded: false,
        }
    }

    /// Creates and immediately loads a manager.
    pub fn open(persistence: Persistence<S>) -> Self {
        let mut manager = Self::new(persistence);
        manager.load();
        manager
    }

    /// Reads saved tabs and the active tab id.
    ///
    /// With nothing saved (or a malformed save) a single `Dashboard 1` tab
    /// holding the default widgets is created. A saved active id that
    /// names no tab falls back to the first tab.
    pub fn load(&mut self) {
        self.tabs = match self.persistence.load::<Vec<SavedTab>>(TABS_KEY) {
            Some(saved) => dedup_ids(saved.into_iter().map(Tab::from).collect()),
            None => {
                tracing::debug!("no saved tabs, creating default tab");
                vec![Tab {
                    id: DEFAULT_TAB_ID.to_string(),
                    name: format!("{TAB_NAME_STEM} 1"),
                    set: WidgetSet::with_defaults(),
                }]
            }
        };
        let saved_active = self.persistence.load::<Option<String>>(ACTIVE_TAB_KEY).flatten();
        self.active = match saved_active {
            Some(id) if self.tab(&id).is_some() => Some(id),
            _ => self.tabs.first().map(|t| t.id.clone()),
        };
        self.loaded = true;
        tracing::debug!(
            "loaded {} tabs, active {:?}",
            self.tabs.len(),
            self.active
        );
    }

    /// Whether [`load`](TabManager::load) has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Looks up a tab by id.
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Id of the active tab, `None` when there are no tabs.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.as_deref().and_then(|id| self.tab(id))
    }

    /// Index of the active tab in [`tabs`](TabManager::tabs).
    pub fn active_index(&self) -> Option<usize> {
        let id = self.active.as_deref()?;
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Creates an empty tab, makes it active and returns its id.
    pub fn add_tab(&mut self) -> String {
        let tabs = &self.tabs;
        let id = self
            .ids
            .next_id(TAB_ID_PREFIX, |candidate| tabs.iter().any(|t| t.id == candidate));
        let name = self.next_tab_name();
        tracing::info!("added tab {} ({})", id, name);
        self.tabs.push(Tab {
            id: id.clone(),
            name,
            set: WidgetSet::empty(),
        });
        self.active = Some(id.clone());
        self.persist();
        id
    }

    /// Deletes tab `id`. Returns `false` if no such tab exists.
    ///
    /// Removing the active tab activates the first remaining tab, or
    /// clears the active tab when none remain.
    pub fn remove_tab(&mut self, id: &str) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        if self.tabs.len() == before {
            return false;
        }
        if self.active.as_deref() == Some(id) {
            self.active = self.tabs.first().map(|t| t.id.clone());
        }
        tracing::info!("removed tab {}", id);
        self.persist();
        true
    }

    /// Renames tab `id`. Blank names and unknown ids are ignored.
    pub fn rename_tab(&mut self, id: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        tab.name = name.to_string();
        self.persist();
        true
    }

    /// Makes tab `id` active. Unknown ids are ignored.
    pub fn select_tab(&mut self, id: &str) -> bool {
        if self.tab(id).is_none() {
            return false;
        }
        if self.active.as_deref() != Some(id) {
            self.active = Some(id.to_string());
            self.persist();
        }
        true
    }

    /// Adds a widget for `symbol` to tab `tab_id` and returns its id.
    pub fn add_widget(&mut self, tab_id: &str, symbol: &str) -> Result<String, TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::UnknownTab(tab_id.to_string()))?;
        let id = tab.set.add_widget(symbol, &mut self.ids)?;
        tracing::info!("added widget {} ({}) to tab {}", id, symbol.trim(), tab_id);
        self.persist();
        Ok(id)
    }

    /// Removes widget `id` from tab `tab_id`. No-op when either is absent.
    pub fn remove_widget(&mut self, tab_id: &str, id: &str) -> bool {
        let removed = self
            .tab_set_mut(tab_id)
            .is_some_and(|set| set.remove_widget(id));
        if removed {
            tracing::info!("removed widget {} from tab {}", id, tab_id);
            self.persist();
        }
        removed
    }

    /// Resets tab `tab_id` to the default widgets and layout.
    pub fn reset_tab(&mut self, tab_id: &str) -> bool {
        let Some(set) = self.tab_set_mut(tab_id) else {
            return false;
        };
        set.reset_to_defaults();
        tracing::info!("reset tab {} to defaults", tab_id);
        self.persist();
        true
    }

    /// Replaces the layout set of tab `tab_id` as reported by the grid.
    pub fn move_or_resize(&mut self, tab_id: &str, layouts: LayoutSet) -> bool {
        let Some(set) = self.tab_set_mut(tab_id) else {
            return false;
        };
        set.move_or_resize(layouts);
        self.persist();
        true
    }

    /// The persistence wrapper, for inspection.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn tab_set_mut(&mut self, tab_id: &str) -> Option<&mut WidgetSet> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .map(|t| &mut t.set)
    }

    /// Smallest `Dashboard N` not already taken.
    fn next_tab_name(&self) -> String {
        let mut n = 1;
        loop {
            let name = format!("{TAB_NAME_STEM} {n}");
            if !self.tabs.iter().any(|t| t.name == name) {
                return name;
            }
            n += 1;
        }
    }

    fn persist(&mut self) {
        if !self.loaded {
            tracing::debug!("skipping save before initial load");
            return;
        }
        let saved: Vec<SavedTab> = self.tabs.iter().map(SavedTab::from).collect();
        self.persistence.save(TABS_KEY, &saved);
        self.persistence.save(ACTIVE_TAB_KEY, &self.active);
    }
}

/// Drops tabs whose id repeats an earlier one.
fn dedup_ids(tabs: Vec<Tab>) -> Vec<Tab> {
    let mut seen = std::collections::HashSet::new();
    tabs.into_iter()
        .filter(|t| {
            let fresh = seen.insert(t.id.clone());
            if !fresh {
                tracing::warn!("dropping tab with duplicate id {}", t.id);
            }
            fresh
        })
        .collect()
}
