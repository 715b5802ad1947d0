//! Single widget-set dashboard.
//!
//! The original one-page dashboard: one widget list and one layout set,
//! stored under the `items` and `layouts-v2` keys.

use crate::layout::LayoutSet;
use crate::store::{Persistence, Store, ITEMS_KEY, LAYOUTS_KEY};
use crate::widgets::{default_widgets, EditError, IdGenerator, Widget, WidgetSet};

/// State manager for a single widget set.
///
/// Holds compiled-in defaults until [`load`](Dashboard::load) runs; no
/// write reaches the store before that, so a first render cannot clobber
/// saved state with defaults.
#[derive(Debug)]
pub struct Dashboard<S> {
    persistence: Persistence<S>,
    set: WidgetSet,
    ids: IdGenerator,
    loaded: bool,
}

impl<S: Store> Dashboard<S> {
    /// Creates a dashboard showing the default widgets, not yet loaded.
    pub fn new(persistence: Persistence<S>) -> Self {
        Self {
            persistence,
            set: WidgetSet::with_defaults(),
            ids: IdGenerator::new(),
            loaded: false,
        }
    }

    /// Creates and immediately loads a dashboard.
    pub fn open(persistence: Persistence<S>) -> Self {
        let mut dashboard = Self::new(persistence);
        dashboard.load();
        dashboard
    }

    /// Reads saved widgets and layouts, reconciling one against the other.
    ///
    /// Missing or malformed widgets fall back to the defaults; missing or
    /// malformed layouts are regenerated.
    pub fn load(&mut self) {
        let widgets = self
            .persistence
            .load::<Vec<Widget>>(ITEMS_KEY)
            .unwrap_or_else(default_widgets);
        let saved = self.persistence.load::<LayoutSet>(LAYOUTS_KEY);
        if saved.is_none() {
            tracing::debug!("no saved layouts, generating defaults");
        }
        self.set = WidgetSet::restore(widgets, saved);
        self.loaded = true;
        tracing::debug!("loaded dashboard with {} widgets", self.set.len());
    }

    /// Whether [`load`](Dashboard::load) has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Widgets in display order.
    pub fn widgets(&self) -> &[Widget] {
        self.set.widgets()
    }

    /// Current layout set.
    pub fn layouts(&self) -> &LayoutSet {
        self.set.layouts()
    }

    /// Adds a widget for `symbol` and persists.
    pub fn add_widget(&mut self, symbol: &str) -> Result<String, EditError> {
        let id = self.set.add_widget(symbol, &mut self.ids)?;
        tracing::info!("added widget {} ({})", id, symbol.trim());
        self.persist();
        Ok(id)
    }

    /// Removes widget `id` and persists. No-op when absent.
    pub fn remove_widget(&mut self, id: &str) {
        if self.set.remove_widget(id) {
            tracing::info!("removed widget {}", id);
            self.persist();
        }
    }

    /// Restores the default widgets and layout, then persists.
    pub fn reset_to_defaults(&mut self) {
        self.set.reset_to_defaults();
        tracing::info!("reset dashboard to defaults");
        self.persist();
    }

    /// Replaces the layout set as reported by the grid, then persists.
    pub fn move_or_resize(&mut self, layouts: LayoutSet) {
        self.set.move_or_resize(layouts);
        self.persist();
    }

    /// The persistence wrapper, for inspection.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn persist(&mut self) {
        if !self.loaded {
            tracing::debug!("skipping save before initial load");
            return;
        }
        self.persistence.save(ITEMS_KEY, self.set.widgets());
        self.persistence.save(LAYOUTS_KEY, self.set.layouts());
    }
}
