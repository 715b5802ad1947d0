//! In-memory widget set editor.
//!
//! [`WidgetSet`] keeps widgets and their layout set consistent with each
//! other. It does no persistence of its own; owners save after each
//! successful edit.

use std::collections::HashSet;

use thiserror::Error;

use crate::layout::{
    append_widget, default_layouts, fill_missing, place_unplaced, reconcile, LayoutSet,
};
use crate::widgets::{default_widgets, IdGenerator, Widget};

/// Prefix of generated widget ids.
const WIDGET_ID_PREFIX: &str = "widget-";

/// Errors produced by widget edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The symbol was empty after trimming whitespace.
    #[error("symbol must not be empty")]
    EmptySymbol,
}

/// Widgets plus their per-breakpoint placements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetSet {
    widgets: Vec<Widget>,
    layouts: LayoutSet,
}

impl WidgetSet {
    /// An empty widget set with an empty sequence per breakpoint.
    pub fn empty() -> Self {
        Self::generated(Vec::new())
    }

    /// The compiled-in default widgets with generated placements.
    pub fn with_defaults() -> Self {
        Self::generated(default_widgets())
    }

    /// `widgets` with freshly generated placements.
    pub fn generated(widgets: Vec<Widget>) -> Self {
        let layouts = default_layouts(&widgets);
        Self { widgets, layouts }
    }

    /// Rebuilds a set from saved state.
    ///
    /// Widgets repeating an earlier id are dropped.
    /// Saved placements are reconciled against `widgets`; breakpoints the
    /// save lacks are generated, and widgets the save never placed are
    /// appended at the bottom. Without saved placements everything is
    /// generated.
    pub fn restore(widgets: Vec<Widget>, saved: Option<LayoutSet>) -> Self {
        let widgets = dedup_ids(widgets);
        let Some(saved) = saved else {
            return Self::generated(widgets);
        };
        let mut layouts = reconcile(saved, &widgets);
        let filled = fill_missing(&mut layouts, &widgets);
        if !filled.is_empty() {
            tracing::debug!("generated missing breakpoints: {:?}", filled);
        }
        let appended = place_unplaced(&mut layouts, &widgets);
        if appended > 0 {
            tracing::debug!("appended {} unplaced widget placements", appended);
        }
        Self { widgets, layouts }
    }

    /// Widgets in display order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Current layout set.
    pub fn layouts(&self) -> &LayoutSet {
        &self.layouts
    }

    /// Looks up a widget by id.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Returns `true` if a widget with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.widget(id).is_some()
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns `true` if the set holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Appends a widget showing `symbol` and returns its id.
    ///
    /// Existing placements are left alone; the new widget is placed at the
    /// bottom of every breakpoint.
    pub fn add_widget(&mut self, symbol: &str, ids: &mut IdGenerator) -> Result<String, EditError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(EditError::EmptySymbol);
        }
        let id = ids.next_id(WIDGET_ID_PREFIX, |candidate| self.contains(candidate));
        let index = self.widgets.len();
        append_widget(&mut self.layouts, index, &id);
        self.widgets.push(Widget::new(id.clone(), symbol));
        Ok(id)
    }

    /// Removes the widget `id` and all of its placements.
    ///
    /// Returns `false` if no such widget exists.
    pub fn remove_widget(&mut self, id: &str) -> bool {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id != id);
        if self.widgets.len() == before {
            return false;
        }
        self.layouts.remove_id(id);
        true
    }

    /// Replaces widgets with the compiled-in defaults and regenerates every
    /// placement.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_defaults();
    }

    /// Replaces the layout set wholesale, as reported by the grid.
    pub fn move_or_resize(&mut self, layouts: LayoutSet) {
        self.layouts = layouts;
    }
}

/// Drops widgets whose id repeats an earlier one.
fn dedup_ids(widgets: Vec<Widget>) -> Vec<Widget> {
    let mut seen = HashSet::new();
    widgets
        .into_iter()
        .filter(|w| {
            let fresh = seen.insert(w.id.clone());
            if !fresh {
                tracing::warn!("dropping widget with duplicate id {} ({})", w.id, w.symbol);
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Breakpoint, Placement, BOTTOM};

    fn frozen() -> i64 {
        42
    }

    #[test]
    fn test_with_defaults_places_all_defaults() {
        let set = WidgetSet::with_defaults();
        assert_eq!(set.len(), 3);
        assert_eq!(
            set.layouts().placement(Breakpoint::Lg, "skew"),
            Some(&Placement::new("skew", 0, 20, 30, 20))
        );
    }

    #[test]
    fn test_add_widget_appends_at_bottom() {
        let mut set = WidgetSet::with_defaults();
        let mut ids = IdGenerator::with_clock(frozen);
        let id = set
            .add_widget("  BINANCE:BTCUSDT ", &mut ids)
            .expect("valid symbol");

        assert_eq!(id, "widget-42");
        let widget = set.widget(&id).expect("widget added");
        assert_eq!(widget.symbol, "BINANCE:BTCUSDT");
        // Fourth widget sits in the right-hand column on wide breakpoints.
        assert_eq!(
            set.layouts().placement(Breakpoint::Lg, &id),
            Some(&Placement::new(id.clone(), 30, BOTTOM, 30, 20))
        );
        assert_eq!(
            set.layouts().placement(Breakpoint::Xxs, &id),
            Some(&Placement::new(id.clone(), 0, BOTTOM, 16, 20))
        );
    }

    #[test]
    fn test_add_widget_leaves_existing_placements() {
        let mut set = WidgetSet::with_defaults();
        let before = set.layouts().clone();
        set.add_widget("X:Y", &mut IdGenerator::new())
            .expect("valid symbol");
        for bp in Breakpoint::ALL {
            let now = set.layouts().get(bp).expect("present");
            let was = before.get(bp).expect("present");
            assert_eq!(&now[..was.len()], was);
        }
    }

    #[test]
    fn test_add_blank_symbol_is_rejected() {
        let mut set = WidgetSet::with_defaults();
        let before = set.clone();
        let err = set
            .add_widget("   ", &mut IdGenerator::new())
            .expect_err("blank symbol");
        assert_eq!(err, EditError::EmptySymbol);
        assert_eq!(set, before);
    }

    #[test]
    fn test_add_then_remove_restores_widgets() {
        let mut set = WidgetSet::with_defaults();
        let widgets = set.widgets().to_vec();
        let id = set
            .add_widget("NASDAQ:AAPL", &mut IdGenerator::new())
            .expect("valid symbol");
        assert!(set.remove_widget(&id));
        assert_eq!(set.widgets(), &widgets[..]);
        for (_, placements) in set.layouts().iter() {
            assert!(placements.iter().all(|p| p.id != id));
        }
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut set = WidgetSet::with_defaults();
        let before = set.clone();
        assert!(!set.remove_widget("nope"));
        assert_eq!(set, before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut set = WidgetSet::empty();
        set.add_widget("A:B", &mut IdGenerator::new())
            .expect("valid symbol");
        set.reset_to_defaults();
        let once = set.clone();
        set.reset_to_defaults();
        assert_eq!(set, once);
        assert_eq!(once, WidgetSet::with_defaults());
    }

    #[test]
    fn test_restore_without_save_generates() {
        let set = WidgetSet::restore(default_widgets(), None);
        assert_eq!(set, WidgetSet::with_defaults());
    }

    #[test]
    fn test_restore_prunes_and_fills() {
        let mut saved = LayoutSet::new();
        saved.push(Breakpoint::Lg, Placement::new("ovx", 5, 5, 10, 10));
        saved.push(Breakpoint::Lg, Placement::new("zzz", 0, 0, 10, 10));
        let set = WidgetSet::restore(default_widgets(), Some(saved));

        let lg = set.layouts().get(Breakpoint::Lg).expect("lg");
        assert_eq!(lg[0], Placement::new("ovx", 5, 5, 10, 10));
        assert!(lg.iter().all(|p| p.id != "zzz"));
        assert_eq!(lg.len(), 3, "gvz and skew appended");
        assert_eq!(
            set.layouts().get(Breakpoint::Md),
            WidgetSet::with_defaults().layouts().get(Breakpoint::Md)
        );
    }

    #[test]
    fn test_restore_keeps_first_of_duplicate_ids() {
        let widgets = vec![Widget::new("a", "X:A"), Widget::new("a", "X:B")];
        let mut set = WidgetSet::restore(widgets, None);

        assert_eq!(set.widgets(), &[Widget::new("a", "X:A")][..]);
        for bp in Breakpoint::ALL {
            let placements = set.layouts().get(bp).expect("generated");
            assert_eq!(placements.iter().filter(|p| p.id == "a").count(), 1);
        }

        assert!(set.remove_widget("a"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_restore_with_saved_layouts_drops_duplicate_widgets() {
        let widgets = vec![
            Widget::new("a", "X:A"),
            Widget::new("b", "X:B"),
            Widget::new("a", "X:C"),
        ];
        let mut saved = LayoutSet::new();
        saved.push(Breakpoint::Lg, Placement::new("a", 0, 0, 30, 20));
        saved.push(Breakpoint::Lg, Placement::new("b", 30, 0, 30, 20));
        let set = WidgetSet::restore(widgets, Some(saved));

        assert_eq!(set.len(), 2);
        assert_eq!(set.widget("a").map(|w| w.symbol.as_str()), Some("X:A"));
        assert_eq!(set.layouts().get(Breakpoint::Lg).map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_move_or_resize_replaces_layouts() {
        let mut set = WidgetSet::with_defaults();
        let mut layouts = set.layouts().clone();
        if let Some(p) = layouts.placement_mut(Breakpoint::Lg, "ovx") {
            p.w = 60;
        }
        set.move_or_resize(layouts.clone());
        assert_eq!(set.layouts(), &layouts);
    }
}
