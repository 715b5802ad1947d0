//! Applies key actions to the tab state.

use super::App;
use crate::layout::{Breakpoint, Placement};
use crate::store::Store;
use crate::tui::event::Action;
use crate::tui::grid;

impl<S: Store> App<S> {
    /// Applies one [`Action`]. Every state change goes through the tab
    /// manager, which persists it.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None | Action::Quit => {}
            Action::Move { dx, dy } => self.adjust(|p, bp| grid::moved(p, bp, dx, dy)),
            Action::Resize { dw, dh } => self.adjust(|p, bp| grid::resized(p, bp, dw, dh)),
            Action::AddWidget(symbol) => self.add_widget(&symbol),
            Action::DeleteWidget => self.delete_widget(),
            Action::ResetTab => {
                let Some(tab_id) = self.tabs.active_id().map(str::to_string) else {
                    return;
                };
                if self.tabs.reset_tab(&tab_id) {
                    self.reset_selection();
                    self.set_status("Restored default widgets");
                }
            }
            Action::NewTab => {
                let id = self.tabs.add_tab();
                let name = self.tabs.tab(&id).map(|t| t.name.clone()).unwrap_or(id);
                self.reset_selection();
                self.set_status(format!("Created {name}"));
            }
            Action::RemoveTab => {
                let Some(tab) = self.tabs.active_tab() else {
                    return;
                };
                let (id, name) = (tab.id.clone(), tab.name.clone());
                if self.tabs.remove_tab(&id) {
                    self.reset_selection();
                    self.set_status(format!("Removed {name}"));
                }
            }
            Action::RenameTab(name) => {
                let Some(tab_id) = self.tabs.active_id().map(str::to_string) else {
                    return;
                };
                if !self.tabs.rename_tab(&tab_id, &name) {
                    self.set_status("Tab name must not be empty");
                }
            }
            Action::PrevTab => self.cycle_tab(-1),
            Action::NextTab => self.cycle_tab(1),
        }
    }

    fn add_widget(&mut self, symbol: &str) {
        let Some(tab_id) = self.tabs.active_id().map(str::to_string) else {
            return;
        };
        match self.tabs.add_widget(&tab_id, symbol) {
            Ok(_) => {
                self.selected = self.active_widgets().len().checked_sub(1);
                self.set_status(format!("Added {}", symbol.trim()));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    fn delete_widget(&mut self) {
        let (Some(tab_id), Some(widget)) = (
            self.tabs.active_id().map(str::to_string),
            self.selected_widget().cloned(),
        ) else {
            return;
        };
        if self.tabs.remove_widget(&tab_id, &widget.id) {
            self.clamp_selection();
            self.set_status(format!("Removed {}", widget.symbol));
        }
    }

    /// Rewrites the selected widget's placement at the current breakpoint.
    ///
    /// A bottom-anchored placement is resolved to its drawn row first, so
    /// the first move pins it where it is shown.
    fn adjust(&mut self, change: impl Fn(&Placement, Breakpoint) -> Placement) {
        let bp = self.breakpoint();
        let Some(tab) = self.tabs.active_tab() else {
            return;
        };
        let Some(widget) = self.selected.and_then(|i| tab.widgets().get(i)) else {
            return;
        };
        let resolved = grid::resolve(tab.layouts().get(bp).unwrap_or(&[]));
        let Some(current) = resolved.iter().find(|p| p.id == widget.id) else {
            return;
        };
        let next = change(current, bp);
        if &next == current {
            return;
        }
        let mut layouts = tab.layouts().clone();
        let Some(slot) = layouts.placement_mut(bp, &widget.id) else {
            return;
        };
        *slot = next;
        let tab_id = tab.id.clone();
        self.tabs.move_or_resize(&tab_id, layouts);
    }

    fn cycle_tab(&mut self, delta: isize) {
        let len = self.tabs.tabs().len();
        let Some(current) = self.tabs.active_index() else {
            return;
        };
        if len < 2 {
            return;
        }
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        let id = self.tabs.tabs()[next].id.clone();
        if self.tabs.select_tab(&id) {
            self.reset_selection();
        }
    }
}
