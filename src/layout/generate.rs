//! Default grid placement for a widget sequence.
//!
//! Packing is pure index arithmetic: two widgets per row on wide
//! breakpoints, one per row on narrow ones, every widget [`ROW_HEIGHT`]
//! rows tall.

use crate::layout::{Breakpoint, LayoutSet, Placement, BOTTOM, ROW_HEIGHT};
use crate::widgets::Widget;

/// Width of a single widget at `bp`.
fn cell_width(bp: Breakpoint) -> u32 {
    if bp.is_wide() {
        bp.columns() / 2
    } else {
        bp.columns()
    }
}

/// Column offset of the widget at `index`.
fn cell_x(bp: Breakpoint, index: usize) -> u32 {
    if bp.is_wide() {
        (index % 2) as u32 * (bp.columns() / 2)
    } else {
        0
    }
}

/// Row offset of the widget at `index`.
fn cell_y(bp: Breakpoint, index: usize) -> u32 {
    let row = if bp.is_wide() { index / 2 } else { index };
    row as u32 * ROW_HEIGHT
}

/// Placement of the widget at `index` in a freshly generated layout.
pub fn default_placement(bp: Breakpoint, index: usize, id: &str) -> Placement {
    Placement::new(
        id,
        cell_x(bp, index),
        cell_y(bp, index),
        cell_width(bp),
        ROW_HEIGHT,
    )
}

/// Placement for a widget appended at `index` to an existing layout.
///
/// Keeps the column alternation but leaves the row to the grid, which
/// packs [`BOTTOM`] placements under everything already placed.
pub fn appended_placement(bp: Breakpoint, index: usize, id: &str) -> Placement {
    Placement::new(id, cell_x(bp, index), BOTTOM, cell_width(bp), ROW_HEIGHT)
}

/// Placements for every widget at a single breakpoint.
pub fn default_placements(bp: Breakpoint, widgets: &[Widget]) -> Vec<Placement> {
    widgets
        .iter()
        .enumerate()
        .map(|(index, widget)| default_placement(bp, index, &widget.id))
        .collect()
}

/// Generates a layout set placing every widget once per breakpoint.
pub fn default_layouts(widgets: &[Widget]) -> LayoutSet {
    let mut layouts = LayoutSet::new();
    for bp in Breakpoint::ALL {
        layouts.insert(bp, default_placements(bp, widgets));
    }
    layouts
}

/// Adds placements for a widget appended at `index` without touching
/// existing ones.
pub fn append_widget(layouts: &mut LayoutSet, index: usize, id: &str) {
    for bp in Breakpoint::ALL {
        layouts.push(bp, appended_placement(bp, index, id));
    }
}
