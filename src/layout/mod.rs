//! Grid layout system for the dashboard.
//!
//! A layout set maps each responsive breakpoint to the grid placement of
//! every widget. This module generates default placements, appends
//! placements for new widgets, and reconciles saved layouts against the
//! current widget list.

mod breakpoint;
mod generate;
mod reconcile;
mod set;

pub use breakpoint::{Breakpoint, ParseBreakpointError, ROW_HEIGHT, ROW_HEIGHT_PX};
pub use generate::{
    append_widget, appended_placement, default_layouts, default_placement, default_placements,
};
pub use reconcile::{fill_missing, place_unplaced, reconcile};
pub use set::{LayoutSet, Placement, BOTTOM};
