//! Grid geometry: from placements in grid units to terminal cells.
//!
//! Horizontally a breakpoint's columns are spread over the available width.
//! Vertically one terminal line covers [`UNITS_PER_LINE`] grid units, so a
//! default-height widget (20 units) is ten lines tall.

use ratatui::layout::Rect;

use crate::layout::{Breakpoint, Placement};

/// Grid units drawn per terminal line.
pub const UNITS_PER_LINE: u32 = 2;

/// Replaces every bottom-anchored `y` with a concrete row.
///
/// Placements with a real `y` keep it. Each bottom-anchored placement, in
/// order, lands directly below the lowest already-resolved placement that
/// shares one of its columns.
pub fn resolve(placements: &[Placement]) -> Vec<Placement> {
    let mut resolved: Vec<Placement> = placements
        .iter()
        .filter(|p| !p.is_at_bottom())
        .cloned()
        .collect();
    let mut out = Vec::with_capacity(placements.len());
    for p in placements {
        if !p.is_at_bottom() {
            out.push(p.clone());
            continue;
        }
        let floor = resolved
            .iter()
            .filter(|other| spans_overlap(p.x, p.w, other.x, other.w))
            .map(|other| other.y.saturating_add(other.h))
            .max()
            .unwrap_or(0);
        let mut placed = p.clone();
        placed.y = floor;
        resolved.push(placed.clone());
        out.push(placed);
    }
    out
}

fn spans_overlap(a: u32, aw: u32, b: u32, bw: u32) -> bool {
    let (a, aw, b, bw) = (a as u64, aw as u64, b as u64, bw as u64);
    a < b + bw && b < a + aw
}

/// Lowest occupied grid unit of `placements`, which must be resolved.
pub fn grid_height(placements: &[Placement]) -> u32 {
    placements
        .iter()
        .map(|p| p.y.saturating_add(p.h))
        .max()
        .unwrap_or(0)
}

/// Terminal line span `[top, bottom)` of a resolved placement.
pub fn line_span(p: &Placement) -> (u32, u32) {
    let top = p.y / UNITS_PER_LINE;
    let bottom = p.y.saturating_add(p.h).div_ceil(UNITS_PER_LINE);
    (top, bottom.max(top + 1))
}

/// Screen rectangle of a resolved placement inside `area`, scrolled down by
/// `scroll` lines. `None` when nothing of it is visible.
pub fn cell_rect(p: &Placement, bp: Breakpoint, area: Rect, scroll: u16) -> Option<Rect> {
    let columns = bp.columns() as u64;
    let width = area.width as u64;
    let x = (p.x as u64).min(columns);
    let right = (p.x as u64).saturating_add(p.w as u64).min(columns);
    if right <= x {
        return None;
    }
    let left_col = area.x as u64 + x * width / columns;
    let right_col = area.x as u64 + right * width / columns;

    let (top, bottom) = line_span(p);
    let scroll = scroll as u32;
    if bottom <= scroll {
        return None;
    }
    let top = top.saturating_sub(scroll) as u64;
    let bottom = (bottom - scroll) as u64;
    if top >= area.height as u64 {
        return None;
    }
    let top_row = area.y as u64 + top;
    let bottom_row = area.y as u64 + bottom.min(area.height as u64);

    let rect = Rect::new(
        left_col as u16,
        top_row as u16,
        right_col.saturating_sub(left_col) as u16,
        bottom_row.saturating_sub(top_row) as u16,
    );
    (rect.width > 0 && rect.height > 0).then_some(rect)
}

/// `p` moved by `dx` columns and `dy` grid units, kept inside the columns
/// of `bp` and above row zero.
pub fn moved(p: &Placement, bp: Breakpoint, dx: i32, dy: i32) -> Placement {
    let columns = bp.columns();
    let w = p.w.clamp(1, columns);
    let max_x = columns - w;
    let mut out = p.clone();
    out.w = w;
    out.x = offset(p.x.min(max_x), dx).min(max_x);
    out.y = offset(p.y, dy);
    out
}

/// `p` grown by `dw` columns and `dh` grid units. Width stays within the
/// columns right of `x`; height never drops below one terminal line.
pub fn resized(p: &Placement, bp: Breakpoint, dw: i32, dh: i32) -> Placement {
    let columns = bp.columns();
    let mut out = p.clone();
    out.x = p.x.min(columns - 1);
    out.w = offset(p.w, dw).clamp(1, columns - out.x);
    out.h = offset(p.h, dh).max(UNITS_PER_LINE);
    out
}

fn offset(value: u32, delta: i32) -> u32 {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as u32)
    }
}
