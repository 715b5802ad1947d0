//! Reconciliation of a saved layout set against the current widgets.

use std::collections::HashSet;

use crate::layout::{appended_placement, default_placements, Breakpoint, LayoutSet};
use crate::widgets::Widget;

/// Drops placements whose id names no current widget.
///
/// Every breakpoint key in `saved` is kept, including names outside the
/// breakpoint table; breakpoints missing from `saved` stay missing (see
/// [`fill_missing`]).
pub fn reconcile(mut saved: LayoutSet, widgets: &[Widget]) -> LayoutSet {
    let ids: HashSet<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    saved.retain_ids(&ids);
    saved
}

/// Generates default placements for known breakpoints absent from `layouts`.
///
/// Returns the breakpoints that had to be generated.
pub fn fill_missing(layouts: &mut LayoutSet, widgets: &[Widget]) -> Vec<Breakpoint> {
    let mut filled = Vec::new();
    for bp in Breakpoint::ALL {
        if layouts.contains(bp) {
            continue;
        }
        layouts.insert(bp, default_placements(bp, widgets));
        filled.push(bp);
    }
    filled
}

/// Appends a [`BOTTOM`](crate::layout::BOTTOM) placement for each widget
/// lacking one at a known breakpoint present in `layouts`.
///
/// Saved layouts can predate widgets added by an older build; the grid
/// stacks such widgets under the existing ones. Returns the count added.
pub fn place_unplaced(layouts: &mut LayoutSet, widgets: &[Widget]) -> usize {
    let mut added = 0;
    for bp in Breakpoint::ALL {
        let Some(placements) = layouts.get_named_mut(bp.name()) else {
            continue;
        };
        for (index, widget) in widgets.iter().enumerate() {
            if !placements.iter().any(|p| p.id == widget.id) {
                placements.push(appended_placement(bp, index, &widget.id));
                added += 1;
            }
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_layouts, Placement};

    fn ab() -> Vec<Widget> {
        vec![Widget::new("a", "X:A"), Widget::new("b", "X:B")]
    }

    #[test]
    fn test_orphan_is_dropped() {
        let mut saved = LayoutSet::new();
        saved.push(Breakpoint::Lg, Placement::new("a", 0, 0, 30, 20));
        saved.push(Breakpoint::Lg, Placement::new("zzz", 30, 0, 30, 20));
        saved.push(Breakpoint::Lg, Placement::new("b", 0, 20, 30, 20));

        let result = reconcile(saved, &ab());
        let lg = result.get(Breakpoint::Lg).expect("lg kept");
        let ids: Vec<&str> = lg.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(lg[1], Placement::new("b", 0, 20, 30, 20));
    }

    #[test]
    fn test_unknown_breakpoint_key_is_kept() {
        let mut saved = LayoutSet::new();
        saved.insert_named(
            "xl".to_string(),
            vec![Placement::new("a", 0, 0, 80, 20), Placement::new("gone", 0, 20, 80, 20)],
        );
        let result = reconcile(saved, &ab());
        let xl = result.get_named("xl").expect("xl passes through");
        assert_eq!(xl, &[Placement::new("a", 0, 0, 80, 20)]);
    }

    #[test]
    fn test_missing_breakpoints_stay_missing() {
        let mut saved = LayoutSet::new();
        saved.push(Breakpoint::Md, Placement::new("a", 0, 0, 25, 20));
        let result = reconcile(saved, &ab());
        assert_eq!(result.len(), 1);
        assert!(!result.contains(Breakpoint::Lg));
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut saved = default_layouts(&ab());
        saved.push(Breakpoint::Xs, Placement::new("stale", 0, 40, 24, 20));
        let once = reconcile(saved, &ab());
        let twice = reconcile(once.clone(), &ab());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reconcile_against_no_widgets_empties_every_key() {
        let result = reconcile(default_layouts(&ab()), &[]);
        for (_, placements) in result.iter() {
            assert!(placements.is_empty());
        }
    }

    #[test]
    fn test_fill_missing_generates_only_absent() {
        let mut layouts = LayoutSet::new();
        layouts.push(Breakpoint::Lg, Placement::new("b", 0, 0, 60, 40));
        let filled = fill_missing(&mut layouts, &ab());
        assert_eq!(
            filled,
            vec![Breakpoint::Md, Breakpoint::Sm, Breakpoint::Xs, Breakpoint::Xxs]
        );
        assert_eq!(
            layouts.get(Breakpoint::Lg),
            Some(&[Placement::new("b", 0, 0, 60, 40)][..])
        );
        assert_eq!(
            layouts.placement(Breakpoint::Md, "b"),
            Some(&Placement::new("b", 25, 0, 25, 20))
        );
    }

    #[test]
    fn test_place_unplaced_appends_at_bottom() {
        let mut layouts = LayoutSet::new();
        layouts.push(Breakpoint::Lg, Placement::new("a", 0, 0, 30, 20));
        let added = place_unplaced(&mut layouts, &ab());
        assert_eq!(added, 1);
        assert_eq!(
            layouts.placement(Breakpoint::Lg, "b"),
            Some(&Placement::new("b", 30, crate::layout::BOTTOM, 30, 20))
        );
        // Absent breakpoints are left to fill_missing.
        assert!(!layouts.contains(Breakpoint::Md));
    }
}
