//! Placement and per-breakpoint layout set types.
//!
//! The serialized shape matches the grid engine's own layout format:
//! placements carry their widget key as `i`, and a layout set is a plain
//! JSON object keyed by breakpoint name.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::layout::Breakpoint;

/// Row sentinel asking the grid to stack a placement below everything else.
///
/// Serialized as `null`, the same value a JSON encoder produces for an
/// infinite row index.
pub const BOTTOM: u32 = u32::MAX;

/// Grid coordinates and size of one widget at one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Id of the widget this placement belongs to.
    #[serde(rename = "i")]
    pub id: String,
    /// Column offset.
    pub x: u32,
    /// Row offset, or [`BOTTOM`].
    #[serde(with = "row")]
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows.
    pub h: u32,
}

impl Placement {
    /// Creates a placement for widget `id`.
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// Returns `true` if the row has not been resolved by the grid yet.
    pub fn is_at_bottom(&self) -> bool {
        self.y == BOTTOM
    }

    /// Returns `true` if the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        let (ax, bx) = (u64::from(self.x), u64::from(other.x));
        let (ay, by) = (u64::from(self.y), u64::from(other.y));
        ax < bx + u64::from(other.w)
            && bx < ax + u64::from(self.w)
            && ay < by + u64::from(other.h)
            && by < ay + u64::from(self.h)
    }
}

mod row {
    use super::BOTTOM;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(y: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        if *y == BOTTOM {
            serializer.serialize_none()
        } else {
            serializer.serialize_u32(*y)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(BOTTOM))
    }
}

/// Breakpoint name to ordered placements.
///
/// Keys are strings rather than [`Breakpoint`] so that layouts saved with
/// breakpoint names this build does not know about survive a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSet(BTreeMap<String, Vec<Placement>>);

impl LayoutSet {
    /// Creates an empty layout set with no breakpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements for a known breakpoint.
    pub fn get(&self, bp: Breakpoint) -> Option<&[Placement]> {
        self.get_named(bp.name())
    }

    /// Placements for any breakpoint key, known or not.
    pub fn get_named(&self, name: &str) -> Option<&[Placement]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Mutable placements for a breakpoint key.
    pub fn get_named_mut(&mut self, name: &str) -> Option<&mut Vec<Placement>> {
        self.0.get_mut(name)
    }

    /// Replaces the placements stored for a breakpoint.
    pub fn insert(&mut self, bp: Breakpoint, placements: Vec<Placement>) {
        self.insert_named(bp.name().to_string(), placements);
    }

    /// Replaces the placements stored under an arbitrary key.
    pub fn insert_named(&mut self, name: String, placements: Vec<Placement>) {
        self.0.insert(name, placements);
    }

    /// Returns `true` if a sequence is stored for `bp`.
    pub fn contains(&self, bp: Breakpoint) -> bool {
        self.0.contains_key(bp.name())
    }

    /// Appends a placement to a breakpoint, creating the sequence if needed.
    pub fn push(&mut self, bp: Breakpoint, placement: Placement) {
        self.0
            .entry(bp.name().to_string())
            .or_default()
            .push(placement);
    }

    /// Finds the placement for widget `id` at `bp`.
    pub fn placement(&self, bp: Breakpoint, id: &str) -> Option<&Placement> {
        self.get(bp)?.iter().find(|p| p.id == id)
    }

    /// Finds the placement for widget `id` at `bp` for editing.
    pub fn placement_mut(&mut self, bp: Breakpoint, id: &str) -> Option<&mut Placement> {
        self.0.get_mut(bp.name())?.iter_mut().find(|p| p.id == id)
    }

    /// Drops every placement whose id is not in `ids`, at every breakpoint.
    pub fn retain_ids(&mut self, ids: &HashSet<&str>) {
        for placements in self.0.values_mut() {
            placements.retain(|p| ids.contains(p.id.as_str()));
        }
    }

    /// Drops every placement for widget `id`. Returns how many were removed.
    pub fn remove_id(&mut self, id: &str) -> usize {
        let mut removed = 0;
        for placements in self.0.values_mut() {
            let before = placements.len();
            placements.retain(|p| p.id != id);
            removed += before - placements.len();
        }
        removed
    }

    /// Iterates over `(breakpoint key, placements)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Placement])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of breakpoint keys stored.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no breakpoint keys are stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
