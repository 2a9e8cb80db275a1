//! Index structures over the record arena.
//!
//! The date index is a `BTreeMap` so range scans iterate dates in ascending
//! order deterministically. Within one date, slots keep insertion order.
//! The name index is last-write-wins: re-ingesting a name points the entry
//! at the newest slot.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::NaiveDate;

/// Position of a record in the store's arena.
pub type Slot = usize;

/// Maps approach dates to the slots ingested on that date.
#[derive(Debug, Default)]
pub struct DateIndex {
    tree: BTreeMap<NaiveDate, Vec<Slot>>,
}

impl DateIndex {
    pub fn new() -> Self {
        Self {
            tree: BTreeMap::new(),
        }
    }

    /// Appends a slot under a date, preserving insertion order.
    pub fn insert(&mut self, date: NaiveDate, slot: Slot) {
        self.tree.entry(date).or_default().push(slot);
    }

    /// Slots for an exact date. Unknown dates yield the empty slice.
    pub fn lookup(&self, date: NaiveDate) -> &[Slot] {
        self.tree.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slots for every indexed date in `[start, end]`, ascending by date,
    /// insertion order within each date.
    pub fn lookup_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Slot> {
        let mut slots = Vec::new();
        for (_, per_date) in self.tree.range(start..=end) {
            slots.extend_from_slice(per_date);
        }
        slots
    }

    /// Number of distinct indexed dates.
    pub fn date_count(&self) -> usize {
        self.tree.len()
    }
}

/// Maps object names to their current slot.
#[derive(Debug, Default)]
pub struct NameIndex {
    map: HashMap<String, Slot>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Points a name at a slot. Recurring names overwrite.
    pub fn insert(&mut self, name: impl Into<String>, slot: Slot) {
        self.map.insert(name.into(), slot);
    }

    pub fn lookup(&self, name: &str) -> Option<Slot> {
        self.map.get(name).copied()
    }

    /// Number of distinct names.
    pub fn name_count(&self) -> usize {
        self.map.len()
    }
}
