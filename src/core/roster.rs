use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registered team and its pre-tournament seed rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub seed: u32,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, seed: u32) -> Self {
        Self {
            name: name.into(),
            seed,
        }
    }
}

/// The set of teams taking part in the tournament
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Entries in file order
    entries: Vec<RosterEntry>,

    /// Index: team name -> index in entries vec
    name_to_index: HashMap<String, usize>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a team. Returns `false` (and leaves the roster unchanged) if the
    /// name is already registered.
    pub fn add(&mut self, entry: RosterEntry) -> bool {
        if self.name_to_index.contains_key(&entry.name) {
            return false;
        }
        self.name_to_index
            .insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        self.name_to_index.get(name).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Entries ordered by ascending seed rank; equal seeds keep file order
    #[must_use]
    pub fn seed_order(&self) -> Vec<&RosterEntry> {
        let mut ordered: Vec<&RosterEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.seed);
        ordered
    }
}

impl FromIterator<RosterEntry> for Roster {
    /// Duplicate names after the first are dropped
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        let mut roster = Self::new();
        for entry in iter {
            roster.add(entry);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut roster = Roster::new();
        assert!(roster.add(RosterEntry::new("A", 1)));
        assert!(!roster.add(RosterEntry::new("A", 2)));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("A").map(|e| e.seed), Some(1));
    }

    #[test]
    fn test_seed_order_is_stable() {
        let roster: Roster = [
            RosterEntry::new("C", 3),
            RosterEntry::new("A", 1),
            RosterEntry::new("B", 3),
            RosterEntry::new("D", 2),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = roster
            .seed_order()
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "D", "C", "B"]);
    }
}
