// src/config/watchlist.rs
//! Compiled-in world quest watch list.
//!
//! Keys are wowhead's URL segment for each expansion; values are the quest ids
//! to be pinged about. An empty slice means "fetch, but track nothing".
//! Edit `WORLD_QUESTS` and rebuild to change what is watched.

use std::collections::BTreeSet;

pub const WORLD_QUESTS: &[(&str, &[u32])] = &[
    ("legion", &[
        // 42819, // Legion World Boss: Humongris
        // 45977, // Where There is a Whip...
    ]),
    ("bfa", &[
        // 51976, // Green Sabertron
        // 51173, // Sandfishing
        // 54689, // "Lights Out" for [Doomsoul Surprise]
        // 54415, // "Vulpera for a Day" for [Scavenge like a Vulpera]
        // 50717, // "Don't Stalk Me, Troll" for [Zandalari Spycatcher]
        // 50786, // "Revenge of Krag'wa" for [Revenge is Best Served Speedily]
        // 50665, // "Cancel the Blood Troll Apocalypse" for [A Most Efficient Apocalypse]
        // 51957, // "The Wrath of Vorrik" for [Vorrik's Champion] Part 1
        // 51983, // "Vorrik's Vengeance" for [Vorrik's Champion] Part 2
        // 52798, // "A Few More Charges" for [Hungry, Hungry Ranishu]
    ]),
    ("sl", &[]),
    ("df", &[
        // 78370, // Claws for Concern
    ]),
    ("tww", &[
        // 82120, // Pool Cleaner
        // 82580, // Courier Mission: Ore Recovery
    ]),
];

/// Ordered expansion → quest id sets. Iteration order is configuration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchList {
    entries: Vec<(String, BTreeSet<u32>)>,
}

impl WatchList {
    pub fn builtin() -> Self {
        Self::from_entries(WORLD_QUESTS.iter().map(|(exp, ids)| (*exp, ids.iter().copied())))
    }

    /// Later duplicates of an expansion key are merged into the first occurrence.
    pub fn from_entries<E, I>(entries: impl IntoIterator<Item = (E, I)>) -> Self
    where
        E: Into<String>,
        I: IntoIterator<Item = u32>,
    {
        let mut out: Vec<(String, BTreeSet<u32>)> = Vec::new();
        for (exp, ids) in entries {
            let exp = exp.into();
            match out.iter_mut().find(|(k, _)| *k == exp) {
                Some((_, set)) => set.extend(ids),
                None => out.push((exp, ids.into_iter().collect())),
            }
        }
        Self { entries: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<u32>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of tracked quest ids across all expansions.
    pub fn tracked(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_configuration_order() {
        let w = WatchList::builtin();
        let keys: Vec<&str> = w.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["legion", "bfa", "sl", "df", "tww"]);
    }

    #[test]
    fn duplicate_keys_merge() {
        let w = WatchList::from_entries([("bfa", vec![1, 2]), ("df", vec![]), ("bfa", vec![3])]);
        assert_eq!(w.len(), 2);
        let (k, ids) = w.iter().next().unwrap();
        assert_eq!(k, "bfa");
        assert_eq!(ids.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(w.tracked(), 3);
    }

    #[test]
    fn no_entries_is_empty() {
        let w = WatchList::from_entries(Vec::<(&str, Vec<u32>)>::new());
        assert!(w.is_empty());
        assert_eq!(w.tracked(), 0);
        assert!(!WatchList::builtin().is_empty());
    }
}
