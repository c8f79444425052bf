//! Boss catalog and name resolution
//!
//! An immutable registry built once at startup from the static boss table.
//! Lookup is forgiving about casing, spaces, and apostrophes, and accepts
//! partial names (`"dalia"` resolves to `Lady Dalia`).

use hashbrown::HashMap;

use crate::game_data::{BOSS_DATA, BossEntry};

/// Immutable boss registry with a precomputed alias index.
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [BossEntry],
    /// Canonical name → index into `entries`
    by_name: HashMap<&'static str, usize>,
    /// Normalized alias → index, for exact hits
    exact: HashMap<String, usize>,
    /// Same aliases in insertion order, for the deterministic substring scan
    aliases: Vec<(String, usize)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::from_entries(BOSS_DATA)
    }

    pub fn from_entries(entries: &'static [BossEntry]) -> Self {
        fn add_alias(
            alias: String,
            idx: usize,
            exact: &mut HashMap<String, usize>,
            aliases: &mut Vec<(String, usize)>,
        ) {
            if alias.is_empty() || exact.contains_key(&alias) {
                return;
            }
            exact.insert(alias.clone(), idx);
            aliases.push((alias, idx));
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut exact = HashMap::new();
        let mut aliases = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            by_name.insert(entry.name, idx);
            add_alias(normalize(entry.name), idx, &mut exact, &mut aliases);

            // Multi-word names also answer to each word ("lady", "dalia")
            if entry.name.contains(' ') {
                for word in entry.name.split_whitespace() {
                    add_alias(normalize(word), idx, &mut exact, &mut aliases);
                }
            }
        }

        Self {
            entries,
            by_name,
            exact,
            aliases,
        }
    }

    /// All entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &BossEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by canonical name
    pub fn get(&self, name: &str) -> Option<&BossEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Resolve free-text input to a catalog entry.
    ///
    /// Tries an exact hit on the normalized alias index first, then a
    /// substring match in either direction over the aliases in insertion
    /// order. Returns `None` when nothing matches.
    pub fn resolve(&self, input: &str) -> Option<&BossEntry> {
        let needle = normalize(input);
        if needle.is_empty() {
            return None;
        }

        if let Some(&idx) = self.exact.get(&needle) {
            return Some(&self.entries[idx]);
        }

        for (alias, idx) in &self.aliases {
            if alias.contains(&needle) || needle.contains(alias.as_str()) {
                return Some(&self.entries[*idx]);
            }
        }

        None
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase with spaces and apostrophes stripped
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != ' ' && *c != '\'')
        .flat_map(char::to_lowercase)
        .collect()
}
