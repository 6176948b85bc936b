use std::collections::HashSet;

use crate::error::{KnapsackError, Result};
use crate::item::Item;

/// The working collection of items not yet scheduled. Keeps insertion order,
/// rejects a second item with a name already present, and supports
/// order-preserving removal by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    names: HashSet<String>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Reads a catalog document: one `name cost value` item per line. Blank
    /// lines and `#` comments are skipped.
    pub fn parse(document: &str) -> Result<Catalog> {
        let mut catalog = Catalog::new();
        for (n, line) in document.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let item = line
                .parse::<Item>()
                .map_err(|reason| KnapsackError::ParseItem { line: n + 1, reason })?;
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, item: Item) -> Result<()> {
        if !self.names.insert(item.name().to_string()) {
            return Err(KnapsackError::DuplicateItemName {
                name: item.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<Item> {
        if !self.names.remove(name) {
            return None;
        }
        let pos = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(pos))
    }

    /// Drops every item named in `removed` in one pass, keeping the order of
    /// the rest. Returns how many were dropped.
    pub fn remove_all<'a>(&mut self, removed: impl IntoIterator<Item = &'a Item>) -> usize {
        let doomed: HashSet<&str> = removed
            .into_iter()
            .map(Item::name)
            .filter(|name| self.names.contains(*name))
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        self.items.retain(|item| !doomed.contains(item.name()));
        for name in &doomed {
            self.names.remove(*name);
        }
        doomed.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
