use std::collections::HashMap;

use cached::{Cached, UnboundCache};

use crate::item::Item;

/// Identity of an item sequence suffix. Two suffixes share an id exactly when
/// they hold equal items in the same order, whichever catalog they came from.
pub(crate) type SuffixId = u32;

/// The id of the empty suffix.
const EMPTY_SUFFIX: SuffixId = 0;

/// Memoized solver answers keyed by `(suffix, capacity)`.
///
/// Suffixes are hash-consed: each one is interned as the pair (head item, id
/// of the tail), so interning a whole sequence costs one lookup per item and
/// tails shared between rounds of a run resolve to the same entries. Answers
/// are stored as offsets relative to the start of their suffix.
///
/// The cache only grows. Call [`MemoCache::clear`] between independent runs.
pub struct MemoCache {
    items: HashMap<Item, u32>,
    suffixes: HashMap<(u32, SuffixId), SuffixId>,
    subsets: UnboundCache<(SuffixId, i64), Vec<u32>>,
}

impl MemoCache {
    pub fn new() -> MemoCache {
        MemoCache {
            items: HashMap::new(),
            suffixes: HashMap::new(),
            subsets: UnboundCache::new(),
        }
    }

    /// Interns every suffix of `items`. Entry `i` of the result identifies
    /// `items[i..]`; the extra last entry is the empty suffix.
    pub(crate) fn suffix_ids(&mut self, items: &[Item]) -> Vec<SuffixId> {
        let mut ids = vec![EMPTY_SUFFIX; items.len() + 1];
        for i in (0..items.len()).rev() {
            let head = self.intern_item(&items[i]);
            // ids start at 1, 0 is reserved for the empty suffix.
            let fresh = self.suffixes.len() as SuffixId + 1;
            ids[i] = *self.suffixes.entry((head, ids[i + 1])).or_insert(fresh);
        }
        ids
    }

    fn intern_item(&mut self, item: &Item) -> u32 {
        if let Some(&id) = self.items.get(item) {
            return id;
        }
        let id = self.items.len() as u32;
        self.items.insert(item.clone(), id);
        id
    }

    pub(crate) fn get(&mut self, suffix: SuffixId, capacity: i64) -> Option<Vec<u32>> {
        self.subsets.cache_get(&(suffix, capacity)).cloned()
    }

    pub(crate) fn insert(&mut self, suffix: SuffixId, capacity: i64, offsets: Vec<u32>) {
        self.subsets.cache_set((suffix, capacity), offsets);
    }

    /// Number of memoized answers.
    pub fn len(&self) -> usize {
        self.subsets.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.subsets.cache_hits().unwrap_or(0)
    }

    pub fn misses(&self) -> u64 {
        self.subsets.cache_misses().unwrap_or(0)
    }

    /// Forgets every answer, interned suffix and hit/miss count.
    pub fn clear(&mut self) {
        self.items.clear();
        self.suffixes.clear();
        self.subsets.cache_reset();
        self.subsets.cache_reset_metrics();
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}
