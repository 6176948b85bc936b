mod memo;

use log::trace;

pub use memo::MemoCache;

use crate::error::{KnapsackError, Result};
use crate::item::Item;
use memo::SuffixId;

/// Scores a subset under a capacity: the sum of its values when the sum of
/// its costs stays strictly below `capacity`, otherwise 0. A subset that
/// reaches the capacity exactly is worthless.
pub fn total_value<'a>(subset: impl IntoIterator<Item = &'a Item>, capacity: i64) -> i64 {
    let (cost, value) = subset
        .into_iter()
        .fold((0i64, 0i64), |(cost, value), item| {
            (cost + item.cost(), value + item.value())
        });
    if cost < capacity { value } else { 0 }
}

/// Best subset of `items` under `capacity`, using a throwaway cache.
pub fn solve(items: &[Item], capacity: i64) -> Result<Vec<Item>> {
    let mut cache = MemoCache::new();
    Solver::new(&mut cache).solve(items, capacity)
}

/// Include/exclude search over an item sequence, memoized in a cache lent by
/// the caller. The cache may outlive the solver and be shared by successive
/// solvers of the same run.
pub struct Solver<'c> {
    cache: &'c mut MemoCache,
}

impl<'c> Solver<'c> {
    pub fn new(cache: &'c mut MemoCache) -> Solver<'c> {
        Solver { cache }
    }

    pub fn cache(&self) -> &MemoCache {
        self.cache
    }

    /// Returns the subset of `items` with the highest [`total_value`] under
    /// `capacity`, in input order.
    pub fn solve(&mut self, items: &[Item], capacity: i64) -> Result<Vec<Item>> {
        if capacity <= 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }
        let picked = self.select(items, capacity);
        Ok(picked.into_iter().map(|i| items[i].clone()).collect())
    }

    /// Indices into `items` of the best subset, ascending. The capacity is
    /// not validated here.
    pub(crate) fn select(&mut self, items: &[Item], capacity: i64) -> Vec<usize> {
        let suffixes = self.cache.suffix_ids(items);
        let mut search = Search {
            items,
            suffixes,
            cache: &mut *self.cache,
        };
        let picked = search.best(0, capacity);
        trace!(
            "solved {} item(s) at capacity {}: picked {}",
            items.len(),
            capacity,
            picked.len()
        );
        picked.into_iter().map(|offset| offset as usize).collect()
    }
}

struct Search<'a> {
    items: &'a [Item],
    suffixes: Vec<SuffixId>,
    cache: &'a mut MemoCache,
}

impl Search<'_> {
    // Best subset of items[index..] as offsets from `index`. `capacity` may
    // go negative through the include branch; those are ordinary keys.
    fn best(&mut self, index: usize, capacity: i64) -> Vec<u32> {
        let items = self.items;
        if index == items.len() {
            return Vec::new();
        }
        let key = self.suffixes[index];
        if let Some(answer) = self.cache.get(key, capacity) {
            return answer;
        }

        let head_cost = items[index].cost();
        let mut include = vec![0];
        include.extend(
            self.best(index + 1, capacity.saturating_sub(head_cost))
                .into_iter()
                .map(|offset| offset + 1),
        );
        let dont_include: Vec<u32> = self
            .best(index + 1, capacity)
            .into_iter()
            .map(|offset| offset + 1)
            .collect();

        let suffix = &items[index..];
        // ties go to dont_include.
        let answer = if score(suffix, &include, capacity) > score(suffix, &dont_include, capacity)
        {
            include
        } else {
            dont_include
        };
        self.cache.insert(key, capacity, answer.clone());
        answer
    }
}

fn score(suffix: &[Item], offsets: &[u32], capacity: i64) -> i64 {
    total_value(offsets.iter().map(|&offset| &suffix[offset as usize]), capacity)
}
