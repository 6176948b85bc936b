use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{KnapsackError, Result};
use crate::item::Item;
use crate::solver::{MemoCache, Solver, total_value};

/// The items accepted in one scheduling round, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    round: usize,
    items: Vec<Item>,
}

impl Batch {
    /// 1-based round number.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }

    pub fn total_cost(&self) -> i64 {
        self.items.iter().map(Item::cost).sum()
    }

    pub fn total_value(&self, capacity: i64) -> i64 {
        total_value(&self.items, capacity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every batch of a run, in round order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    batches: Vec<Batch>,
}

impl Solution {
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Batch> {
        self.batches.iter()
    }

    /// Number of rounds.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Number of items scheduled across all rounds.
    pub fn item_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Batch;
    type IntoIter = std::slice::Iter<'a, Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}

impl IntoIterator for Solution {
    type Item = Batch;
    type IntoIter = std::vec::IntoIter<Batch>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}

/// Partitions `catalog` into batches with a fresh cache. See [`Scheduler::run`].
pub fn run_batches(catalog: Catalog, slot_budget: usize, capacity: i64) -> Result<Solution> {
    let mut cache = MemoCache::new();
    Scheduler::new(&mut cache).run(catalog, slot_budget, capacity)
}

/// Drives the solver round after round against the shrinking catalog until
/// `slot_budget` items have been scheduled.
pub struct Scheduler<'c> {
    solver: Solver<'c>,
}

impl<'c> Scheduler<'c> {
    pub fn new(cache: &'c mut MemoCache) -> Scheduler<'c> {
        Scheduler {
            solver: Solver::new(cache),
        }
    }

    /// Each round solves the remaining catalog at `capacity`, accepts the
    /// selection in order while slots remain and removes the accepted items.
    /// Selected items beyond the last slot are dropped from the round and stay
    /// in the catalog.
    ///
    /// An empty catalog or a zero budget yields an empty solution. The run
    /// also ends early, without error, once every item has been scheduled. A
    /// round that selects nothing from a non-empty catalog fails with
    /// [`KnapsackError::NoFeasibleItem`].
    pub fn run(&mut self, mut catalog: Catalog, slot_budget: usize, capacity: i64) -> Result<Solution> {
        if capacity <= 0 {
            return Err(KnapsackError::InvalidCapacity { capacity });
        }

        let mut slots = slot_budget;
        let mut batches = Vec::new();

        while slots > 0 {
            if catalog.is_empty() {
                info!("catalog exhausted with {} slot(s) unfilled", slots);
                break;
            }
            let round = batches.len() + 1;

            let candidate = self.solver.select(catalog.items(), capacity);
            if candidate.is_empty() {
                warn!(
                    "round {}: no item of the {} remaining fits under capacity {}",
                    round,
                    catalog.len(),
                    capacity
                );
                return Err(KnapsackError::NoFeasibleItem {
                    round,
                    remaining_slots: slots,
                    remaining_items: catalog.len(),
                });
            }

            let mut accepted = Vec::with_capacity(candidate.len().min(slots));
            for &index in &candidate {
                if slots == 0 {
                    break;
                }
                accepted.push(catalog.items()[index].clone());
                slots -= 1;
            }
            catalog.remove_all(&accepted);

            let cache = self.solver.cache();
            debug!(
                "round {}: selected {}, accepted {}, {} slot(s) left, {} item(s) left; memo {} entries ({} hits, {} misses)",
                round,
                candidate.len(),
                accepted.len(),
                slots,
                catalog.len(),
                cache.len(),
                cache.hits(),
                cache.misses()
            );

            batches.push(Batch {
                round,
                items: accepted,
            });
        }

        let solution = Solution { batches };
        info!(
            "scheduled {} item(s) in {} round(s)",
            solution.item_count(),
            solution.len()
        );
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SPRINKLERS: &str = include_str!("../data/sprinklers.txt");

    fn catalog(rows: &[(&str, i64, i64)]) -> Catalog {
        Catalog::from_items(
            rows.iter()
                .map(|&(name, cost, value)| Item::new(name, cost, value)),
        )
        .unwrap()
    }

    fn rounds(solution: &Solution) -> Vec<Vec<&str>> {
        solution.iter().map(Batch::names).collect()
    }

    #[test]
    fn test_sample_first_round() -> Result<()> {
        let solution = run_batches(Catalog::parse(SPRINKLERS)?, 10, 40)?;
        let first = &solution.batches()[0];
        assert_eq!(
            vec!["sprinkler_01", "sprinkler_02", "sprinkler_07", "sprinkler_16"],
            first.names()
        );
        assert_eq!(39, first.total_cost());
        assert_eq!(17, first.total_value(40));
        assert_eq!(10, solution.item_count());
        Ok(())
    }

    #[test]
    fn test_truncates_the_last_round() -> Result<()> {
        let solution = run_batches(Catalog::parse(SPRINKLERS)?, 5, 40)?;
        assert_eq!(
            vec![
                vec!["sprinkler_01", "sprinkler_02", "sprinkler_07", "sprinkler_16"],
                vec!["sprinkler_05"],
            ],
            rounds(&solution)
        );

        let solution = run_batches(Catalog::parse(SPRINKLERS)?, 3, 40)?;
        assert_eq!(
            vec![vec!["sprinkler_01", "sprinkler_02", "sprinkler_07"]],
            rounds(&solution)
        );
        Ok(())
    }

    #[test]
    fn test_budget_larger_than_catalog() -> Result<()> {
        let solution = run_batches(Catalog::parse(SPRINKLERS)?, 20, 40)?;
        assert_eq!(9, solution.len());
        assert_eq!(20, solution.item_count());
        assert_eq!(vec!["sprinkler_14"], solution.batches()[8].names());

        // the catalog runs out before the budget does.
        let solution = run_batches(catalog(&[("a", 1, 1), ("b", 1, 1)]), 5, 10)?;
        assert_eq!(vec![vec!["a", "b"]], rounds(&solution));
        Ok(())
    }

    #[test]
    fn test_empty_inputs_are_not_errors() -> Result<()> {
        assert!(run_batches(Catalog::new(), 10, 40)?.is_empty());
        assert!(run_batches(catalog(&[("a", 1, 1)]), 0, 40)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        assert_eq!(
            Err(KnapsackError::InvalidCapacity { capacity: 0 }),
            run_batches(catalog(&[("a", 1, 1)]), 1, 0)
        );
    }

    #[test]
    fn test_stops_when_no_item_fits() {
        let res = run_batches(catalog(&[("x", 10, 1), ("y", 2, 2)]), 5, 5);
        assert_eq!(
            Err(KnapsackError::NoFeasibleItem {
                round: 2,
                remaining_slots: 4,
                remaining_items: 1,
            }),
            res
        );

        // an item costing exactly the capacity never fits.
        let res = run_batches(catalog(&[("x", 5, 1)]), 1, 5);
        assert!(matches!(res, Err(KnapsackError::NoFeasibleItem { round: 1, .. })));
    }

    #[test]
    fn test_solution_partitions_the_catalog() -> Result<()> {
        let rows: Vec<(String, i64, i64)> = (0..30i64)
            .map(|i| (format!("item_{:02}", i), 1 + (i * 7) % 13, 1 + (i * 5) % 9))
            .collect();
        for (slots, capacity) in [(1, 20), (7, 20), (12, 25), (30, 30), (50, 14)] {
            let items = rows
                .iter()
                .map(|(name, cost, value)| Item::new(name.as_str(), *cost, *value));
            let solution = run_batches(Catalog::from_items(items)?, slots, capacity)?;

            let mut seen = HashSet::new();
            for batch in &solution {
                assert!(!batch.is_empty());
                assert!(batch.total_cost() < capacity);
                for item in batch.items() {
                    assert!(seen.insert(item.name().to_string()), "{} scheduled twice", item.name());
                }
            }
            assert_eq!(slots.min(rows.len()), solution.item_count());
        }
        Ok(())
    }

    #[test]
    fn test_shared_cache_gives_the_same_solution() -> Result<()> {
        let mut cache = MemoCache::new();
        let first = Scheduler::new(&mut cache).run(Catalog::parse(SPRINKLERS)?, 10, 40)?;
        let warm = Scheduler::new(&mut cache).run(Catalog::parse(SPRINKLERS)?, 10, 40)?;
        assert_eq!(first, warm);
        assert!(cache.hits() > 0);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }
}
