//! Memoized allocation lookups
//!
//! Allocation only depends on `(age, risk)`, so there are at most
//! 121 x 3 distinct plans for a given tier table. The cache keeps them around
//! across evaluations and is safe to share between batch worker threads.

use super::model::{allocate_with, AllocationPlan};
use crate::assumptions::AllocationRules;
use crate::profile::RiskAppetite;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Hit/miss counters for an [`AllocationCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Allocation plans keyed by `(age, risk)` for one tier table
#[derive(Debug)]
pub struct AllocationCache {
    rules: AllocationRules,
    plans: Mutex<HashMap<(u8, RiskAppetite), AllocationPlan>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl AllocationCache {
    pub fn new(rules: AllocationRules) -> Self {
        Self {
            rules,
            plans: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Tier table the cached plans were computed with
    pub fn rules(&self) -> &AllocationRules {
        &self.rules
    }

    /// Cached plan for `(age, risk)`, computing it on first use
    pub fn get(&self, age: u8, risk: RiskAppetite) -> AllocationPlan {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still consistent.
        let mut plans = match self.plans.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(plan) = plans.get(&(age, risk)) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *plan;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let plan = allocate_with(&self.rules, age, risk);
        plans.insert((age, risk), plan);
        plan
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Number of distinct plans held
    pub fn len(&self) -> usize {
        self.plans.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AllocationCache {
    fn default() -> Self {
        Self::new(AllocationRules::default())
    }
}

impl Clone for AllocationCache {
    /// Clones the tier table only; the copy starts empty
    fn clone(&self) -> Self {
        Self::new(self.rules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::allocate;

    #[test]
    fn test_cache_returns_same_plan_and_counts_hits() {
        let cache = AllocationCache::default();

        let first = cache.get(35, RiskAppetite::Moderate);
        let second = cache.get(35, RiskAppetite::Moderate);
        let other = cache.get(35, RiskAppetite::Aggressive);

        assert_eq!(first, second);
        assert_eq!(first, allocate(35, RiskAppetite::Moderate));
        assert_eq!(other, allocate(35, RiskAppetite::Aggressive));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clone_starts_empty() {
        let cache = AllocationCache::default();
        cache.get(40, RiskAppetite::Conservative);
        let copy = cache.clone();
        assert!(copy.is_empty());
        assert_eq!(copy.rules(), cache.rules());
    }
}
