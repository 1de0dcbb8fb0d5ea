//! Random selection helpers shared by the sample-data seeders.
//!
//! [`WeightedTable`] implements cumulative-weight selection: roll a number in
//! `0..total` and walk the table until the running weight exceeds the roll.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{SeedError, SeedResult};

/// A literal table of `(value, weight)` pairs
#[derive(Debug, Clone, Copy)]
pub struct WeightedTable<'a, T> {
    name: &'static str,
    entries: &'a [(T, u32)],
    total: u32,
}

impl<'a, T> WeightedTable<'a, T> {
    /// Wraps `entries`, rejecting an empty table or one whose weights sum to zero.
    pub fn new(name: &'static str, entries: &'a [(T, u32)]) -> SeedResult<Self> {
        let total: u32 = entries.iter().map(|(_, weight)| *weight).sum();
        if entries.is_empty() || total == 0 {
            return Err(SeedError::EmptyWeightTable { table: name });
        }
        if total != 100 {
            tracing::debug!(table = name, total, "weights do not sum to 100");
        }
        Ok(Self {
            name,
            entries,
            total,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Picks one value with probability `weight / total`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a T {
        let roll = rng.gen_range(0..self.total);
        let mut cumulative = 0;
        for (value, weight) in self.entries {
            cumulative += weight;
            if cumulative > roll {
                return value;
            }
        }
        // roll < total, so the loop always returns; keep the compiler happy
        &self.entries[self.entries.len() - 1].0
    }
}

/// Uniform pick from a non-empty literal pool. Returns `None` for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, pool: &'a [T]) -> Option<&'a T> {
    pool.choose(rng)
}

/// Uniform random date in `start..=end`. Arguments may be given in either order.
pub fn random_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let (low, high) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    let span = (high - low).num_days();
    low + Duration::days(rng.gen_range(0..=span))
}

/// Random timestamp between `days` days before `now` and `now`.
pub fn random_timestamp_within_days<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    days: i64,
) -> DateTime<Utc> {
    let seconds = days.max(0) * 24 * 60 * 60;
    now - Duration::seconds(rng.gen_range(0..=seconds))
}

/// Random amount in cents within `min..=max` whole currency units, ending in 99 cents.
pub fn random_price_cents<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high) * 100 + 99
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    const COVERAGE: &[(&str, u32)] = &[
        ("employee_only", 40),
        ("employee_spouse", 20),
        ("employee_children", 15),
        ("family", 25),
    ];

    #[test]
    fn rejects_empty_and_zero_weight_tables() {
        let empty: &[(&str, u32)] = &[];
        assert!(matches!(
            WeightedTable::new("empty", empty),
            Err(SeedError::EmptyWeightTable { table: "empty" })
        ));

        let zero: &[(&str, u32)] = &[("a", 0), ("b", 0)];
        assert!(WeightedTable::new("zero", zero).is_err());
    }

    #[test]
    fn empirical_distribution_tracks_weights() {
        let table = WeightedTable::new("coverage", COVERAGE).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let samples = 100_000;

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..samples {
            *counts.entry(*table.pick(&mut rng)).or_default() += 1;
        }

        for (value, weight) in COVERAGE {
            let expected = *weight as f64 / table.total() as f64;
            let observed = counts.get(value).copied().unwrap_or_default() as f64 / samples as f64;
            assert!(
                (observed - expected).abs() < 0.01,
                "{value}: expected {expected:.3}, observed {observed:.3}"
            );
        }
    }

    #[test]
    fn zero_weight_entries_are_never_picked() {
        let table = WeightedTable::new("skewed", &[("never", 0), ("always", 5)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_eq!(*table.pick(&mut rng), "always");
        }
    }

    #[test]
    fn dates_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        for _ in 0..500 {
            let date = random_date_between(&mut rng, end, start);
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn timestamps_stay_in_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let now = Utc::now();
        for _ in 0..500 {
            let ts = random_timestamp_within_days(&mut rng, now, 30);
            assert!(ts <= now && ts >= now - Duration::days(30));
        }
    }

    #[test]
    fn prices_end_in_ninety_nine() {
        let mut rng = StdRng::seed_from_u64(9);
        let cents = random_price_cents(&mut rng, 10, 20);
        assert_eq!(cents % 100, 99);
        assert!((1_099..=2_099).contains(&cents));
    }
}
