//! Ordered threshold tables for tiered scoring
//!
//! Every scorer expresses its bands as `const` tables evaluated top-down:
//! the first band the value falls into wins, otherwise the fallback applies.

/// Which side of the threshold a band covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    /// value >= threshold
    AtLeast,
    /// value <= threshold
    AtMost,
}

/// Ordered `(threshold, value)` bands; the value is points unless stated
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: 'static, P: 'static = u32> {
    bands: &'static [(T, P)],
    bound: Bound,
    fallback: P,
}

impl<T: 'static, P: 'static> TierTable<T, P> {
    /// Bands sorted by descending threshold, matched with `>=`
    pub const fn at_least(bands: &'static [(T, P)], fallback: P) -> Self {
        Self {
            bands,
            bound: Bound::AtLeast,
            fallback,
        }
    }

    /// Bands sorted by ascending threshold, matched with `<=`
    pub const fn at_most(bands: &'static [(T, P)], fallback: P) -> Self {
        Self {
            bands,
            bound: Bound::AtMost,
            fallback,
        }
    }
}

impl<T: PartialOrd + Copy + 'static, P: Copy + 'static> TierTable<T, P> {
    /// First matching band's value, else the fallback
    pub fn lookup(&self, value: T) -> P {
        self.bands
            .iter()
            .find(|(threshold, _)| match self.bound {
                Bound::AtLeast => value >= *threshold,
                Bound::AtMost => value <= *threshold,
            })
            .map(|(_, band)| *band)
            .unwrap_or(self.fallback)
    }
}

impl<T: PartialOrd + Copy + 'static> TierTable<T> {
    /// Points for `value`: first matching band, else the fallback
    pub fn points(&self, value: T) -> u32 {
        self.lookup(value)
    }
}

/// Ordered inclusive `(low, high, points)` ranges for non-monotonic curves
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    bands: &'static [(f64, f64, u32)],
    fallback: u32,
}

impl RangeTable {
    pub const fn new(bands: &'static [(f64, f64, u32)], fallback: u32) -> Self {
        Self { bands, fallback }
    }

    /// Points for the first range containing `value`, else the fallback
    pub fn points(&self, value: f64) -> u32 {
        self.bands
            .iter()
            .find(|(low, high, _)| value >= *low && value <= *high)
            .map(|(_, _, points)| *points)
            .unwrap_or(self.fallback)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: TierTable<usize> = TierTable::at_least(&[(50, 25), (30, 15), (15, 8)], 0);
    const DAYS: TierTable<u32> = TierTable::at_most(&[(7, 40), (14, 32), (30, 24)], 4);
    const CURVE: RangeTable = RangeTable::new(&[(7.0, 9.0, 35), (0.0, 2.0, 10)], 5);

    #[test]
    fn test_at_least_first_match_wins() {
        assert_eq!(WORDS.points(80), 25);
        assert_eq!(WORDS.points(50), 25);
        assert_eq!(WORDS.points(49), 15);
        assert_eq!(WORDS.points(15), 8);
        assert_eq!(WORDS.points(14), 0);
    }

    #[test]
    fn test_at_most_first_match_wins() {
        assert_eq!(DAYS.points(0), 40);
        assert_eq!(DAYS.points(7), 40);
        assert_eq!(DAYS.points(8), 32);
        assert_eq!(DAYS.points(30), 24);
        assert_eq!(DAYS.points(31), 4);
    }

    #[test]
    fn test_range_table_uses_fallback_outside_ranges() {
        assert_eq!(CURVE.points(8.0), 35);
        assert_eq!(CURVE.points(1.0), 10);
        assert_eq!(CURVE.points(5.0), 5);
        assert_eq!(CURVE.points(f64::NAN), 5);
    }

    #[test]
    fn test_lookup_with_non_numeric_values() {
        const LABELS: TierTable<u32, &str> =
            TierTable::at_least(&[(800, "high"), (500, "mid")], "low");
        assert_eq!(LABELS.lookup(900), "high");
        assert_eq!(LABELS.lookup(500), "mid");
        assert_eq!(LABELS.lookup(0), "low");
    }

    #[test]
    fn test_tables_hold_borrowed_payloads() {
        const FEEDBACK: TierTable<f64, &str> =
            TierTable::at_most(&[(0.5, "fast"), (2.0, "steady")], "slow");
        assert_eq!(FEEDBACK.lookup(0.25), "fast");
        assert_eq!(FEEDBACK.lookup(2.0), "steady");
        assert_eq!(FEEDBACK.lookup(9.0), "slow");
    }
}
