//! Demo series used until a real portfolio feed is wired in.

use rand::Rng;

pub const DEMO_DAYS: usize = 90;

const START_VALUE: f64 = 180_000.0;
const MAX_DAILY_STEP: f64 = 7_500.0;
const FLOOR: f64 = 140_000.0;
const CEILING: f64 = 220_000.0;

/// Random walk of daily values, oldest first, kept within a fixed band.
pub fn generate_daily_values<R: Rng + ?Sized>(days: usize, rng: &mut R) -> Vec<f64> {
    let mut value = START_VALUE;
    (0..days)
        .map(|_| {
            let step = rng.gen_range(-MAX_DAILY_STEP..MAX_DAILY_STEP);
            value = (value + step).clamp(FLOOR, CEILING);
            value
        })
        .collect()
}

pub fn demo_values() -> Vec<f64> {
    generate_daily_values(DEMO_DAYS, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn walk_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate_daily_values(DEMO_DAYS, &mut rng);
        assert_eq!(values.len(), DEMO_DAYS);
        assert!(values.iter().all(|v| (FLOOR..=CEILING).contains(v)));
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= MAX_DAILY_STEP);
        }
    }

    #[test]
    fn seeded_walks_repeat() {
        let a = generate_daily_values(10, &mut StdRng::seed_from_u64(42));
        let b = generate_daily_values(10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
