//! Synthetic weather generation.
//!
//! The app has no real weather feed; a report is sampled uniformly per visit
//! so the advice view always has something to reason about.

use rand::Rng;

/// Sky condition attached to a sampled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Clear,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Clear => "Clear",
        }
    }
}

/// One synthetic weather snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature_c: i32,
    pub humidity_pct: i32,
    pub condition: Condition,
    pub wind_kmh: i32,
    pub precipitation_pct: i32,
}

impl WeatherReport {
    /// Sample a report from the fixed uniform ranges.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            temperature_c: rng.gen_range(20..35),
            humidity_pct: rng.gen_range(40..80),
            condition: Condition::ALL[rng.gen_range(0..Condition::ALL.len())],
            wind_kmh: rng.gen_range(5..25),
            precipitation_pct: rng.gen_range(0..30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let report = WeatherReport::sample(&mut rng);
            assert!((20..35).contains(&report.temperature_c));
            assert!((40..80).contains(&report.humidity_pct));
            assert!((5..25).contains(&report.wind_kmh));
            assert!((0..30).contains(&report.precipitation_pct));
        }
    }

    #[test]
    fn every_condition_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let report = WeatherReport::sample(&mut rng);
            let index = Condition::ALL
                .iter()
                .position(|c| *c == report.condition)
                .unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
