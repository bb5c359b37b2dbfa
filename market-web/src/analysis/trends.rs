//! Price trend classification over the recent history window.

use crate::utils::constants::TREND_THRESHOLD_PCT;

/// Direction bucket for a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "Rising",
            TrendDirection::Falling => "Falling",
            TrendDirection::Stable => "Stable",
        }
    }
}

/// Classified change for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTrend {
    pub item: String,
    pub direction: TrendDirection,
    pub change_pct: f64,
}

/// Bucket a percentage change at the ± threshold. The threshold itself counts
/// as stable.
pub fn classify_change(change_pct: f64) -> TrendDirection {
    if change_pct > TREND_THRESHOLD_PCT {
        TrendDirection::Rising
    } else if change_pct < -TREND_THRESHOLD_PCT {
        TrendDirection::Falling
    } else {
        TrendDirection::Stable
    }
}

/// Change from the oldest to the newest observation, in percent.
///
/// `newest_first` is the fetch order (date descending). Returns `None` with
/// fewer than two observations or a zero oldest price.
pub fn percent_change(newest_first: &[f64]) -> Option<f64> {
    if newest_first.len() < 2 {
        return None;
    }
    let latest = *newest_first.first()?;
    let oldest = *newest_first.last()?;
    if oldest == 0.0 {
        return None;
    }
    Some((latest - oldest) / oldest * 100.0)
}

/// Trend for one item's newest-first price series.
pub fn trend_for(item: &str, newest_first: &[f64]) -> Option<PriceTrend> {
    let change_pct = percent_change(newest_first)?;
    Some(PriceTrend {
        item: item.to_string(),
        direction: classify_change(change_pct),
        change_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_percent_drop_is_falling() {
        // Series 100 -> 94 oldest-to-newest; fetched newest-first.
        let change = percent_change(&[94.0, 100.0]).unwrap();
        assert!((change - -6.0).abs() < 1e-9);
        assert_eq!(classify_change(change), TrendDirection::Falling);
    }

    #[test]
    fn six_percent_gain_is_rising() {
        let change = percent_change(&[106.0, 100.0]).unwrap();
        assert!((change - 6.0).abs() < 1e-9);
        assert_eq!(classify_change(change), TrendDirection::Rising);
    }

    #[test]
    fn two_percent_gain_is_stable() {
        let change = percent_change(&[102.0, 100.0]).unwrap();
        assert!((change - 2.0).abs() < 1e-9);
        assert_eq!(classify_change(change), TrendDirection::Stable);
    }

    #[test]
    fn threshold_itself_is_stable() {
        assert_eq!(classify_change(5.0), TrendDirection::Stable);
        assert_eq!(classify_change(-5.0), TrendDirection::Stable);
        assert_eq!(classify_change(5.01), TrendDirection::Rising);
    }

    #[test]
    fn degenerate_series_yield_nothing() {
        assert_eq!(percent_change(&[100.0]), None);
        assert_eq!(percent_change(&[]), None);
        assert_eq!(percent_change(&[50.0, 0.0]), None);
        assert!(trend_for("Onion", &[100.0]).is_none());
    }

    #[test]
    fn trend_for_carries_item_name() {
        let trend = trend_for("Tomato", &[112.0, 100.0]).unwrap();
        assert_eq!(trend.item, "Tomato");
        assert_eq!(trend.direction, TrendDirection::Rising);
    }
}
