//! Heuristic farming advice derived from market trends and weather.

use super::trends::{PriceTrend, TrendDirection};
use super::weather::{Condition, WeatherReport};

/// Advice strings for the dashboard, market signals first. Falls back to a
/// single steady-state line when no rule fires.
pub fn generate_advice(trends: &[PriceTrend], weather: Option<&WeatherReport>) -> Vec<String> {
    let mut advice = Vec::new();

    let mut rising: Vec<&PriceTrend> = trends
        .iter()
        .filter(|t| t.direction == TrendDirection::Rising)
        .collect();
    rising.sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
    if let Some(top) = rising.first() {
        advice.push(format!(
            "{} prices are rising (+{:.1}%). Consider selling your stock now for better profits.",
            top.item, top.change_pct
        ));
    }

    let mut falling: Vec<&PriceTrend> = trends
        .iter()
        .filter(|t| t.direction == TrendDirection::Falling)
        .collect();
    falling.sort_by(|a, b| a.change_pct.total_cmp(&b.change_pct));
    if let Some(top) = falling.first() {
        advice.push(format!(
            "{} prices are falling ({:.1}%). Hold your stock if possible or consider planting less next season.",
            top.item, top.change_pct
        ));
    }

    if let Some(weather) = weather {
        if weather.condition == Condition::Rainy || weather.precipitation_pct > 50 {
            advice.push(
                "Heavy rain expected. Avoid watering crops and protect sensitive plants. Ensure proper drainage in fields."
                    .to_string(),
            );
        }
        if weather.temperature_c > 35 {
            advice.push(
                "High temperatures forecasted. Increase irrigation frequency and consider shade netting for sensitive crops."
                    .to_string(),
            );
        }
        if weather.temperature_c < 10 {
            advice.push(
                "Cold weather alert. Protect sensitive crops from frost. Consider covering plants overnight."
                    .to_string(),
            );
        }
        if weather.wind_kmh > 25 {
            advice.push(
                "Strong winds expected. Secure loose equipment and provide support for tall crops."
                    .to_string(),
            );
        }
        if weather.humidity_pct < 40 {
            advice.push(
                "Low humidity levels. Monitor soil moisture closely and increase watering frequency if needed."
                    .to_string(),
            );
        }
        if weather.condition == Condition::Sunny && weather.temperature_c < 30 {
            advice.push(
                "Ideal weather conditions for harvesting. Plan to harvest mature crops for better quality and market value."
                    .to_string(),
            );
        }
    }

    if advice.is_empty() {
        advice.push(
            "Weather and market conditions are stable. Continue regular farming activities."
                .to_string(),
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(item: &str, direction: TrendDirection, change_pct: f64) -> PriceTrend {
        PriceTrend {
            item: item.to_string(),
            direction,
            change_pct,
        }
    }

    fn calm_weather() -> WeatherReport {
        WeatherReport {
            temperature_c: 31,
            humidity_pct: 55,
            condition: Condition::Cloudy,
            wind_kmh: 10,
            precipitation_pct: 10,
        }
    }

    #[test]
    fn top_riser_and_faller_lead_the_list() {
        let trends = vec![
            trend("Onion", TrendDirection::Rising, 7.5),
            trend("Tomato", TrendDirection::Rising, 12.0),
            trend("Potato", TrendDirection::Falling, -9.0),
            trend("Okra", TrendDirection::Falling, -6.0),
            trend("Garlic", TrendDirection::Stable, 1.0),
        ];
        let advice = generate_advice(&trends, Some(&calm_weather()));
        assert!(advice[0].starts_with("Tomato prices are rising (+12.0%)"));
        assert!(advice[1].starts_with("Potato prices are falling (-9.0%)"));
    }

    #[test]
    fn rainy_condition_triggers_drainage_warning() {
        let weather = WeatherReport {
            condition: Condition::Rainy,
            ..calm_weather()
        };
        let advice = generate_advice(&[], Some(&weather));
        assert!(advice.iter().any(|a| a.starts_with("Heavy rain expected")));
    }

    #[test]
    fn mild_sun_suggests_harvesting() {
        let weather = WeatherReport {
            condition: Condition::Sunny,
            temperature_c: 26,
            ..calm_weather()
        };
        let advice = generate_advice(&[], Some(&weather));
        assert!(advice
            .iter()
            .any(|a| a.starts_with("Ideal weather conditions for harvesting")));
    }

    #[test]
    fn falls_back_to_steady_state_line() {
        let advice = generate_advice(&[], Some(&calm_weather()));
        assert_eq!(advice.len(), 1);
        assert!(advice[0].starts_with("Weather and market conditions are stable"));
    }
}
