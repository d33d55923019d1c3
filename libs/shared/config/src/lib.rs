use std::env;

use chrono::Weekday;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_port: u16,
    pub week_start: Weekday,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_port = env::var("PRACTICE_API_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| {
                warn!("PRACTICE_API_PORT not set, defaulting to 3000");
                3000
            });

        let week_start = env::var("PRACTICE_WEEK_START")
            .map(|value| parse_week_start(&value))
            .unwrap_or(Weekday::Sun);

        let seed_demo_data = env::var("PRACTICE_SEED_DEMO_DATA")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or_else(|_| {
                warn!("PRACTICE_SEED_DEMO_DATA not set, seeding demo data by default");
                true
            });

        Self {
            bind_port,
            week_start,
            seed_demo_data,
        }
    }
}

fn parse_week_start(value: &str) -> Weekday {
    match value.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Weekday::Mon,
        "sunday" | "sun" => Weekday::Sun,
        other => {
            warn!("Unrecognized PRACTICE_WEEK_START '{}', defaulting to Sunday", other);
            Weekday::Sun
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_parsing_accepts_both_conventions() {
        assert_eq!(parse_week_start("monday"), Weekday::Mon);
        assert_eq!(parse_week_start("Sun"), Weekday::Sun);
        assert_eq!(parse_week_start("wednesday"), Weekday::Sun);
    }
}
