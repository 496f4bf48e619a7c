use sawari_booking::SeatPlan;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub seat_plan: SeatPlan,
    pub demo: DemoConfig,
}

/// Bounds of the price slider presented by the search view.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub price_floor: u32,
    pub price_ceiling: u32,
}

/// Route the scripted session searches for.
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SAWARI__DEMO__FROM=Jagdalpur`
            .add_source(config::Environment::with_prefix("SAWARI").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
