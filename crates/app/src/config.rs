//! Start-up options read from the environment.
//!
//! - `ZAGREB2050_PLAN`: `realistic` or `ambitious`
//! - `ZAGREB2050_YEAR`: timeline year, clamped to the scrubber range
//! - `ZAGREB2050_SPEED`: multiplier applied to every layer's speed
//! - `ZAGREB2050_SCREENSHOTS`: take the preset screenshots and exit

use bevy::prelude::*;

use network::config::{DEFAULT_YEAR, TIMELINE_FIRST_YEAR, TIMELINE_LAST_YEAR};
use network::{PlanType, TimelineSelection};
use rendering::TransitControls;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub plan: PlanType,
    pub year: u32,
    pub speed_multiplier: f64,
    pub screenshots: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan: PlanType::default(),
            year: DEFAULT_YEAR,
            speed_multiplier: 1.0,
            screenshots: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        Self::from_vars(
            var("ZAGREB2050_PLAN").as_deref(),
            var("ZAGREB2050_YEAR").as_deref(),
            var("ZAGREB2050_SPEED").as_deref(),
            var("ZAGREB2050_SCREENSHOTS").is_some(),
        )
    }

    /// Build from raw values. Unparseable values are logged and replaced by
    /// their defaults.
    pub fn from_vars(
        plan: Option<&str>,
        year: Option<&str>,
        speed: Option<&str>,
        screenshots: bool,
    ) -> Self {
        let mut config = Self {
            screenshots,
            ..Self::default()
        };
        if let Some(raw) = plan {
            match PlanType::from_name(raw) {
                Some(plan) => config.plan = plan,
                None => warn!("Unknown plan '{raw}', using {:?}", config.plan),
            }
        }
        if let Some(raw) = year {
            match raw.trim().parse::<u32>() {
                Ok(year) => config.year = year.clamp(TIMELINE_FIRST_YEAR, TIMELINE_LAST_YEAR),
                Err(err) => warn!("Invalid year '{raw}': {err}"),
            }
        }
        if let Some(raw) = speed {
            match raw.trim().parse::<f64>() {
                Ok(speed) if speed.is_finite() && speed >= 0.0 => config.speed_multiplier = speed,
                Ok(speed) => warn!("Speed multiplier must be finite and non-negative, got {speed}"),
                Err(err) => warn!("Invalid speed '{raw}': {err}"),
            }
        }
        config
    }
}

/// Apply the configured plan, year and speed once the layers exist.
pub fn apply_app_config(
    config: Res<AppConfig>,
    mut selection: ResMut<TimelineSelection>,
    controls: Res<TransitControls>,
) {
    selection.plan = config.plan;
    selection.year = config.year;
    if config.speed_multiplier != 1.0 {
        for (_, handle) in &controls.entries {
            handle.set_speed(handle.speed() * config.speed_multiplier);
        }
    }
    info!(
        "Showing {:?} plan in {} at {}x speed",
        config.plan, config.year, config.speed_multiplier
    );
}
