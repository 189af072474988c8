//! Condition-code bucketing, day/night detection and UV estimation.

use serde::{Deserialize, Serialize};

/// Coarse weather category derived from a provider condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Clear,
    Clouds,
}

impl ConditionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Thunderstorm => "thunderstorm",
            ConditionCategory::Drizzle => "drizzle",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Mist => "mist",
            ConditionCategory::Clear => "clear",
            ConditionCategory::Clouds => "clouds",
        }
    }

    pub const fn all() -> &'static [ConditionCategory] {
        &[
            ConditionCategory::Thunderstorm,
            ConditionCategory::Drizzle,
            ConditionCategory::Rain,
            ConditionCategory::Snow,
            ConditionCategory::Mist,
            ConditionCategory::Clear,
            ConditionCategory::Clouds,
        ]
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a condition code. Codes outside every known group (the 400s,
/// anything below 200) fall back to `Clear`.
pub fn classify(code: i32) -> ConditionCategory {
    match code {
        200..=299 => ConditionCategory::Thunderstorm,
        300..=399 => ConditionCategory::Drizzle,
        500..=599 => ConditionCategory::Rain,
        600..=699 => ConditionCategory::Snow,
        700..=799 => ConditionCategory::Mist,
        800 => ConditionCategory::Clear,
        801.. => ConditionCategory::Clouds,
        _ => ConditionCategory::Clear,
    }
}

/// Night variants of an icon code carry an `n`, e.g. `"10n"`.
pub fn is_night(icon: &str) -> bool {
    icon.contains('n')
}

/// Rough UV index from the condition code, attenuated by cloud cover.
///
/// Full overcast only halves the base value; `cloud_pct` of 200 drives it to zero.
pub fn estimate_uv(code: i32, cloud_pct: u32) -> i32 {
    let base = match code {
        200..=399 => 2.0,
        500..=699 => 3.0,
        800 => 8.0,
        801.. => 4.0,
        _ => 5.0,
    };

    crate::format::round_half_up(base * (1.0 - f64::from(cloud_pct) / 200.0)) as i32
}
