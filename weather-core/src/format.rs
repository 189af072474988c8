//! Small display helpers shared by the report builder.

use chrono::{DateTime, TimeZone, Utc};

/// Rounds halves toward positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn mps_to_kmh(speed_mps: f64) -> i64 {
    round_half_up(speed_mps * 3.6)
}

/// Converts epoch seconds into the given zone.
pub fn local_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    DateTime::<Utc>::from_timestamp(timestamp, 0).map(|dt| dt.with_timezone(tz))
}

/// 24-hour `HH:MM`.
pub fn clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M").to_string()
}

/// Month and day, e.g. `Oct 19`.
pub fn day_label<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%b %-d").to_string()
}

/// Emoji for an icon code; unknown codes get a thermometer.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "02n" | "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" => "🌧️",
        "10d" => "🌦️",
        "10n" => "🌧️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => "🌡️",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(24.5), 25);
        assert_eq!(round_half_up(24.49), 24);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn wind_is_converted_to_kmh() {
        assert_eq!(mps_to_kmh(0.0), 0);
        assert_eq!(mps_to_kmh(5.0), 18);
        assert_eq!(mps_to_kmh(3.1), 11);
    }

    #[test]
    fn clock_and_day_use_given_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        // 2026-10-19T00:30:00Z
        let dt = local_time(1_792_369_800, &ist).unwrap();
        assert_eq!(clock(&dt), "06:00");
        assert_eq!(day_label(&dt), "Oct 19");
    }

    #[test]
    fn icon_glyph_falls_back_to_thermometer() {
        assert_eq!(icon_glyph("01d"), "☀️");
        assert_eq!(icon_glyph("01n"), "🌙");
        assert_eq!(icon_glyph("zz"), "🌡️");
    }
}
