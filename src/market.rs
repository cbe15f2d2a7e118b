//! Market identity and slug-derived cycle metadata (spec §3, §6).

use chrono::Datelike;

/// A market's identity. Two markets are equal iff `condition_id` matches
/// (spec §3) — `slug` can legitimately differ in casing/formatting between
/// feeds while still referring to the same on-chain condition.
#[derive(Debug, Clone)]
pub struct Market {
    pub slug: String,
    pub condition_id: String,
    pub yes_asset_id: String,
    pub no_asset_id: String,
    pub cycle_start_unix: i64,
}

impl PartialEq for Market {
    fn eq(&self, other: &Self) -> bool {
        self.condition_id == other.condition_id
    }
}
impl Eq for Market {}

/// Recognized cycle durations, in seconds.
pub const CYCLE_15M: i64 = 15 * 60;
pub const CYCLE_1H: i64 = 60 * 60;
pub const CYCLE_4H: i64 = 4 * 60 * 60;
const DEFAULT_CYCLE: i64 = CYCLE_15M;

/// Parse a market slug into its cycle duration in seconds (spec §6).
///
/// Two grammars are recognized:
/// - `{symbol}-{kind}-{timeframe}-{unixseconds}`, where `{timeframe}` is one
///   of `15m`, `1h`, `4h`.
/// - `{coin}-up-or-down-{month}-{day}-{hour}{am|pm}-et`, which always
///   implies a 1 hour cycle.
///
/// Falls back to the 15 minute default when neither grammar matches.
pub fn cycle_duration_from_slug(slug: &str) -> i64 {
    let lower = slug.to_ascii_lowercase();
    let parts: Vec<&str> = lower.split('-').collect();

    if parts.len() >= 3 && parts.contains(&"up") && parts.contains(&"or") && parts.contains(&"down") {
        return CYCLE_1H;
    }

    for part in &parts {
        match *part {
            "15m" => return CYCLE_15M,
            "1h" => return CYCLE_1H,
            "4h" => return CYCLE_4H,
            _ => {}
        }
    }

    DEFAULT_CYCLE
}

/// Month-name heuristic used by the ET up-or-down grammar
/// (`{coin}-up-or-down-{month}-{day}-{hour}{am|pm}-et`). Returns the
/// 1-indexed month number, or `None` if `token` isn't a recognized month
/// abbreviation/name.
pub fn month_from_token(token: &str) -> Option<u32> {
    let t = token.to_ascii_lowercase();
    let names = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    names.iter().position(|&n| t.starts_with(n)).map(|i| i as u32 + 1)
}

/// Best-effort parse of the ET up-or-down grammar's day-of-cycle fields
/// into a `(month, day, hour24)` tuple, given the slug's already-lowercased
/// dash-separated parts. Returns `None` if the expected fields aren't
/// present; callers fall back to `cycle_start_unix` supplied out of band.
pub fn parse_et_up_or_down_time(slug: &str, reference_year: i32) -> Option<chrono::NaiveDateTime> {
    let lower = slug.to_ascii_lowercase();
    let parts: Vec<&str> = lower.split('-').collect();
    let down_idx = parts.iter().position(|&p| p == "down")?;
    let month = month_from_token(parts.get(down_idx + 1)?)?;
    let day: u32 = parts.get(down_idx + 2)?.parse().ok()?;
    let hour_token = parts.get(down_idx + 3)?;

    let (hour_digits, is_pm) = if let Some(stripped) = hour_token.strip_suffix("pm") {
        (stripped, true)
    } else if let Some(stripped) = hour_token.strip_suffix("am") {
        (stripped, false)
    } else {
        return None;
    };
    let mut hour: u32 = hour_digits.parse().ok()?;
    if is_pm && hour != 12 {
        hour += 12;
    }
    if !is_pm && hour == 12 {
        hour = 0;
    }

    let date = chrono::NaiveDate::from_ymd_opt(reference_year, month, day)?;
    date.and_hms_opt(hour, 0, 0)
}

impl Market {
    pub fn cycle_duration_seconds(&self) -> i64 {
        cycle_duration_from_slug(&self.slug)
    }

    pub fn cycle_end_unix(&self) -> i64 {
        self.cycle_start_unix + self.cycle_duration_seconds()
    }
}

/// Convenience: the reference year to use when the ET grammar omits one,
/// taken from a supplied "now" instant rather than the system clock so
/// callers stay deterministic in tests.
pub fn reference_year_from(now_utc: chrono::DateTime<chrono::Utc>) -> i32 {
    now_utc.year()
}
