//! Natural-language date/time parsing
//!
//! Resolves phrases like "tomorrow at 5pm", "in 3 days", "on friday at
//! 10:30am" relative to a reference instant. Parsing fails unless the input
//! contains at least one recognized date or time component, so unrelated
//! text ("whenever", "not sure") re-prompts instead of silently defaulting.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

static IN_DAYS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bin\s+(\d+)\s+days?\b").expect("in-days regex"));

/// Clock time, anchored: "at H", "H:MM" or "Ham/pm". A bare number never
/// counts as a time, so "in 3 days" keeps its default hour.
static CLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(at\s+)?(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b").expect("clock regex")
});

/// Hour used when a date is given without a time of day.
const DEFAULT_HOUR: u32 = 9;

/// Try to resolve a natural-language phrase against `now`.
pub fn parse_natural(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let lowered = input.to_lowercase();
    let today = now.date_naive();

    let mut base_date = today;
    let mut date_found = false;

    if lowered.contains("tomorrow") {
        base_date = today + Duration::days(1);
        date_found = true;
    } else if lowered.contains("today") || lowered.contains("tonight") {
        date_found = true;
    } else if let Some(caps) = IN_DAYS_RE.captures(&lowered) {
        let days: i64 = caps[1].parse().ok()?;
        base_date = today + Duration::days(days);
        date_found = true;
    } else if let Some(date) = match_weekday(&lowered, today) {
        base_date = date;
        date_found = true;
    }

    let time = match_clock(&lowered);
    if !date_found && time.is_none() {
        return None;
    }

    let (hour, minute) = time.unwrap_or((DEFAULT_HOUR, 0));
    let naive = base_date.and_hms_opt(hour, minute, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Find the next occurrence (within 7 days, today included) of a weekday
/// named in the input.
fn match_weekday(lowered: &str, today: NaiveDate) -> Option<NaiveDate> {
    for offset in 0..7 {
        let candidate = today + Duration::days(offset);
        if lowered.contains(weekday_name(candidate.weekday())) {
            return Some(candidate);
        }
    }
    None
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Extract a clock time. "noon" and "midnight" are understood; a numeric
/// match requires an "at" prefix, minutes, or an am/pm suffix.
fn match_clock(lowered: &str) -> Option<(u32, u32)> {
    if lowered.contains("midnight") {
        return Some((0, 0));
    }
    if lowered.contains("noon") {
        return Some((12, 0));
    }

    for caps in CLOCK_RE.captures_iter(lowered) {
        let anchored =
            caps.get(1).is_some() || caps.get(3).is_some() || caps.get(4).is_some();
        if !anchored {
            continue;
        }

        let mut hour: u32 = caps[2].parse().ok()?;
        let minute: u32 = caps.get(3).map(|m| m.as_str().parse().unwrap_or(0)).unwrap_or(0);
        let meridiem = caps.get(4).map(|m| m.as_str());

        match meridiem {
            Some("pm") if hour < 12 => hour += 12,
            Some("am") if hour == 12 => hour = 0,
            _ => {}
        }

        if hour <= 23 && minute <= 59 {
            return Some((hour, minute));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> DateTime<Utc> {
        // A Wednesday.
        Utc.with_ymd_and_hms(2026, 3, 4, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_tomorrow_at_5pm() {
        let parsed = parse_natural("tomorrow at 5pm", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 5, 17, 0, 0).unwrap());
    }

    #[test]
    fn test_tomorrow_at_noon() {
        let parsed = parse_natural("tomorrow at noon", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_in_three_days_defaults_to_morning() {
        let parsed = parse_natural("in 3 days", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_weekday_resolves_within_week() {
        // Friday after Wednesday 2026-03-04 is 2026-03-06.
        let parsed = parse_natural("on friday at 10:30am", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 6, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_same_weekday_means_today() {
        let parsed = parse_natural("wednesday", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_bare_clock_time_applies_today() {
        let parsed = parse_natural("at 8pm", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 4, 20, 0, 0).unwrap());
    }

    #[test]
    fn test_twelve_am_is_midnight_hour() {
        let parsed = parse_natural("tomorrow at 12am", reference()).unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_unrelated_text_fails() {
        assert!(parse_natural("whenever you like", reference()).is_none());
        assert!(parse_natural("maybe later", reference()).is_none());
        assert!(parse_natural("next month sometime", reference()).is_none());
    }

    #[test]
    fn test_out_of_range_clock_is_ignored() {
        // "at 25" is not a valid hour; no date component either.
        assert!(parse_natural("at 25", reference()).is_none());
    }
}
