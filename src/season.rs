use chrono::{DateTime, Datelike, FixedOffset, Utc};

// ---------------------------------------------------------------------------
// Seasonal banner (Advent of Code)
// ---------------------------------------------------------------------------

// The banner clock runs at a fixed UTC-5; deliberately not DST-aware.
const UTC_OFFSET_SECS: i32 = 5 * 3600;

// Active day-of-month window in December, inclusive.
const FIRST_DAY: u32 = 1;
const LAST_DAY: u32 = 12;

/// Banner state handed to the display layer while the window is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventBanner {
    /// Current day of the event (1-based).
    pub day: u32,
    /// Days remaining after today.
    pub days_left: u32,
    /// Event page for the current day.
    pub url: String,
}

/// Compute the banner for `now`, if the UTC-5 date falls inside the
/// December window. Pure function of the passed clock; callers evaluate it
/// per render.
pub fn advent_banner(now: DateTime<Utc>) -> Option<AdventBanner> {
    let offset = FixedOffset::west_opt(UTC_OFFSET_SECS).expect("offset in range");
    let local = now.with_timezone(&offset);

    if local.month() != 12 {
        return None;
    }
    let day = local.day();
    if !(FIRST_DAY..=LAST_DAY).contains(&day) {
        return None;
    }

    Some(AdventBanner {
        day,
        days_left: LAST_DAY - day,
        url: format!("https://adventofcode.com/{}/day/{}", local.year(), day),
    })
}
