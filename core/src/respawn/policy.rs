//! Respawn policy parsing and next-spawn calculation

use std::fmt;

use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Weekday};

/// A boss respawn rule in parsed form.
///
/// Derived from the raw rule string on every use; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RespawnPolicy {
    /// Respawns a fixed number of hours after the kill
    FixedInterval { hours: i64 },

    /// Respawns at fixed weekly wall-clock slots
    WeeklySlots { slots: Vec<SpawnSlot> },
}

/// One weekly spawn slot (weekday + wall-clock time)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSlot {
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl SpawnSlot {
    /// Next instant matching this slot strictly after `observed_at`.
    ///
    /// Same-day slots whose time-of-day is at or before the observation are
    /// pushed a full week out, so the result is never the observation
    /// instant itself.
    fn next_after(&self, observed_at: DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
        let mut days_ahead = (self.weekday.num_days_from_monday() + 7
            - observed_at.weekday().num_days_from_monday())
            % 7;

        let at_or_past_slot = observed_at.hour() > self.hour
            || (observed_at.hour() == self.hour && observed_at.minute() >= self.minute);
        if days_ahead == 0 && at_or_past_slot {
            days_ahead = 7;
        }

        (observed_at + Duration::days(i64::from(days_ahead)))
            .with_hour(self.hour)
            .and_then(|c| c.with_minute(self.minute))
            .and_then(|c| c.with_second(0))
            .and_then(|c| c.with_nanosecond(0))
    }
}

impl RespawnPolicy {
    /// Parse a raw respawn rule.
    ///
    /// Falls back to a 24-hour fixed interval when the rule matches no known
    /// form. The fallback is logged but deliberately not an error: a typo in
    /// the boss table must not break death reporting.
    pub fn parse(rule: &str) -> Self {
        let rule = rule.trim();

        if let Some(hours) = parse_hours(rule) {
            return Self::FixedInterval { hours };
        }

        if rule.contains('/') {
            let slots: Vec<SpawnSlot> = rule.split('/').filter_map(parse_slot).collect();
            if !slots.is_empty() {
                return Self::WeeklySlots { slots };
            }
        }

        if let Some(slot) = parse_slot(rule) {
            return Self::WeeklySlots { slots: vec![slot] };
        }

        tracing::warn!(rule, "unrecognized respawn rule, defaulting to 24 hrs");
        Self::FixedInterval { hours: 24 }
    }

    /// Compute the next spawn instant after a kill observed at `observed_at`.
    ///
    /// Always strictly later than `observed_at`.
    pub fn next_occurrence(&self, observed_at: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        match self {
            Self::FixedInterval { hours } => observed_at + Duration::hours(*hours),
            Self::WeeklySlots { slots } => slots
                .iter()
                .filter_map(|slot| slot.next_after(observed_at))
                .min()
                .unwrap_or_else(|| observed_at + Duration::hours(24)),
        }
    }
}

/// Leading `"<n> hrs"` form. Trailing text after the unit is tolerated.
fn parse_hours(rule: &str) -> Option<i64> {
    let digits_end = rule.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = rule.split_at(digits_end);
    if !rest.trim_start().starts_with("hrs") {
        return None;
    }
    digits.parse().ok()
}

/// One `"<3-letter weekday> <HH:MM>"` segment. Returns `None` for anything
/// that does not fit, so malformed segments drop out of a schedule silently.
fn parse_slot(segment: &str) -> Option<SpawnSlot> {
    let mut parts = segment.split_whitespace();
    let day = parts.next()?;
    let time = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let weekday = match day {
        "Mon" => Weekday::Mon,
        "Tue" => Weekday::Tue,
        "Wed" => Weekday::Wed,
        "Thu" => Weekday::Thu,
        "Fri" => Weekday::Fri,
        "Sat" => Weekday::Sat,
        "Sun" => Weekday::Sun,
        _ => return None,
    };

    let (hour, minute) = time.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    Some(SpawnSlot {
        weekday,
        hour,
        minute,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Countdown display
// ─────────────────────────────────────────────────────────────────────────────

/// Remaining time until a spawn, as shown in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    /// The spawn instant has been reached or passed
    Spawned,

    /// Time still remaining; seconds are tracked but not displayed
    Remaining { days: i64, hours: i64, minutes: i64 },
}

impl TimeLeft {
    pub fn until(next_spawn: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> Self {
        if now >= next_spawn {
            return Self::Spawned;
        }

        let delta = next_spawn - now;
        let days = delta.num_days();
        let rem = delta - Duration::days(days);
        Self::Remaining {
            days,
            hours: rem.num_hours(),
            minutes: rem.num_minutes() % 60,
        }
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawned => write!(f, "NOW!"),
            Self::Remaining {
                days,
                hours,
                minutes,
            } => {
                if *days > 0 {
                    write!(f, "{days}d {hours:02}:{minutes:02}")
                } else {
                    write!(f, "{hours:02}:{minutes:02}")
                }
            }
        }
    }
}
