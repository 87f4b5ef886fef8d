//! Booking time window
//!
//! Client-side checks run before a booking is submitted, and the wall-clock
//! serialization the backend expects. Checks run in a fixed order and the
//! first failure wins:
//!
//! 1. at least one service selected
//! 2. a date-time chosen
//! 3. at least one hour after "now"
//! 4. local hour within business hours, `[08:00, 20:00)`
//!
//! Every check is evaluated in the candidate's own timezone; the accepted
//! value is rendered as ISO-8601 with an explicit numeric offset (never `Z`)
//! so the server sees the wall-clock time the user picked.

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use thiserror::Error;

/// Why a proposed booking time was rejected
///
/// The display text is the message shown inline on the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingRejection {
    #[error("Please select at least one service.")]
    NoServices,

    #[error("Booking date is required.")]
    MissingDate,

    #[error("Booking must be at least 1 hour from now.")]
    TooSoon,

    #[error("Booking time must be between 8:00 AM and 8:00 PM.")]
    OutsideBusinessHours,
}

/// Booking window rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    /// Minimum time between now and the booking
    pub min_lead: Duration,
    /// First bookable hour (inclusive)
    pub opening_hour: u32,
    /// Closing hour (exclusive)
    pub closing_hour: u32,
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            min_lead: Duration::hours(1),
            opening_hour: 8,
            closing_hour: 20,
        }
    }
}

impl BookingWindow {
    /// Validate a proposed booking and serialize it on success
    pub fn check<Tz: TimeZone>(
        &self,
        candidate: Option<&DateTime<Tz>>,
        now: DateTime<Utc>,
        selected_services: usize,
    ) -> Result<String, BookingRejection> {
        if selected_services == 0 {
            return Err(BookingRejection::NoServices);
        }
        let candidate = candidate.ok_or(BookingRejection::MissingDate)?;

        if candidate.with_timezone(&Utc) - now < self.min_lead {
            return Err(BookingRejection::TooSoon);
        }

        if !self.is_business_hour(candidate.hour()) {
            return Err(BookingRejection::OutsideBusinessHours);
        }

        Ok(to_local_iso8601(candidate))
    }

    pub fn is_business_hour(&self, hour: u32) -> bool {
        hour >= self.opening_hour && hour < self.closing_hour
    }

    /// Date-time a fresh booking form starts at: one lead time from now
    pub fn initial_date<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Tz> {
        now.clone() + self.min_lead
    }

    /// Whether a picker should offer `slot`
    ///
    /// Slots outside business hours are never offered; slots on today's date
    /// must also respect the lead time.
    pub fn is_selectable_slot<Tz: TimeZone>(&self, slot: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
        let is_today = slot.date_naive() == now.date_naive();
        if is_today && slot.clone() < now.clone() + self.min_lead {
            return false;
        }
        self.is_business_hour(slot.hour())
    }
}

/// `YYYY-MM-DDTHH:MM:SS±HH:MM` in the value's own offset
///
/// A zero offset renders as `+00:00`.
pub fn to_local_iso8601<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    let offset_secs = value.offset().fix().local_minus_utc();
    format!(
        "{}{}",
        value.naive_local().format("%Y-%m-%dT%H:%M:%S"),
        format_offset(offset_secs)
    )
}

/// `±HH:MM` for an offset east of UTC in seconds (seconds are truncated)
pub fn format_offset(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let minutes = offset_secs.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a wall-clock entry ("2024-06-01 09:00", "2024-06-01T09:00:00") in `tz`
///
/// Returns `None` for malformed input or a local time skipped by a DST jump;
/// an ambiguous time resolves to the earlier instant.
pub fn parse_wall_clock<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    let input = input.trim();
    let naive = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())?;
    tz.from_local_datetime(&naive).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn at(tz: &FixedOffset, s: &str) -> DateTime<FixedOffset> {
        parse_wall_clock(s, tz).unwrap()
    }

    /// 2024-06-01 06:00 local (UTC+7)
    fn early_morning() -> DateTime<Utc> {
        at(&wib(), "2024-06-01 06:00").with_timezone(&Utc)
    }

    #[test]
    fn test_accepts_business_hour_with_lead_time() {
        let window = BookingWindow::default();
        let candidate = at(&wib(), "2024-06-01 09:00");
        assert_eq!(
            window.check(Some(&candidate), early_morning(), 1),
            Ok("2024-06-01T09:00:00+07:00".to_string())
        );
    }

    #[test]
    fn test_rejects_less_than_one_hour_ahead() {
        let window = BookingWindow::default();
        let now = at(&wib(), "2024-06-01 10:00").with_timezone(&Utc);
        let candidate = at(&wib(), "2024-06-01 10:59");
        assert_eq!(window.check(Some(&candidate), now, 2), Err(BookingRejection::TooSoon));

        let past = at(&wib(), "2024-05-31 12:00");
        assert_eq!(window.check(Some(&past), now, 2), Err(BookingRejection::TooSoon));

        // exactly one hour is enough
        let candidate = at(&wib(), "2024-06-01 11:00");
        assert!(window.check(Some(&candidate), now, 2).is_ok());
    }

    #[test]
    fn test_business_hours_are_half_open() {
        let window = BookingWindow::default();
        let now = at(&wib(), "2024-05-30 12:00").with_timezone(&Utc);
        for (time, ok) in [
            ("2024-06-01 07:59", false),
            ("2024-06-01 08:00", true),
            ("2024-06-01 19:59", true),
            ("2024-06-01 20:00", false),
        ] {
            let result = window.check(Some(&at(&wib(), time)), now, 1);
            if ok {
                assert!(result.is_ok(), "{time} should be accepted");
            } else {
                assert_eq!(result, Err(BookingRejection::OutsideBusinessHours), "{time}");
            }
        }
    }

    #[test]
    fn test_no_services_fails_first() {
        let window = BookingWindow::default();
        let candidate = at(&wib(), "2024-06-01 09:00");
        assert_eq!(
            window.check(Some(&candidate), early_morning(), 0),
            Err(BookingRejection::NoServices)
        );
        assert_eq!(
            window.check::<FixedOffset>(None, early_morning(), 0),
            Err(BookingRejection::NoServices)
        );
        assert_eq!(
            window.check::<FixedOffset>(None, early_morning(), 1),
            Err(BookingRejection::MissingDate)
        );
    }

    #[test]
    fn test_hour_is_read_in_candidate_timezone() {
        // 09:00 in UTC+7 is 02:00 UTC: accepted because the local hour counts
        let window = BookingWindow::default();
        let candidate = at(&wib(), "2024-06-01 09:00");
        let now = at(&wib(), "2024-05-31 09:00").with_timezone(&Utc);
        assert!(window.check(Some(&candidate), now, 1).is_ok());

        let utc_candidate = candidate.with_timezone(&Utc);
        assert_eq!(
            window.check(Some(&utc_candidate), now, 1),
            Err(BookingRejection::OutsideBusinessHours)
        );
    }

    #[test]
    fn test_offset_formatting() {
        assert_eq!(format_offset(7 * 3600), "+07:00");
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(-(3 * 3600 + 30 * 60)), "-03:30");
        assert_eq!(format_offset(5 * 3600 + 45 * 60), "+05:45");

        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        assert_eq!(to_local_iso8601(&utc), "2024-06-01T09:00:00+00:00");
    }

    #[test]
    fn test_slot_filter() {
        let window = BookingWindow::default();
        let now = at(&wib(), "2024-06-01 10:30");
        assert!(!window.is_selectable_slot(&at(&wib(), "2024-06-01 11:00"), &now));
        assert!(window.is_selectable_slot(&at(&wib(), "2024-06-01 11:30"), &now));
        assert!(!window.is_selectable_slot(&at(&wib(), "2024-06-01 20:00"), &now));
        assert!(window.is_selectable_slot(&at(&wib(), "2024-06-02 08:00"), &now));
        assert!(!window.is_selectable_slot(&at(&wib(), "2024-06-02 07:30"), &now));
    }

    #[test]
    fn test_initial_date_and_parsing() {
        let window = BookingWindow::default();
        let now = at(&wib(), "2024-06-01 10:30");
        assert_eq!(window.initial_date(&now), at(&wib(), "2024-06-01 11:30"));
        assert!(parse_wall_clock("2024-06-01T09:00:00", &wib()).is_some());
        assert!(parse_wall_clock("tomorrow", &wib()).is_none());
    }
}
