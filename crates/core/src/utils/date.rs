//! Date formatting and calendar arithmetic on wall-clock time.
//!
//! Everything works on [NaiveDateTime] in the device's local time. Functions whose
//! answer depends on the current moment take `now` explicitly, [now] supplies it.

use std::fmt::Write;

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
};

const MS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// 15/01/2024
    #[default]
    DateShort,
    /// 15 Jan 2024
    DateMedium,
    /// 15 January 2024
    DateLong,
    /// 01/15/2024
    DateUs,
    /// 2024-01-15
    DateIso,
    /// 02:30 PM
    Time12h,
    /// 14:30
    Time24h,
    /// 14:30:05
    TimeWithSeconds,
    /// 15/01/2024 14:30
    DatetimeShort,
    /// 15 Jan 2024, 14:30
    DatetimeMedium,
    /// 15 January 2024, 14:30:05
    DatetimeLong,
    /// 15/01/2024 02:30 PM
    Datetime12h,
    /// January 2024
    MonthYear,
    /// 15 Jan
    DayMonth,
    /// Monday
    Weekday,
    /// Mon
    WeekdayShort,
}

impl DateFormat {
    /// The strftime pattern behind this format.
    pub const fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DateShort => "%d/%m/%Y",
            DateFormat::DateMedium => "%d %b %Y",
            DateFormat::DateLong => "%d %B %Y",
            DateFormat::DateUs => "%m/%d/%Y",
            DateFormat::DateIso => "%Y-%m-%d",
            DateFormat::Time12h => "%I:%M %p",
            DateFormat::Time24h => "%H:%M",
            DateFormat::TimeWithSeconds => "%H:%M:%S",
            DateFormat::DatetimeShort => "%d/%m/%Y %H:%M",
            DateFormat::DatetimeMedium => "%d %b %Y, %H:%M",
            DateFormat::DatetimeLong => "%d %B %Y, %H:%M:%S",
            DateFormat::Datetime12h => "%d/%m/%Y %I:%M %p",
            DateFormat::MonthYear => "%B %Y",
            DateFormat::DayMonth => "%d %b",
            DateFormat::Weekday => "%A",
            DateFormat::WeekdayShort => "%a",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Length in milliseconds for the units with a fixed length.
    const fn fixed_millis(&self) -> Option<i64> {
        match self {
            TimeUnit::Milliseconds => Some(1),
            TimeUnit::Seconds => Some(1_000),
            TimeUnit::Minutes => Some(60_000),
            TimeUnit::Hours => Some(3_600_000),
            TimeUnit::Days => Some(MS_PER_DAY),
            TimeUnit::Weeks => Some(7 * MS_PER_DAY),
            TimeUnit::Months | TimeUnit::Years => None,
        }
    }
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_date(date: &NaiveDateTime, format: DateFormat) -> String {
    // every built-in pattern is valid for a naive date time
    format_with(date, format.pattern()).unwrap_or_default()
}

/// Formats with a custom strftime pattern. None if the pattern is malformed or
/// asks for something a naive date time does not have, like `%z`.
pub fn format_with(date: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// A rough, human readable length: "a few seconds", "5 minutes", "a month", ...
/// The sign of the duration is ignored.
pub fn humanize(duration: TimeDelta) -> String {
    let ms = duration.num_milliseconds().unsigned_abs() as f64;
    let days = ms / MS_PER_DAY as f64;

    let seconds = (ms / 1_000.0).round();
    let minutes = (ms / 60_000.0).round();
    let hours = (ms / 3_600_000.0).round();
    let whole_days = days.round();
    // 400 years hold 146097 days
    let months = (days * 4_800.0 / 146_097.0).round();
    let years = (days * 400.0 / 146_097.0).round();

    if seconds < 45.0 {
        "a few seconds".to_owned()
    } else if minutes <= 1.0 {
        "a minute".to_owned()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_owned()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if whole_days <= 1.0 {
        "a day".to_owned()
    } else if whole_days < 26.0 {
        format!("{whole_days} days")
    } else if months <= 1.0 {
        "a month".to_owned()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_owned()
    } else {
        format!("{years} years")
    }
}

/// "2 hours ago", "in 3 days".
pub fn format_relative(date: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let delta = *date - *now;
    let text = humanize(delta);
    if delta > TimeDelta::zero() {
        format!("in {text}")
    } else {
        format!("{text} ago")
    }
}

pub fn format_duration(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    humanize(*end - *start)
}

/// "Today at 2:30 PM", "Last Monday at 9:00 AM", falling back to `MM/DD/YYYY`
/// outside of a week either side.
pub fn format_calendar(date: &NaiveDateTime, now: &NaiveDateTime) -> String {
    let time = format_with(date, "%-I:%M %p").unwrap_or_default();
    let weekday = format_date(date, DateFormat::Weekday);
    let days = (*date - start_of_day(now)).num_milliseconds() as f64 / MS_PER_DAY as f64;

    if days < -6.0 {
        format_date(date, DateFormat::DateUs)
    } else if days < -1.0 {
        format!("Last {weekday} at {time}")
    } else if days < 0.0 {
        format!("Yesterday at {time}")
    } else if days < 1.0 {
        format!("Today at {time}")
    } else if days < 2.0 {
        format!("Tomorrow at {time}")
    } else if days < 7.0 {
        format!("{weekday} at {time}")
    } else {
        format_date(date, DateFormat::DateUs)
    }
}

/// - Today: "Today, 02:30 PM"
/// - Yesterday: "Yesterday, 02:30 PM"
/// - This year: "15 Jan, 02:30 PM"
/// - Other years: "15 Jan 2023, 02:30 PM"
pub fn format_smart(date: &NaiveDateTime, now: &NaiveDateTime) -> String {
    if is_today(date, now) {
        format!("Today, {}", format_date(date, DateFormat::Time12h))
    } else if is_yesterday(date, now) {
        format!("Yesterday, {}", format_date(date, DateFormat::Time12h))
    } else if date.year() == now.year() {
        format_with(date, "%d %b, %I:%M %p").unwrap_or_default()
    } else {
        format_with(date, "%d %b %Y, %I:%M %p").unwrap_or_default()
    }
}

pub fn start_of_day(date: &NaiveDateTime) -> NaiveDateTime {
    date.date().and_time(NaiveTime::MIN)
}

/// The last millisecond of the day.
pub fn end_of_day(date: &NaiveDateTime) -> NaiveDateTime {
    end_of(date.date())
}

/// Weeks start on Sunday.
pub fn start_of_week(date: &NaiveDateTime) -> NaiveDateTime {
    let offset = Days::new(date.weekday().num_days_from_sunday().into());
    date.date()
        .checked_sub_days(offset)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}

pub fn end_of_week(date: &NaiveDateTime) -> NaiveDateTime {
    let saturday = start_of_week(date)
        .date()
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);
    end_of(saturday)
}

pub fn start_of_month(date: &NaiveDateTime) -> NaiveDateTime {
    first_of_month(date.date()).and_time(NaiveTime::MIN)
}

pub fn end_of_month(date: &NaiveDateTime) -> NaiveDateTime {
    let last = first_of_month(date.date())
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    end_of(last)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new((date.day() - 1).into())
}

fn end_of(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + TimeDelta::milliseconds(MS_PER_DAY - 1)
}

/// Moves `date` by `amount` units. Month and year steps keep the day of month,
/// clamping to the last day when the target month is shorter (Jan 31 + 1 month
/// is Feb 29 in a leap year). None when the result is out of range.
pub fn add_time(date: &NaiveDateTime, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Months => shift_months(date, amount),
        TimeUnit::Years => shift_months(date, amount.checked_mul(12)?),
        fixed => {
            let millis = amount.checked_mul(fixed.fixed_millis()?)?;
            date.checked_add_signed(TimeDelta::try_milliseconds(millis)?)
        }
    }
}

pub fn subtract_time(date: &NaiveDateTime, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    add_time(date, amount.checked_neg()?, unit)
}

fn shift_months(date: &NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let step = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

/// `a - b` in whole `unit`s, truncated toward zero.
pub fn diff(a: &NaiveDateTime, b: &NaiveDateTime, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Months => month_diff(a, b),
        TimeUnit::Years => month_diff(a, b) / 12,
        fixed => {
            let unit_ms = fixed.fixed_millis().unwrap_or(1);
            (*a - *b).num_milliseconds() / unit_ms
        }
    }
}

fn month_diff(a: &NaiveDateTime, b: &NaiveDateTime) -> i64 {
    let mut months =
        i64::from(a.year() - b.year()) * 12 + i64::from(a.month()) - i64::from(b.month());

    // the calendar distance overshoots when b's day/time has not come round yet
    match shift_months(b, months) {
        Some(anchor) if months > 0 && anchor > *a => months -= 1,
        Some(anchor) if months < 0 && anchor < *a => months += 1,
        _ => {}
    }
    months
}

pub fn is_before(date: &NaiveDateTime, other: &NaiveDateTime) -> bool {
    date < other
}

pub fn is_after(date: &NaiveDateTime, other: &NaiveDateTime) -> bool {
    date > other
}

/// Exclusive on both ends.
pub fn is_between(date: &NaiveDateTime, start: &NaiveDateTime, end: &NaiveDateTime) -> bool {
    start < date && date < end
}

pub fn is_today(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    date.date() == now.date()
}

pub fn is_yesterday(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    now.date().pred_opt() == Some(date.date())
}

pub fn is_tomorrow(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    now.date().succ_opt() == Some(date.date())
}

pub fn is_past(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    date < now
}

pub fn is_future(date: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    date > now
}

/// Completed years between `birth_date` and `today`.
pub fn get_age(birth_date: &NaiveDateTime, today: &NaiveDateTime) -> i64 {
    diff(today, birth_date, TimeUnit::Years)
}

/// Parses `input` with a strftime pattern. Patterns without a time part parse
/// to midnight.
pub fn parse_date(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, pattern)
        .or_else(|_| {
            NaiveDate::parse_from_str(input, pattern).map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok()
}

const ISO_PATTERNS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d",
];

/// Parses the ISO 8601 shapes the APIs send. Timestamps with an offset are
/// converted to local time.
pub fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Local).naive_local());
    }
    ISO_PATTERNS
        .iter()
        .find_map(|pattern| parse_date(input, pattern))
}

pub fn is_valid_date(input: &str) -> bool {
    parse_iso(input).is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_builtin_formats() {
        let date = at(2024, 1, 15, 14, 30, 5);
        let cases = [
            (DateFormat::DateShort, "15/01/2024"),
            (DateFormat::DateMedium, "15 Jan 2024"),
            (DateFormat::DateLong, "15 January 2024"),
            (DateFormat::DateUs, "01/15/2024"),
            (DateFormat::DateIso, "2024-01-15"),
            (DateFormat::Time12h, "02:30 PM"),
            (DateFormat::Time24h, "14:30"),
            (DateFormat::TimeWithSeconds, "14:30:05"),
            (DateFormat::DatetimeShort, "15/01/2024 14:30"),
            (DateFormat::DatetimeMedium, "15 Jan 2024, 14:30"),
            (DateFormat::DatetimeLong, "15 January 2024, 14:30:05"),
            (DateFormat::Datetime12h, "15/01/2024 02:30 PM"),
            (DateFormat::MonthYear, "January 2024"),
            (DateFormat::DayMonth, "15 Jan"),
            (DateFormat::Weekday, "Monday"),
            (DateFormat::WeekdayShort, "Mon"),
        ];
        for (format, expected) in cases {
            assert_eq!(format_date(&date, format), expected, "{format:?}");
        }
    }

    #[test]
    fn test_format_with_bad_pattern() {
        let date = at(2024, 1, 15, 14, 30, 5);
        assert_eq!(format_with(&date, "%Y").as_deref(), Some("2024"));
        assert_eq!(format_with(&date, "%z"), None);
    }

    #[test]
    fn test_humanize_thresholds() {
        let cases = [
            (TimeDelta::seconds(10), "a few seconds"),
            (TimeDelta::seconds(50), "a minute"),
            (TimeDelta::minutes(5), "5 minutes"),
            (TimeDelta::minutes(50), "an hour"),
            (TimeDelta::hours(3), "3 hours"),
            (TimeDelta::hours(23), "a day"),
            (TimeDelta::days(3), "3 days"),
            (TimeDelta::days(30), "a month"),
            (TimeDelta::days(100), "3 months"),
            (TimeDelta::days(400), "a year"),
            (TimeDelta::days(800), "2 years"),
            (TimeDelta::days(-3), "3 days"),
        ];
        for (delta, expected) in cases {
            assert_eq!(humanize(delta), expected, "{delta:?}");
        }
    }

    #[test]
    fn test_relative() {
        let now = at(2024, 1, 15, 12, 0, 0);
        assert_eq!(format_relative(&at(2024, 1, 15, 10, 0, 0), &now), "2 hours ago");
        assert_eq!(format_relative(&at(2024, 1, 18, 12, 0, 0), &now), "in 3 days");
        assert_eq!(format_relative(&now, &now), "a few seconds ago");
        assert_eq!(
            format_duration(&at(2024, 1, 15, 12, 0, 0), &at(2024, 1, 15, 12, 20, 0)),
            "20 minutes"
        );
    }

    #[test]
    fn test_calendar() {
        // a Monday
        let now = at(2024, 1, 15, 12, 0, 0);
        let cases = [
            (at(2024, 1, 15, 14, 30, 0), "Today at 2:30 PM"),
            (at(2024, 1, 16, 9, 5, 0), "Tomorrow at 9:05 AM"),
            (at(2024, 1, 14, 23, 0, 0), "Yesterday at 11:00 PM"),
            (at(2024, 1, 11, 8, 0, 0), "Last Thursday at 8:00 AM"),
            (at(2024, 1, 19, 8, 0, 0), "Friday at 8:00 AM"),
            (at(2024, 1, 1, 8, 0, 0), "01/01/2024"),
            (at(2024, 2, 1, 8, 0, 0), "02/01/2024"),
        ];
        for (date, expected) in cases {
            assert_eq!(format_calendar(&date, &now), expected);
        }
    }

    #[test]
    fn test_smart() {
        let now = at(2024, 6, 15, 12, 0, 0);
        assert_eq!(format_smart(&at(2024, 6, 15, 14, 30, 0), &now), "Today, 02:30 PM");
        assert_eq!(format_smart(&at(2024, 6, 14, 9, 0, 0), &now), "Yesterday, 09:00 AM");
        assert_eq!(format_smart(&at(2024, 1, 15, 14, 30, 0), &now), "15 Jan, 02:30 PM");
        assert_eq!(
            format_smart(&at(2023, 1, 15, 14, 30, 0), &now),
            "15 Jan 2023, 02:30 PM"
        );
    }

    #[test]
    fn test_boundaries() {
        // a Wednesday
        let date = at(2024, 2, 14, 15, 45, 10);
        assert_eq!(start_of_day(&date), at(2024, 2, 14, 0, 0, 0));
        assert_eq!(
            end_of_day(&date),
            at(2024, 2, 14, 23, 59, 59) + TimeDelta::milliseconds(999)
        );
        assert_eq!(start_of_week(&date), at(2024, 2, 11, 0, 0, 0));
        assert_eq!(end_of_week(&date).date(), at(2024, 2, 17, 0, 0, 0).date());
        assert_eq!(start_of_month(&date), at(2024, 2, 1, 0, 0, 0));
        assert_eq!(end_of_month(&date).date(), at(2024, 2, 29, 0, 0, 0).date());
        assert_eq!(
            end_of_month(&at(2023, 12, 3, 0, 0, 0)).date(),
            at(2023, 12, 31, 0, 0, 0).date()
        );
    }

    #[test]
    fn test_add_and_subtract() {
        let date = at(2024, 1, 31, 10, 0, 0);
        assert_eq!(add_time(&date, 1, TimeUnit::Months), Some(at(2024, 2, 29, 10, 0, 0)));
        assert_eq!(add_time(&date, 1, TimeUnit::Years), Some(at(2025, 1, 31, 10, 0, 0)));
        assert_eq!(add_time(&date, 2, TimeUnit::Weeks), Some(at(2024, 2, 14, 10, 0, 0)));
        assert_eq!(add_time(&date, 90, TimeUnit::Minutes), Some(at(2024, 1, 31, 11, 30, 0)));
        assert_eq!(subtract_time(&date, 2, TimeUnit::Months), Some(at(2023, 11, 30, 10, 0, 0)));
        assert_eq!(subtract_time(&date, 1, TimeUnit::Days), Some(at(2024, 1, 30, 10, 0, 0)));
        assert_eq!(add_time(&date, i64::MAX, TimeUnit::Days), None);
        assert_eq!(subtract_time(&date, i64::MIN, TimeUnit::Seconds), None);
    }

    #[test]
    fn test_diff() {
        let a = at(2024, 3, 1, 0, 0, 0);
        let b = at(2024, 1, 31, 0, 0, 0);
        assert_eq!(diff(&a, &b, TimeUnit::Days), 30);
        assert_eq!(diff(&b, &a, TimeUnit::Days), -30);
        assert_eq!(diff(&a, &b, TimeUnit::Weeks), 4);
        assert_eq!(diff(&a, &b, TimeUnit::Months), 1);
        assert_eq!(diff(&b, &a, TimeUnit::Months), -1);
        assert_eq!(diff(&at(2024, 1, 15, 0, 0, 0), &at(2024, 1, 15, 23, 0, 0), TimeUnit::Days), 0);
        assert_eq!(diff(&at(2025, 3, 1, 0, 0, 0), &at(2024, 3, 1, 0, 0, 0), TimeUnit::Years), 1);
    }

    #[test]
    fn test_age() {
        let birth = at(1990, 6, 15, 0, 0, 0);
        assert_eq!(get_age(&birth, &at(2024, 6, 14, 0, 0, 0)), 33);
        assert_eq!(get_age(&birth, &at(2024, 6, 15, 0, 0, 0)), 34);
    }

    #[test]
    fn test_comparisons() {
        let now = at(2024, 1, 15, 12, 0, 0);
        let earlier = at(2024, 1, 14, 12, 0, 0);
        let later = at(2024, 1, 16, 12, 0, 0);

        assert!(is_before(&earlier, &now));
        assert!(is_after(&later, &now));
        assert!(is_between(&now, &earlier, &later));
        assert!(!is_between(&earlier, &earlier, &later));
        assert!(is_today(&at(2024, 1, 15, 0, 0, 0), &now));
        assert!(is_yesterday(&earlier, &now));
        assert!(is_tomorrow(&later, &now));
        assert!(is_past(&earlier, &now));
        assert!(is_future(&later, &now));
        assert!(!is_past(&now, &now));
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            parse_date("2024-01-15", DateFormat::DateIso.pattern()),
            Some(at(2024, 1, 15, 0, 0, 0))
        );
        assert_eq!(
            parse_date("15/01/2024 14:30", DateFormat::DatetimeShort.pattern()),
            Some(at(2024, 1, 15, 14, 30, 0))
        );
        assert_eq!(parse_date("2024-02-30", DateFormat::DateIso.pattern()), None);
        assert_eq!(parse_date("yesterday", DateFormat::DateIso.pattern()), None);
    }

    #[test]
    fn test_valid_date() {
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("2024-01-15T14:30:00"));
        assert!(is_valid_date("2024-01-15 14:30:00.250"));
        assert!(is_valid_date("2024-01-15T14:30:00Z"));
        assert!(is_valid_date("2024-01-15T14:30:00+07:00"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("not a date"));
        assert!(!is_valid_date(""));
    }
}
