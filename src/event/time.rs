use lazy_static::lazy_static;
use regex::Regex;

const MAX_HOUR: i64 = 23;
const MAX_MINUTE: i64 = 59;
const DEFAULT_PART: &str = "00";

lazy_static! {
    static ref LEADING_INTEGER: Regex =
        Regex::new(r"^\s*([+-]?\d+)").expect("Failed to create leading integer regex");
}

/// Replaces the hour of an "HH:MM" value, keeping its minute as typed
pub fn set_hour(current: &str, hour_input: &str) -> String {
    let hour = parse_leading_integer(hour_input).clamp(0, MAX_HOUR);
    let (_, minute) = split_time(current);

    format!("{:02}:{}", hour, or_default_part(minute))
}

/// Replaces the minute of an "HH:MM" value, keeping its hour as typed
pub fn set_minute(current: &str, minute_input: &str) -> String {
    let minute = parse_leading_integer(minute_input).clamp(0, MAX_MINUTE);
    let (hour, _) = split_time(current);

    format!("{}:{:02}", or_default_part(hour), minute)
}

/// Formats the span between two "HH:MM" times as "＜N分＞".
///
/// Anything that isn't a strictly positive span (unparsable input, equal
/// times, an end before the start or past midnight) yields an empty label.
pub fn calculate_duration(start_time: &str, end_time: &str) -> String {
    if start_time.is_empty() || end_time.is_empty() {
        return String::new();
    }

    let (Some(start), Some(end)) = (minutes_of_day(start_time), minutes_of_day(end_time)) else {
        return String::new();
    };

    let duration_minutes = end - start;

    if duration_minutes <= 0 {
        return String::new();
    }

    format!("＜{}分＞", duration_minutes)
}

fn minutes_of_day(time: &str) -> Option<i64> {
    let mut parts = time.split(':');
    let hour = parse_number(parts.next()?)?;
    let minute = parse_number(parts.next()?)?;

    Some(hour * 60 + minute)
}

// empty counts as zero, anything else must be a whole number within i32
fn parse_number(part: &str) -> Option<i64> {
    let part = part.trim();

    if part.is_empty() {
        return Some(0);
    }

    part.parse::<i32>().ok().map(i64::from)
}

fn parse_leading_integer(input: &str) -> i64 {
    match LEADING_INTEGER.captures(input) {
        Some(captures) => {
            let digits = &captures[1];

            digits.parse().unwrap_or(if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })
        }
        None => 0,
    }
}

fn split_time(value: &str) -> (&str, &str) {
    let mut parts = value.split(':');

    (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
}

fn or_default_part(part: &str) -> &str {
    if part.is_empty() {
        DEFAULT_PART
    } else {
        part
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_format_duration_between_times() {
        assert_eq!(calculate_duration("10:00", "10:20"), "＜20分＞");
        assert_eq!(calculate_duration("9:00", "12:15"), "＜195分＞");
    }

    #[test_log::test]
    fn when_end_is_not_after_start_should_have_no_duration() {
        assert_eq!(calculate_duration("10:00", "10:00"), "");
        assert_eq!(calculate_duration("10:30", "10:00"), "");
        assert_eq!(calculate_duration("23:30", "00:30"), "");
    }

    #[test_log::test]
    fn when_a_time_is_unparsable_should_have_no_duration() {
        assert_eq!(calculate_duration("", "10:00"), "");
        assert_eq!(calculate_duration("10:00", ""), "");
        assert_eq!(calculate_duration("10", "11:00"), "");
        assert_eq!(calculate_duration("aa:00", "11:00"), "");
        assert_eq!(calculate_duration("10:00", "11:xx"), "");
    }

    #[test_log::test]
    fn when_a_component_is_empty_should_count_it_as_zero() {
        assert_eq!(calculate_duration("10:", "10:45"), "＜45分＞");
    }

    #[test_log::test]
    fn when_hours_are_huge_should_have_no_duration() {
        assert_eq!(calculate_duration("153722867280912931:00", "10:00"), "");
        assert_eq!(
            calculate_duration("-100000000000000000:00", "100000000000000000:00"),
            ""
        );
    }

    #[test_log::test]
    fn should_span_the_whole_i32_range_without_overflow() {
        assert_eq!(
            calculate_duration("-2147483648:00", "2147483647:59"),
            format!("＜{}分＞", (2147483647i64 + 2147483648) * 60 + 59)
        );
    }

    #[test_log::test]
    fn should_clamp_hour() {
        assert_eq!(set_hour("10:30", "99"), "23:30");
        assert_eq!(set_hour("10:30", "-3"), "00:30");
        assert_eq!(set_hour("10:30", "7"), "07:30");
    }

    #[test_log::test]
    fn should_clamp_minute() {
        assert_eq!(set_minute("10:30", "-5"), "10:00");
        assert_eq!(set_minute("10:30", "75"), "10:59");
        assert_eq!(set_minute("10:30", "5"), "10:05");
    }

    #[test_log::test]
    fn when_input_is_not_numeric_should_use_zero() {
        assert_eq!(set_hour("10:30", ""), "00:30");
        assert_eq!(set_minute("10:30", "abc"), "10:00");
        assert_eq!(set_minute("10:30", "12abc"), "10:12");
    }

    #[test_log::test]
    fn when_the_other_part_is_missing_should_default_it() {
        assert_eq!(set_hour("", "9"), "09:00");
        assert_eq!(set_minute("", "15"), "00:15");
        assert_eq!(set_minute("9", "15"), "9:15");
    }

    #[test_log::test]
    fn should_saturate_huge_input() {
        assert_eq!(set_hour("", "123456789012345678901234"), "23:00");
    }
}
