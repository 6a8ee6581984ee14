//! Weekly schedule grouping and time formatting.

use chrono::NaiveTime;
use frames_api_models::ScheduleItem;
use frames_report::history::parse_clock;

/// Days in display order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Classes of one weekday, earliest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay<'a> {
    /// Weekday name.
    pub day: &'static str,
    /// Classes on that day.
    pub classes: Vec<&'a ScheduleItem>,
}

fn starts_at(item: &ScheduleItem) -> NaiveTime {
    item.start_time
        .as_deref()
        .and_then(parse_clock)
        .unwrap_or(NaiveTime::MIN)
}

/// Group the schedule by weekday, skipping days without classes.
#[must_use]
pub fn group_by_day(schedule: &[ScheduleItem]) -> Vec<ScheduleDay<'_>> {
    WEEKDAYS
        .iter()
        .filter_map(|day| {
            let mut classes: Vec<&ScheduleItem> = schedule
                .iter()
                .filter(|item| {
                    item.day_of_week
                        .as_deref()
                        .is_some_and(|value| value.trim().eq_ignore_ascii_case(day))
                })
                .collect();
            classes.sort_by_key(|item| starts_at(item));
            (!classes.is_empty()).then_some(ScheduleDay { day, classes })
        })
        .collect()
}

/// Render a schedule clock as `8:00 AM`; unparseable values pass through.
#[must_use]
pub fn format_clock(raw: Option<&str>) -> String {
    match raw {
        Some(value) => parse_clock(value)
            .map_or_else(|| value.to_string(), |time| time.format("%-I:%M %p").to_string()),
        None => "--".to_string(),
    }
}

/// "8:00 AM - 9:30 AM".
#[must_use]
pub fn time_span(item: &ScheduleItem) -> String {
    format!(
        "{} - {}",
        format_clock(item.start_time.as_deref()),
        format_clock(item.end_time.as_deref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: i64, day: &str, start: &str) -> ScheduleItem {
        ScheduleItem {
            class_id: id,
            subject_code: Some(format!("CS{id}")),
            subject_title: Some(format!("Subject {id}")),
            day_of_week: Some(day.to_string()),
            start_time: Some(start.to_string()),
            end_time: Some("17:00".to_string()),
            room: Some("CL-1".to_string()),
            faculty_name: None,
        }
    }

    #[test]
    fn groups_in_weekday_order_sorted_by_start() {
        let schedule = vec![
            class(1, "Wednesday", "13:00"),
            class(2, "monday", "10:00"),
            class(3, "Monday", "08:00"),
        ];
        let days = group_by_day(&schedule);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, "Monday");
        assert_eq!(
            days[0].classes.iter().map(|item| item.class_id).collect::<Vec<_>>(),
            vec![3, 2]
        );
        assert_eq!(days[1].day, "Wednesday");
    }

    #[test]
    fn clock_values_render_in_twelve_hour_form() {
        assert_eq!(format_clock(Some("13:05:00")), "1:05 PM");
        assert_eq!(format_clock(Some("TBA")), "TBA");
        assert_eq!(format_clock(None), "--");
        assert_eq!(time_span(&class(1, "Monday", "08:00")), "8:00 AM - 5:00 PM");
    }
}
