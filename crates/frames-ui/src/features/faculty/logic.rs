//! Class list helpers for the faculty pages.

use frames_api_models::ClassResponse;
use frames_report::matches_search;

/// Classes held on `weekday` (full English name, any case).
#[must_use]
pub fn classes_on<'a>(classes: &'a [ClassResponse], weekday: &str) -> Vec<&'a ClassResponse> {
    classes
        .iter()
        .filter(|class| {
            class
                .day_of_week
                .as_deref()
                .is_some_and(|day| day.trim().eq_ignore_ascii_case(weekday))
        })
        .collect()
}

/// Classes whose code, title or section contain `query`.
#[must_use]
pub fn search_classes<'a>(classes: &'a [ClassResponse], query: &str) -> Vec<&'a ClassResponse> {
    classes
        .iter()
        .filter(|class| {
            matches_search(
                [
                    class.subject_code.as_deref(),
                    class.subject_title.as_deref(),
                    class.section.as_deref(),
                ],
                query,
            )
        })
        .collect()
}

/// "CS101 - Programming", tolerating missing parts.
#[must_use]
pub fn class_label(class: &ClassResponse) -> String {
    match (class.subject_code.as_deref(), class.subject_title.as_deref()) {
        (Some(code), Some(title)) => format!("{code} - {title}"),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => format!("Class #{}", class.id),
    }
}

/// Badge style for an attendance rate percentage.
#[must_use]
pub const fn rate_tone(rate: u32) -> &'static str {
    match rate {
        90.. => "badge-success",
        75..=89 => "badge-warning",
        _ => "badge-error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: i64, code: &str, day: &str) -> ClassResponse {
        ClassResponse {
            id,
            subject_code: Some(code.to_string()),
            subject_title: Some("Programming".to_string()),
            section: Some("BSIT-2A".to_string()),
            room: Some("CL-1".to_string()),
            day_of_week: Some(day.to_string()),
            start_time: None,
            end_time: None,
            total_students: 30,
            present_count: 27,
            rate: 90,
            status: "Ongoing".to_string(),
        }
    }

    #[test]
    fn filters_by_weekday_ignoring_case() {
        let classes = vec![class(1, "CS1", "Monday"), class(2, "CS2", "tuesday")];
        assert_eq!(classes_on(&classes, "Tuesday")[0].id, 2);
        assert!(classes_on(&classes, "Friday").is_empty());
    }

    #[test]
    fn search_matches_code_and_section() {
        let classes = vec![class(1, "CS101", "Monday"), class(2, "IT202", "Monday")];
        assert_eq!(search_classes(&classes, "it2").len(), 1);
        assert_eq!(search_classes(&classes, "bsit").len(), 2);
    }

    #[test]
    fn labels_and_tones() {
        let mut sample = class(7, "CS101", "Monday");
        assert_eq!(class_label(&sample), "CS101 - Programming");
        sample.subject_code = None;
        sample.subject_title = None;
        assert_eq!(class_label(&sample), "Class #7");
        assert_eq!(rate_tone(95), "badge-success");
        assert_eq!(rate_tone(80), "badge-warning");
        assert_eq!(rate_tone(40), "badge-error");
    }
}
