//! Notification bell state: locally read ids layered over the polled list.

use std::collections::BTreeSet;

use frames_api_models::NotificationItem;

/// Ids the user opened during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadMarks {
    ids: BTreeSet<String>,
}

impl ReadMarks {
    /// Remember `id` as read.
    pub fn mark(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    /// Remember every listed notification as read.
    pub fn mark_all(&mut self, items: &[NotificationItem]) {
        self.ids.extend(items.iter().map(|item| item.id.clone()));
    }

    /// Whether `item` counts as read, either server-side or locally.
    #[must_use]
    pub fn is_read(&self, item: &NotificationItem) -> bool {
        item.read || self.ids.contains(&item.id)
    }

    /// Number of unread notifications for the badge.
    #[must_use]
    pub fn unread_count(&self, items: &[NotificationItem]) -> usize {
        items.iter().filter(|item| !self.is_read(item)).count()
    }
}

/// Badge text; counts above nine collapse to "9+".
#[must_use]
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, read: bool) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            icon: None,
            text: format!("notice {id}"),
            time: None,
            read,
            link: None,
        }
    }

    #[test]
    fn local_marks_reduce_unread_count() {
        let items = vec![item("1", false), item("2", true), item("3", false)];
        let mut marks = ReadMarks::default();
        assert_eq!(marks.unread_count(&items), 2);
        marks.mark("1");
        assert_eq!(marks.unread_count(&items), 1);
        marks.mark_all(&items);
        assert_eq!(marks.unread_count(&items), 0);
    }

    #[test]
    fn badge_caps_at_nine() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(3).as_deref(), Some("3"));
        assert_eq!(badge_label(12).as_deref(), Some("9+"));
    }
}
