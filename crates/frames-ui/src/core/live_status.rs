//! Live presence card derived from the newest attendance log.
//!
//! # Design
//! - Only the most recent log counts, and only while it is younger than the window.
//! - `now` is passed in so the derivation stays deterministic under test.

use chrono::{Duration, NaiveDateTime};
use frames_api_models::{AttendanceAction, AttendanceRecord};

/// How long a log keeps describing the student's current whereabouts.
pub const LIVE_WINDOW_HOURS: i64 = 4;

const UNKNOWN_ROOM: &str = "Unknown Room";

/// Presence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Inside a room.
    Active,
    /// Stepped out for a break.
    Break,
    /// Left after the session.
    Out,
    /// No recent activity.
    Idle,
}

impl Presence {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Break => "BREAK",
            Self::Out => "OUT",
            Self::Idle => "IDLE",
        }
    }

    /// Badge style suffix.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::Break => "warning",
            Self::Out => "error",
            Self::Idle => "neutral",
        }
    }
}

/// Rendered live status card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveStatus {
    /// Classification.
    pub presence: Presence,
    /// Sentence shown under the badge.
    pub message: String,
    /// Room line.
    pub room: String,
}

impl LiveStatus {
    fn idle() -> Self {
        Self {
            presence: Presence::Idle,
            message: "Not currently in any class".to_string(),
            room: "---".to_string(),
        }
    }
}

/// Derive the card from a history listing at time `now`.
#[must_use]
pub fn live_status(records: &[AttendanceRecord], now: NaiveDateTime) -> LiveStatus {
    let latest = records
        .iter()
        .filter_map(|record| record.occurred_at().map(|at| (at, record)))
        .max_by_key(|(at, _)| *at);
    let Some((at, record)) = latest else {
        return LiveStatus::idle();
    };
    if now.signed_duration_since(at) > Duration::hours(LIVE_WINDOW_HOURS) {
        return LiveStatus::idle();
    }
    let room = record
        .room
        .as_deref()
        .map(str::trim)
        .filter(|room| !room.is_empty())
        .unwrap_or(UNKNOWN_ROOM)
        .to_string();
    match record.action {
        AttendanceAction::Entry | AttendanceAction::BreakIn | AttendanceAction::Late => {
            LiveStatus {
                presence: Presence::Active,
                message: format!("Currently Detected in {room}"),
                room,
            }
        }
        AttendanceAction::BreakOut => LiveStatus {
            presence: Presence::Break,
            message: format!("On Break from {room}"),
            room,
        },
        AttendanceAction::Exit => LiveStatus {
            presence: Presence::Out,
            message: "Class Session Ended".to_string(),
            room: "---".to_string(),
        },
        AttendanceAction::Absent | AttendanceAction::SystemAlert | AttendanceAction::Other(_) => {
            LiveStatus::idle()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(timestamp: &str, action: &str, room: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            timestamp: timestamp.to_string(),
            action: AttendanceAction::from(action.to_string()),
            class_name: None,
            room: room.map(str::to_string),
            verified_by: None,
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 4)
            .and_then(|day| day.and_hms_opt(hour, minute, 0))
            .expect("valid time")
    }

    #[test]
    fn newest_entry_within_window_is_active() {
        let logs = [
            record("2026-03-04T08:00:00", "EXIT", Some("CL-1")),
            record("2026-03-04T09:30:00", "ENTRY", Some("CL-2")),
        ];
        let status = live_status(&logs, at(10, 0));
        assert_eq!(status.presence, Presence::Active);
        assert_eq!(status.message, "Currently Detected in CL-2");
    }

    #[test]
    fn break_out_reports_room_left() {
        let logs = [record("2026-03-04T09:30:00", "break_out", None)];
        let status = live_status(&logs, at(10, 0));
        assert_eq!(status.presence, Presence::Break);
        assert_eq!(status.message, "On Break from Unknown Room");
    }

    #[test]
    fn exit_hides_room() {
        let logs = [record("2026-03-04T09:30:00", "EXIT", Some("CL-2"))];
        let status = live_status(&logs, at(10, 0));
        assert_eq!(status.presence, Presence::Out);
        assert_eq!(status.room, "---");
    }

    #[test]
    fn stale_or_missing_logs_are_idle() {
        let logs = [record("2026-03-04T05:00:00", "ENTRY", Some("CL-2"))];
        assert_eq!(live_status(&logs, at(10, 0)).presence, Presence::Idle);
        assert_eq!(live_status(&[], at(10, 0)).presence, Presence::Idle);
    }
}
