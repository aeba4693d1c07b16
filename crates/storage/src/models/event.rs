use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub organizer_id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub sport_name: Option<String>,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: NaiveDateTime,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Event {
    pub fn status_at(&self, now: NaiveDateTime) -> EventStatus {
        EventStatus::at(self.start_datetime, self.end_datetime, now)
    }

    pub fn status(&self) -> EventStatus {
        self.status_at(chrono::Utc::now().naive_utc())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    /// Both bounds are inclusive: an event is ongoing at its exact start and end.
    pub fn at(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> Self {
        if now < start {
            Self::Upcoming
        } else if now <= end {
            Self::Ongoing
        } else {
            Self::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_status_before_start() {
        assert_eq!(
            EventStatus::at(at(10, 9), at(10, 17), at(9, 12)),
            EventStatus::Upcoming
        );
    }

    #[test]
    fn test_status_inclusive_bounds() {
        let (start, end) = (at(10, 9), at(10, 17));
        assert_eq!(EventStatus::at(start, end, start), EventStatus::Ongoing);
        assert_eq!(EventStatus::at(start, end, end), EventStatus::Ongoing);
    }

    #[test]
    fn test_status_after_end() {
        assert_eq!(
            EventStatus::at(at(10, 9), at(10, 17), at(11, 0)),
            EventStatus::Completed
        );
    }
}
