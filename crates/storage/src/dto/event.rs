use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::{Event, EventStatus};

/// Category and sponsor membership requested for an event.
///
/// `*_ids` reference existing rows; `new_*` are free-text names that are
/// resolved to rows (created if absent) before the mappings are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct EventRelations {
    #[serde(default)]
    pub category_ids: Vec<i32>,
    #[serde(default)]
    pub new_categories: Vec<String>,
    #[serde(default)]
    pub sponsor_ids: Vec<i32>,
    #[serde(default)]
    pub new_sponsors: Vec<String>,
}

impl EventRelations {
    pub fn validate_names(&self) -> Result<(), &'static str> {
        let too_long = self
            .new_categories
            .iter()
            .chain(&self.new_sponsors)
            .any(|name| name.trim().chars().count() > 100);

        if too_long {
            return Err("Category and sponsor names must be at most 100 characters");
        }

        Ok(())
    }
}

/// Request payload for creating an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    /// Defaults to the authenticated user; only admins may create on behalf of someone else
    pub organizer_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "Type is required"))]
    pub event_type: String,

    #[validate(length(max = 100))]
    pub sport_name: Option<String>,

    pub start_datetime: NaiveDateTime,

    pub end_datetime: NaiveDateTime,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[serde(flatten)]
    pub relations: EventRelations,
}

impl CreateEventRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_schedule(&self) -> Result<(), &'static str> {
        validate_schedule(self.start_datetime, self.end_datetime)?;
        self.relations.validate_names()
    }
}

/// Request payload for editing an event; scalar fields left out stay unchanged
/// while the category and sponsor lists always replace the current membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub event_type: Option<String>,

    #[validate(length(max = 100))]
    pub sport_name: Option<String>,

    pub start_datetime: Option<NaiveDateTime>,

    pub end_datetime: Option<NaiveDateTime>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[serde(flatten)]
    pub relations: EventRelations,
}

impl UpdateEventRequest {
    /// True when at least one scalar field was supplied
    pub fn has_field_changes(&self) -> bool {
        self.title.is_some()
            || self.event_type.is_some()
            || self.sport_name.is_some()
            || self.start_datetime.is_some()
            || self.end_datetime.is_some()
            || self.location.is_some()
            || self.description.is_some()
    }
}

pub fn validate_schedule(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), &'static str> {
    if end < start {
        return Err("End time must be on or after start time");
    }
    Ok(())
}

/// Event row with its derived status and resolved category/sponsor names
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventWithRelations {
    #[serde(flatten)]
    pub event: Event,
    pub status: EventStatus,
    pub categories: Vec<String>,
    pub category_ids: Vec<i32>,
    pub sponsors: Vec<String>,
    pub sponsor_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventUpdatedResponse {
    pub message: String,
    pub event: EventWithRelations,
}

/// Event row plus the date aliases the event page reads
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub status: EventStatus,
    pub date: NaiveDateTime,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDateTime,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            status: event.status(),
            date: event.start_datetime,
            end_date: event.end_datetime,
            event,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub details: EventWithRelations,
    #[serde(rename = "participantCount")]
    pub participant_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 5, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_schedule_rejects_end_before_start() {
        assert!(validate_schedule(at(10), at(9)).is_err());
        assert!(validate_schedule(at(10), at(10)).is_ok());
    }

    #[test]
    fn test_update_request_defaults_relations_to_empty() {
        let req: UpdateEventRequest =
            serde_json::from_str(r#"{"title": "Fun Run", "new_categories": ["5K Run"]}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Fun Run"));
        assert!(req.relations.category_ids.is_empty());
        assert_eq!(req.relations.new_categories, vec!["5K Run"]);
        assert!(req.relations.sponsor_ids.is_empty());
    }

    #[test]
    fn test_field_changes_ignore_relations() {
        let only_tags: UpdateEventRequest =
            serde_json::from_str(r#"{"category_ids": [3]}"#).unwrap();
        assert!(!only_tags.has_field_changes());

        let retitled: UpdateEventRequest = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(retitled.has_field_changes());
    }

    #[test]
    fn test_create_request_reads_type_field() {
        let req: CreateEventRequest = serde_json::from_str(
            r#"{
                "title": "City Marathon",
                "type": "tournament",
                "start_datetime": "2025-05-01T08:00:00",
                "end_datetime": "2025-05-01T12:00:00",
                "category_ids": [1, 2]
            }"#,
        )
        .unwrap();
        assert_eq!(req.event_type, "tournament");
        assert_eq!(req.relations.category_ids, vec![1, 2]);
        assert!(req.validate().is_ok());
        assert!(req.validate_schedule().is_ok());
    }

    #[test]
    fn test_overlong_new_name_rejected() {
        let relations = EventRelations {
            new_sponsors: vec!["x".repeat(101)],
            ..Default::default()
        };
        assert!(relations.validate_names().is_err());
    }
}
