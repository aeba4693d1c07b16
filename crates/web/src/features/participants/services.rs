use sqlx::PgPool;
use storage::{
    dto::participant::ParticipantEntry,
    error::Result,
    models::{Event, EventParticipant, User},
    repository::{EventRepository, ParticipantRepository, UserRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// An event open to one sport only accepts users registered under that sport.
pub fn check_sport(event: &Event, user: &User) -> WebResult<()> {
    let Some(required) = event.sport_name.as_deref().map(str::trim) else {
        return Ok(());
    };
    if required.is_empty() {
        return Ok(());
    }

    let matches = user
        .sport_name
        .as_deref()
        .is_some_and(|sport| sport.trim().eq_ignore_ascii_case(required));

    if matches {
        Ok(())
    } else {
        Err(WebError::BadRequest(format!(
            "This event is only open to {required} athletes"
        )))
    }
}

pub async fn join(pool: &PgPool, event_id: Uuid, user_id: Uuid) -> WebResult<EventParticipant> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    check_sport(&event, &user)?;

    let participant = ParticipantRepository::new(pool)
        .join(event_id, user_id)
        .await?;

    tracing::info!(event_id = %event_id, user_id = %user_id, "Joined event");

    Ok(participant)
}

pub async fn leave(pool: &PgPool, event_id: Uuid, user_id: Uuid) -> Result<()> {
    ParticipantRepository::new(pool)
        .leave(event_id, user_id)
        .await?;

    tracing::info!(event_id = %event_id, user_id = %user_id, "Left event");

    Ok(())
}

pub async fn list_participants(pool: &PgPool, event_id: Uuid) -> Result<Vec<ParticipantEntry>> {
    let rows = ParticipantRepository::new(pool).list(event_id).await?;
    Ok(ParticipantEntry::numbered(rows))
}

pub async fn count(pool: &PgPool, event_id: Uuid) -> Result<i64> {
    ParticipantRepository::new(pool).count(event_id).await
}

pub async fn has_joined(pool: &PgPool, event_id: Uuid, user_id: Uuid) -> Result<bool> {
    ParticipantRepository::new(pool)
        .has_joined(event_id, user_id)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(sport: Option<&str>) -> Event {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Event {
            event_id: Uuid::new_v4(),
            organizer_id: Uuid::new_v4(),
            title: "League Day".to_string(),
            event_type: "Tournament".to_string(),
            sport_name: sport.map(str::to_string),
            start_datetime: start,
            end_datetime: start,
            location: None,
            description: None,
            created_at: start,
        }
    }

    fn user(sport: Option<&str>) -> User {
        User {
            user_id: Uuid::new_v4(),
            fullname: "Ana Reyes".to_string(),
            role: "athlete".to_string(),
            sport_id: None,
            sport_name: sport.map(str::to_string),
            birthdate: None,
            gender: None,
            location: None,
            bio: None,
            verification_status: "unverified".to_string(),
            registration_date: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_open_event_accepts_anyone() {
        assert!(check_sport(&event(None), &user(None)).is_ok());
        assert!(check_sport(&event(Some("  ")), &user(Some("Swimming"))).is_ok());
    }

    #[test]
    fn test_sport_compared_case_insensitively() {
        assert!(check_sport(&event(Some("Basketball")), &user(Some("basketball"))).is_ok());
    }

    #[test]
    fn test_mismatched_sport_rejected() {
        let result = check_sport(&event(Some("Basketball")), &user(Some("Volleyball")));
        assert!(matches!(result, Err(WebError::BadRequest(_))));

        let result = check_sport(&event(Some("Basketball")), &user(None));
        assert!(matches!(result, Err(WebError::BadRequest(_))));
    }
}
