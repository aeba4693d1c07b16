#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use storage::dto::auth::RegisterRequest;
use storage::dto::event::{CreateEventRequest, EventRelations};
use storage::models::User;
use storage::repository::AuthRepository;

pub async fn register(pool: &PgPool, name: &str, role: &str, sport: Option<i32>) -> User {
    let req = RegisterRequest {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        password: "password123".to_string(),
        role: role.to_string(),
        gender: None,
        birth_date: NaiveDate::from_ymd_opt(2000, 5, 17),
        region: Some("Cebu".to_string()),
        sport,
        bio: None,
    };

    AuthRepository::new(pool)
        .register(&req, "not-a-real-hash")
        .await
        .unwrap()
}

pub fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn event_request(title: &str, relations: EventRelations) -> CreateEventRequest {
    CreateEventRequest {
        organizer_id: None,
        title: title.to_string(),
        event_type: "Tournament".to_string(),
        sport_name: None,
        start_datetime: at(1, 9),
        end_datetime: at(1, 17),
        location: Some("City Oval".to_string()),
        description: None,
        relations,
    }
}

pub async fn count(pool: &PgPool, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await.unwrap()
}
