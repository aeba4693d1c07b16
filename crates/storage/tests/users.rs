mod common;

use chrono::Duration;
use common::{count, event_request, register};
use rust_decimal::Decimal;
use sqlx::PgPool;
use storage::dto::athlete::UpsertStatsRequest;
use storage::dto::event::EventRelations;
use storage::dto::news::SaveDraftRequest;
use storage::error::StorageError;
use storage::repository::{
    AthleteRepository, AuthRepository, EventRepository, FollowRepository, NewsRepository,
    ParticipantRepository, UserRepository,
};

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn omitted_stats_are_stored_as_zero(pool: PgPool) {
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let repo = AthleteRepository::new(&pool);

    let stats = repo
        .upsert_stats(
            athlete.user_id,
            &UpsertStatsRequest {
                ppg: Some(Decimal::new(215, 1)),
                rpg: None,
                apg: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(stats.ppg, Decimal::new(215, 1));
    assert_eq!(stats.rpg, Decimal::ZERO);
    assert_eq!(stats.apg, Decimal::ZERO);

    let overwritten = repo
        .upsert_stats(
            athlete.user_id,
            &UpsertStatsRequest {
                ppg: None,
                rpg: Some(Decimal::new(7, 0)),
                apg: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(overwritten.ppg, Decimal::ZERO);
    assert_eq!(overwritten.rpg, Decimal::new(7, 0));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM athlete_stats").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn stats_for_non_athlete_are_not_found(pool: PgPool) {
    let scout = register(&pool, "Sam Scout", "scout", None).await;

    let err = AthleteRepository::new(&pool)
        .upsert_stats(
            scout.user_id,
            &UpsertStatsRequest {
                ppg: None,
                rpg: None,
                apg: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound("Athlete")));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn deleting_a_user_removes_what_references_it(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;

    let event = EventRepository::new(&pool)
        .create(organizer.user_id, &event_request("Pickup Game", EventRelations::default()))
        .await
        .unwrap();
    ParticipantRepository::new(&pool)
        .join(event.event.event_id, athlete.user_id)
        .await
        .unwrap();
    FollowRepository::new(&pool)
        .follow(organizer.user_id, athlete.user_id)
        .await
        .unwrap();
    AuthRepository::new(&pool)
        .create_reset_token(athlete.user_id, Duration::hours(1))
        .await
        .unwrap();
    NewsRepository::new(&pool)
        .save_draft(&SaveDraftRequest {
            draft_id: None,
            user_id: athlete.user_id,
            title: Some("Notes".to_string()),
            event_date: None,
            location: None,
            content: None,
            category: None,
        })
        .await
        .unwrap();

    let users = UserRepository::new(&pool);
    users.delete(athlete.user_id).await.unwrap();

    for table in [
        "user_credentials",
        "password_reset_tokens",
        "follows",
        "event_participants",
        "news_drafts",
    ] {
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE {}", owner_filter(table));
        let remaining = sqlx::query_scalar::<_, i64>(&sql)
            .bind(athlete.user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0, "{table} still references the deleted user");
    }

    assert!(users.find_by_id(organizer.user_id).await.is_ok());
    assert_eq!(
        ParticipantRepository::new(&pool)
            .count(event.event.event_id)
            .await
            .unwrap(),
        0
    );
    assert!(matches!(
        users.delete(athlete.user_id).await,
        Err(StorageError::NotFound("User"))
    ));
}

fn owner_filter(table: &str) -> &'static str {
    match table {
        "follows" => "follower_id = $1 OR following_id = $1",
        _ => "user_id = $1",
    }
}
