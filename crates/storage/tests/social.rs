mod common;

use common::{count, event_request, register};
use sqlx::PgPool;
use storage::dto::event::EventRelations;
use storage::dto::review::CreateReviewRequest;
use storage::error::StorageError;
use storage::repository::{EventRepository, FollowRepository, ParticipantRepository, ReviewRepository};

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn duplicate_follow_is_a_conflict(pool: PgPool) {
    let scout = register(&pool, "Sam Scout", "scout", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let repo = FollowRepository::new(&pool);

    repo.follow(scout.user_id, athlete.user_id).await.unwrap();
    let err = repo.follow(scout.user_id, athlete.user_id).await.unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert_eq!(repo.follower_count(athlete.user_id).await.unwrap(), 1);
    assert_eq!(repo.following_count(scout.user_id).await.unwrap(), 1);
    assert!(repo.is_following(scout.user_id, athlete.user_id).await.unwrap());
    assert!(!repo.is_following(athlete.user_id, scout.user_id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn unfollow_without_relationship_is_not_found(pool: PgPool) {
    let scout = register(&pool, "Sam Scout", "scout", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;

    let err = FollowRepository::new(&pool)
        .unfollow(scout.user_id, athlete.user_id)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn duplicate_join_is_a_conflict(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let event = EventRepository::new(&pool)
        .create(organizer.user_id, &event_request("Relay", EventRelations::default()))
        .await
        .unwrap();
    let repo = ParticipantRepository::new(&pool);

    repo.join(event.event.event_id, athlete.user_id).await.unwrap();
    let err = repo
        .join(event.event.event_id, athlete.user_id)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
    assert_eq!(repo.count(event.event.event_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn reviews_carry_reviewer_name(pool: PgPool) {
    let scout = register(&pool, "Sam Scout", "scout", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let repo = ReviewRepository::new(&pool);

    repo.create(&CreateReviewRequest {
        reviewer_id: scout.user_id,
        reviewee_id: athlete.user_id,
        rating: 4,
        comment: Some("Quick first step".to_string()),
    })
    .await
    .unwrap();

    let reviews = repo.list_for_reviewee(athlete.user_id).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].reviewer_name.as_deref(), Some("Sam Scout"));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM user_review").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn joining_a_vanished_event_is_an_invalid_reference(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let event = EventRepository::new(&pool)
        .create(organizer.user_id, &event_request("Pickup Game", EventRelations::default()))
        .await
        .unwrap();
    EventRepository::new(&pool)
        .delete(event.event.event_id)
        .await
        .unwrap();

    let err = ParticipantRepository::new(&pool)
        .join(event.event.event_id, athlete.user_id)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::InvalidReference(_)));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM event_participants").await, 0);
}
