mod common;

use common::{event_request, register};
use sqlx::PgPool;
use storage::dto::event::EventRelations;
use storage::repository::{EventRepository, ParticipantRepository};

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn organizer_creates_athlete_joins_then_leaves(pool: PgPool) {
    let athlete = register(&pool, "Andy Athlete", "athlete", None).await;
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let events = EventRepository::new(&pool);
    let participants = ParticipantRepository::new(&pool);

    let created = events
        .create(
            organizer.user_id,
            &event_request(
                "Harbor Dash",
                EventRelations {
                    category_ids: vec![],
                    new_categories: vec!["5K Run".to_string()],
                    ..Default::default()
                },
            ),
        )
        .await
        .unwrap();
    let event_id = created.event.event_id;

    participants.join(event_id, athlete.user_id).await.unwrap();

    let details = events
        .with_relations(events.find_by_id(event_id).await.unwrap())
        .await
        .unwrap();
    assert_eq!(details.categories, vec!["5K Run".to_string()]);
    assert_eq!(participants.count(event_id).await.unwrap(), 1);
    assert!(participants.has_joined(event_id, athlete.user_id).await.unwrap());

    let roster = participants.list(event_id).await.unwrap();
    assert_eq!(roster[0].fullname, "Andy Athlete");

    participants.leave(event_id, athlete.user_id).await.unwrap();
    assert_eq!(participants.count(event_id).await.unwrap(), 0);
}
