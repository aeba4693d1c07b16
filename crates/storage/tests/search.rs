mod common;

use common::{event_request, register};
use sqlx::PgPool;
use storage::dto::event::EventRelations;
use storage::dto::search::SearchResult;
use storage::repository::{EventRepository, SearchRepository};

fn names(results: &[SearchResult]) -> Vec<&str> {
    results
        .iter()
        .map(|result| match result {
            SearchResult::User { name, .. } | SearchResult::Event { name, .. } => name.as_str(),
        })
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn user_matches_are_capped_at_five(pool: PgPool) {
    for n in 1..=6 {
        register(&pool, &format!("Rita Runner {n}"), "athlete", None).await;
    }
    register(&pool, "Sam Scout", "scout", None).await;

    let results = SearchRepository::new(&pool).users("RUNNER").await.unwrap();

    assert_eq!(
        names(&results),
        vec![
            "Rita Runner 1",
            "Rita Runner 2",
            "Rita Runner 3",
            "Rita Runner 4",
            "Rita Runner 5"
        ]
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn event_matches_are_capped_at_five(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let repo = EventRepository::new(&pool);
    for n in 1..=6 {
        repo.create(
            organizer.user_id,
            &event_request(&format!("Harbour Swim {n}"), EventRelations::default()),
        )
        .await
        .unwrap();
    }

    let results = SearchRepository::new(&pool).events("swim").await.unwrap();

    assert_eq!(results.len(), 5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn wildcards_in_the_term_match_literally(pool: PgPool) {
    register(&pool, "Rita Runner", "athlete", None).await;

    let repo = SearchRepository::new(&pool);

    assert!(repo.users("%").await.unwrap().is_empty());
    assert!(repo.users("R_ta").await.unwrap().is_empty());
    assert_eq!(repo.users("ita r").await.unwrap().len(), 1);
}
