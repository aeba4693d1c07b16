mod common;

use common::{count, register};
use sqlx::PgPool;
use storage::dto::news::{PublishNewsRequest, SaveDraftRequest};
use storage::error::StorageError;
use storage::repository::NewsRepository;
use uuid::Uuid;

fn draft(user_id: Uuid, draft_id: Option<Uuid>, title: &str) -> SaveDraftRequest {
    SaveDraftRequest {
        draft_id,
        user_id,
        title: Some(title.to_string()),
        event_date: None,
        location: Some("Cebu".to_string()),
        content: Some("Heats start at nine.".to_string()),
        category: Some("Athletics".to_string()),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn saving_a_draft_inserts_then_updates(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let repo = NewsRepository::new(&pool);

    let (first, created) = repo
        .save_draft(&draft(organizer.user_id, None, "Meet preview"))
        .await
        .unwrap();
    assert!(created);

    let (second, created) = repo
        .save_draft(&draft(organizer.user_id, Some(first.draft_id), "Meet preview, final"))
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(second.draft_id, first.draft_id);
    assert_eq!(second.title.as_deref(), Some("Meet preview, final"));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM news_drafts").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn saving_over_someone_elses_draft_inserts_a_new_one(pool: PgPool) {
    let owner = register(&pool, "Olga Organizer", "organizer", None).await;
    let other = register(&pool, "Oscar Organizer", "organizer", None).await;
    let repo = NewsRepository::new(&pool);

    let (original, _) = repo
        .save_draft(&draft(owner.user_id, None, "Owner draft"))
        .await
        .unwrap();

    let (copy, created) = repo
        .save_draft(&draft(other.user_id, Some(original.draft_id), "Hijacked"))
        .await
        .unwrap();

    assert!(created);
    assert_ne!(copy.draft_id, original.draft_id);
    assert_eq!(copy.user_id, other.user_id);

    let untouched = repo.find_draft(original.draft_id).await.unwrap();
    assert_eq!(untouched.title.as_deref(), Some("Owner draft"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn publishing_removes_the_source_draft(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let repo = NewsRepository::new(&pool);

    let (saved, _) = repo
        .save_draft(&draft(organizer.user_id, None, "Results"))
        .await
        .unwrap();

    let article = repo
        .publish(&PublishNewsRequest {
            user_id: organizer.user_id,
            draft_id: Some(saved.draft_id),
            title: "  Results  ".to_string(),
            content: "Heats start at nine.".to_string(),
            category: None,
            event_date: None,
            location: None,
        })
        .await
        .unwrap();

    assert_eq!(article.title, "Results");
    assert_eq!(article.author_name, "Olga Organizer");
    assert!(matches!(
        repo.find_draft(saved.draft_id).await,
        Err(StorageError::NotFound("Draft"))
    ));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM news_published").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL pointing at a Postgres server"]
async fn publishing_for_unknown_author_keeps_the_draft(pool: PgPool) {
    let organizer = register(&pool, "Olga Organizer", "organizer", None).await;
    let repo = NewsRepository::new(&pool);

    let (saved, _) = repo
        .save_draft(&draft(organizer.user_id, None, "Results"))
        .await
        .unwrap();

    let err = repo
        .publish(&PublishNewsRequest {
            user_id: Uuid::new_v4(),
            draft_id: Some(saved.draft_id),
            title: "Results".to_string(),
            content: "Heats start at nine.".to_string(),
            category: None,
            event_date: None,
            location: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound("User")));
    assert!(repo.find_draft(saved.draft_id).await.is_ok());
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM news_published").await, 0);
}
