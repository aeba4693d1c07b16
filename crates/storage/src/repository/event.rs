use sqlx::{FromRow, PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::common::{merge_ids, normalize_names};
use crate::dto::event::{
    CreateEventRequest, EventRelations, EventWithRelations, UpdateEventRequest, validate_schedule,
};
use crate::error::{Result, StorageError};
use crate::models::{Event, EventCategory, Sponsor};

macro_rules! event_columns {
    () => {
        "event_id, organizer_id, title, type, sport_name, start_datetime, end_datetime, \
         location, description, created_at"
    };
}

/// One side of the event's many-to-many tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Category,
    Sponsor,
}

impl Relation {
    fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Sponsor => "sponsor",
        }
    }

    /// Returns the id of the row whose name matches case-insensitively,
    /// inserting it first when no such row exists.
    fn resolve_name_sql(self) -> &'static str {
        match self {
            Self::Category => {
                r#"
                INSERT INTO event_categories (name) VALUES ($1)
                ON CONFLICT ((lower(name))) DO UPDATE SET name = event_categories.name
                RETURNING category_id
                "#
            }
            Self::Sponsor => {
                r#"
                INSERT INTO sponsors (name) VALUES ($1)
                ON CONFLICT ((lower(name))) DO UPDATE SET name = sponsors.name
                RETURNING sponsor_id
                "#
            }
        }
    }

    fn clear_mappings_sql(self) -> &'static str {
        match self {
            Self::Category => "DELETE FROM event_category_mapping WHERE event_id = $1",
            Self::Sponsor => "DELETE FROM event_sponsor_mapping WHERE event_id = $1",
        }
    }

    fn insert_mappings_sql(self) -> &'static str {
        match self {
            Self::Category => {
                "INSERT INTO event_category_mapping (event_id, category_id) \
                 SELECT $1, UNNEST($2::int4[])"
            }
            Self::Sponsor => {
                "INSERT INTO event_sponsor_mapping (event_id, sponsor_id) \
                 SELECT $1, UNNEST($2::int4[])"
            }
        }
    }

    fn names_sql(self) -> &'static str {
        match self {
            Self::Category => {
                r#"
                SELECT c.category_id AS id, c.name
                FROM event_category_mapping m
                JOIN event_categories c ON c.category_id = m.category_id
                WHERE m.event_id = $1
                ORDER BY c.name
                "#
            }
            Self::Sponsor => {
                r#"
                SELECT s.sponsor_id AS id, s.name
                FROM event_sponsor_mapping m
                JOIN sponsors s ON s.sponsor_id = m.sponsor_id
                WHERE m.event_id = $1
                ORDER BY s.name
                "#
            }
        }
    }
}

#[derive(Debug, FromRow)]
struct RelatedName {
    id: i32,
    name: String,
}

/// Repository for events and their category/sponsor mappings
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events, soonest first
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(concat!(
            "SELECT ",
            event_columns!(),
            " FROM events ORDER BY start_datetime ASC, created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        sqlx::query_as::<_, Event>(concat!(
            "SELECT ",
            event_columns!(),
            " FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Event"))
    }

    pub async fn list_by_organizer(&self, organizer_id: Uuid) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(concat!(
            "SELECT ",
            event_columns!(),
            " FROM events WHERE organizer_id = $1 ORDER BY start_datetime DESC"
        ))
        .bind(organizer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn list_categories(&self) -> Result<Vec<EventCategory>> {
        let categories = sqlx::query_as::<_, EventCategory>(
            "SELECT category_id, name FROM event_categories ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn list_sponsors(&self) -> Result<Vec<Sponsor>> {
        let sponsors =
            sqlx::query_as::<_, Sponsor>("SELECT sponsor_id, name FROM sponsors ORDER BY name")
                .fetch_all(self.pool)
                .await?;

        Ok(sponsors)
    }

    /// Create an event and its category/sponsor mappings in one transaction
    pub async fn create(
        &self,
        organizer_id: Uuid,
        req: &CreateEventRequest,
    ) -> Result<EventWithRelations> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(concat!(
            r#"
            INSERT INTO events (
                organizer_id, title, type, sport_name, start_datetime, end_datetime,
                location, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING "#,
            event_columns!()
        ))
        .bind(organizer_id)
        .bind(req.title.trim())
        .bind(&req.event_type)
        .bind(&req.sport_name)
        .bind(req.start_datetime)
        .bind(req.end_datetime)
        .bind(&req.location)
        .bind(&req.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).classify("Event already exists", "Unknown organizer"))?;

        let enriched = apply_relations(&mut tx, event, &req.relations).await?;
        tx.commit().await?;

        Ok(enriched)
    }

    /// Patch the event's scalar fields and replace its category and sponsor
    /// mappings with the requested membership.
    ///
    /// Runs in a single transaction holding a row lock on the event, so a
    /// concurrent reader never observes the event without its mappings and
    /// a failure at any step leaves the event untouched.
    pub async fn update_with_relations(
        &self,
        id: Uuid,
        req: &UpdateEventRequest,
    ) -> Result<EventWithRelations> {
        let mut tx = self.pool.begin().await?;

        let event = patch_locked(&mut tx, id, req).await?;
        let enriched = apply_relations(&mut tx, event, &req.relations).await?;
        tx.commit().await?;

        tracing::debug!(
            event_id = %id,
            categories = enriched.category_ids.len(),
            sponsors = enriched.sponsor_ids.len(),
            "Event mappings replaced"
        );

        Ok(enriched)
    }

    /// Patch only the event's scalar fields; category and sponsor mappings
    /// are left as they are.
    pub async fn update_fields(
        &self,
        id: Uuid,
        req: &UpdateEventRequest,
    ) -> Result<EventWithRelations> {
        let mut tx = self.pool.begin().await?;

        let event = patch_locked(&mut tx, id, req).await?;
        let (category_ids, categories) =
            related_names(&mut tx, Relation::Category, event.event_id).await?;
        let (sponsor_ids, sponsors) =
            related_names(&mut tx, Relation::Sponsor, event.event_id).await?;
        tx.commit().await?;

        Ok(EventWithRelations {
            status: event.status(),
            event,
            categories,
            category_ids,
            sponsors,
            sponsor_ids,
        })
    }

    /// Load an event's current category and sponsor names
    pub async fn with_relations(&self, event: Event) -> Result<EventWithRelations> {
        let mut conn = self.pool.acquire().await?;
        let (category_ids, categories) =
            related_names(&mut conn, Relation::Category, event.event_id).await?;
        let (sponsor_ids, sponsors) =
            related_names(&mut conn, Relation::Sponsor, event.event_id).await?;

        Ok(EventWithRelations {
            status: event.status(),
            event,
            categories,
            category_ids,
            sponsors,
            sponsor_ids,
        })
    }

    /// Delete an event; participants and mappings go with it through cascades
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(())
    }
}

/// Lock the event row, check the resulting schedule, then apply the
/// `COALESCE` patch of whichever scalar fields were supplied.
async fn patch_locked(
    conn: &mut PgConnection,
    id: Uuid,
    req: &UpdateEventRequest,
) -> Result<Event> {
    let existing = sqlx::query_as::<_, Event>(concat!(
        "SELECT ",
        event_columns!(),
        " FROM events WHERE event_id = $1 FOR UPDATE"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StorageError::NotFound("Event"))?;

    validate_schedule(
        req.start_datetime.unwrap_or(existing.start_datetime),
        req.end_datetime.unwrap_or(existing.end_datetime),
    )
    .map_err(|e| StorageError::InvalidInput(e.to_string()))?;

    sqlx::query_as::<_, Event>(concat!(
        r#"
        UPDATE events
        SET title = COALESCE($2, title),
            type = COALESCE($3, type),
            sport_name = COALESCE($4, sport_name),
            start_datetime = COALESCE($5, start_datetime),
            end_datetime = COALESCE($6, end_datetime),
            location = COALESCE($7, location),
            description = COALESCE($8, description)
        WHERE event_id = $1
        RETURNING "#,
        event_columns!()
    ))
    .bind(id)
    .bind(req.title.as_deref().map(str::trim))
    .bind(&req.event_type)
    .bind(&req.sport_name)
    .bind(req.start_datetime)
    .bind(req.end_datetime)
    .bind(&req.location)
    .bind(&req.description)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(StorageError::NotFound("Event"))
}

async fn apply_relations(
    conn: &mut PgConnection,
    event: Event,
    relations: &EventRelations,
) -> Result<EventWithRelations> {
    replace_mappings(
        conn,
        Relation::Category,
        event.event_id,
        &relations.category_ids,
        &relations.new_categories,
    )
    .await?;
    replace_mappings(
        conn,
        Relation::Sponsor,
        event.event_id,
        &relations.sponsor_ids,
        &relations.new_sponsors,
    )
    .await?;

    let (category_ids, categories) =
        related_names(conn, Relation::Category, event.event_id).await?;
    let (sponsor_ids, sponsors) = related_names(conn, Relation::Sponsor, event.event_id).await?;

    Ok(EventWithRelations {
        status: event.status(),
        event,
        categories,
        category_ids,
        sponsors,
        sponsor_ids,
    })
}

/// Full replace: resolve new names to ids, wipe the event's mappings for
/// `relation`, then insert one row per id in the final set.
async fn replace_mappings(
    conn: &mut PgConnection,
    relation: Relation,
    event_id: Uuid,
    existing_ids: &[i32],
    new_names: &[String],
) -> Result<()> {
    let mut created = Vec::new();
    for name in normalize_names(new_names) {
        let id: i32 = sqlx::query_scalar(relation.resolve_name_sql())
            .bind(&name)
            .fetch_one(&mut *conn)
            .await?;
        created.push(id);
    }

    let final_ids = merge_ids(existing_ids, &created);

    sqlx::query(relation.clear_mappings_sql())
        .bind(event_id)
        .execute(&mut *conn)
        .await?;

    if !final_ids.is_empty() {
        sqlx::query(relation.insert_mappings_sql())
            .bind(event_id)
            .bind(&final_ids)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                StorageError::from(e).classify(
                    &format!("Duplicate {} mapping", relation.label()),
                    &format!("Unknown {} id", relation.label()),
                )
            })?;
    }

    Ok(())
}

async fn related_names(
    conn: &mut PgConnection,
    relation: Relation,
    event_id: Uuid,
) -> Result<(Vec<i32>, Vec<String>)> {
    let rows = sqlx::query_as::<_, RelatedName>(relation.names_sql())
        .bind(event_id)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(|r| (r.id, r.name)).unzip())
}
