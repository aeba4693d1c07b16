use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod app;
mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use features::{
    athlete_stats, athletes, auth, events, follows, news, participants, reviews, search, stats,
    users,
};
use middleware::auth::AuthKeys;
use state::{AppState, FrontendLinks};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::logout,
        auth::handlers::forgot_password,
        auth::handlers::reset_password,
        auth::handlers::update_password,
        users::handlers::list_sports,
        users::handlers::list_users,
        users::handlers::verify_user,
        users::handlers::delete_user,
        users::handlers::reset_user_password,
        users::handlers::get_settings,
        users::handlers::update_settings,
        users::handlers::get_organizer,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athlete_stats::handlers::list_stats,
        athlete_stats::handlers::upsert_stats,
        events::handlers::list_events,
        events::handlers::list_categories,
        events::handlers::list_sponsors,
        events::handlers::get_event,
        events::handlers::get_event_details,
        events::handlers::create_event,
        events::handlers::update_event,
        events::handlers::update_event_fields,
        events::handlers::delete_event,
        participants::handlers::join_event,
        participants::handlers::leave_event,
        participants::handlers::list_participants,
        participants::handlers::count_participants,
        participants::handlers::check_participation,
        news::handlers::list_news,
        news::handlers::get_news,
        news::handlers::publish_news,
        news::handlers::update_news,
        news::handlers::delete_news,
        news::handlers::list_drafts,
        news::handlers::save_draft,
        news::handlers::delete_draft,
        follows::handlers::follow_user,
        follows::handlers::unfollow_user,
        follows::handlers::is_following,
        follows::handlers::follower_count,
        follows::handlers::following_count,
        reviews::handlers::create_review,
        reviews::handlers::list_reviews,
        search::handlers::search,
        stats::handlers::platform_stats,
    ),
    components(
        schemas(
            storage::dto::auth::RegisterRequest,
            storage::dto::auth::RegisterResponse,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::LoginResponse,
            storage::dto::auth::SessionUser,
            storage::dto::auth::ForgotPasswordRequest,
            storage::dto::auth::ResetPasswordRequest,
            storage::dto::auth::UpdatePasswordRequest,
            storage::dto::common::MessageResponse,
            storage::dto::common::CountResponse,
            storage::dto::user::UserSummary,
            storage::dto::user::VerifyUserRequest,
            storage::dto::user::UserVerifiedResponse,
            storage::dto::user::UserProfileResponse,
            storage::dto::user::SettingsResponse,
            storage::dto::user::UpdateSettingsRequest,
            storage::dto::athlete::AthleteListItem,
            storage::dto::athlete::StatLabel,
            storage::dto::athlete::StatGauge,
            storage::dto::athlete::ProfileStats,
            storage::dto::athlete::VideoLink,
            storage::dto::athlete::EducationEntry,
            storage::dto::athlete::AthleteProfileResponse,
            storage::dto::athlete::UpsertStatsRequest,
            storage::dto::athlete::StatsUpdatedResponse,
            storage::dto::event::EventRelations,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventWithRelations,
            storage::dto::event::EventUpdatedResponse,
            storage::dto::event::EventResponse,
            storage::dto::event::EventDetailResponse,
            storage::dto::participant::ParticipationRequest,
            storage::dto::participant::ParticipantEntry,
            storage::dto::participant::ParticipantsResponse,
            storage::dto::participant::HasJoinedResponse,
            storage::dto::news::SaveDraftRequest,
            storage::dto::news::PublishNewsRequest,
            storage::dto::news::UpdateNewsRequest,
            storage::dto::news::NewsArticleResponse,
            storage::dto::news::NewsListResponse,
            storage::dto::news::ArticleResponse,
            storage::dto::news::PublishedResponse,
            storage::dto::news::DraftsResponse,
            storage::dto::news::DraftSavedResponse,
            storage::dto::news::SuccessResponse,
            storage::dto::follow::FollowRequest,
            storage::dto::follow::IsFollowingResponse,
            storage::dto::review::CreateReviewRequest,
            storage::dto::review::ReviewResponse,
            storage::dto::search::SearchResult,
            storage::dto::stats::PlatformStats,
            storage::models::User,
            storage::models::UserRole,
            storage::models::UserDetails,
            storage::models::Sport,
            storage::models::Achievement,
            storage::models::Education,
            storage::models::AthleteStats,
            storage::models::Event,
            storage::models::EventStatus,
            storage::models::EventCategory,
            storage::models::Sponsor,
            storage::models::NewsArticle,
            storage::models::NewsDraft,
        )
    ),
    tags(
        (name = "auth", description = "Registration, sign-in and password management"),
        (name = "users", description = "Profiles, settings and the sports lookup"),
        (name = "admin", description = "User moderation, admin only"),
        (name = "athletes", description = "Athlete directory, profiles and stats"),
        (name = "events", description = "Events with their categories and sponsors"),
        (name = "participants", description = "Joining and leaving events"),
        (name = "news", description = "Published news and drafts"),
        (name = "follows", description = "Follow relationships between users"),
        (name = "reviews", description = "User reviews"),
        (name = "search", description = "Search across users and events"),
        (name = "stats", description = "Platform counters"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Athletix API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        auth: AuthKeys::new(&config.jwt_secret, config.token_ttl_hours),
        links: FrontendLinks::new(config.frontend_url.clone()),
    };

    let router = app::build_router(state).merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
