use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::players::handlers::list_players,
        features::players::handlers::get_player,
        features::players::handlers::create_player,
        features::players::handlers::delete_player,
        features::matches::handlers::record_match,
        features::matches::handlers::list_matches,
        features::matches::handlers::get_match,
        features::matches::handlers::delete_match,
        features::stats::handlers::leaderboard,
        features::stats::handlers::player_stats,
    ),
    components(
        schemas(
            storage::dto::player::CreatePlayerRequest,
            storage::dto::player::PlayerResponse,
            storage::dto::matches::RecordMatchRequest,
            storage::dto::matches::MatchEntryRequest,
            storage::dto::matches::MatchResponse,
            storage::dto::matches::MatchResultResponse,
            storage::dto::stats::LeaderboardEntry,
            storage::dto::stats::PlayerStatsResponse,
            storage::dto::stats::RankDistribution,
            storage::dto::stats::CumulativePoint,
            storage::dto::common::PaginationMeta,
            storage::dto::common::PaginatedResponse<storage::dto::matches::MatchResponse>,
            storage::models::Player,
            storage::models::Match,
            storage::models::MatchResult,
        )
    ),
    tags(
        (name = "players", description = "Player registration and directory"),
        (name = "matches", description = "Match recording and history"),
        (name = "stats", description = "Leaderboard and per-player statistics"),
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
                        .bearer_format("API Key")
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

    tracing::info!("Starting league tracker API");

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
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/players", features::players::routes(api_keys.clone()))
        .nest("/api/matches", features::matches::routes(api_keys))
        .nest("/api/stats", features::stats::routes())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
