use std::sync::Arc;

use crate::{
    auth::{Argon2PasswordHasher, AuthConfig, AuthManager},
    config::Config,
};
use smartedtech_ai::{ContentGenerator, GeminiModel};
use smartedtech_core::{
    assignments::{AssignmentService, AssignmentServiceTrait},
    boosters::{BoosterService, BoosterServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    generation::ContentGeneratorTrait,
    practice::{PracticeService, PracticeServiceTrait},
    tutor::{TutorService, TutorServiceTrait},
    users::{UserService, UserServiceTrait},
};
use smartedtech_storage_sqlite::{
    db::{self, spawn_writer},
    ActivityRepository, AssignmentRepository, BoosterRepository, PerformanceRepository,
    PracticeRepository, TutorRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub assignment_service: Arc<dyn AssignmentServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub practice_service: Arc<dyn PracticeServiceTrait>,
    pub booster_service: Arc<dyn BoosterServiceTrait>,
    pub tutor_service: Arc<dyn TutorServiceTrait>,
    /// Present when a JWT secret is configured.
    pub auth: Option<Arc<AuthManager>>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = spawn_writer((*pool).clone());

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(pool.clone(), writer.clone()));
    let assignment_repo = Arc::new(AssignmentRepository::new(pool.clone(), writer.clone()));
    let performance_repo = Arc::new(PerformanceRepository::new(pool.clone(), writer.clone()));
    let practice_repo = Arc::new(PracticeRepository::new(pool.clone(), writer.clone()));
    let booster_repo = Arc::new(BoosterRepository::new(pool.clone(), writer.clone()));
    let tutor_repo = Arc::new(TutorRepository::new(pool.clone(), writer.clone()));

    if config.generation.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generated content will use built-in material");
    }
    let generator: Arc<dyn ContentGeneratorTrait> = Arc::new(ContentGenerator::new(Arc::new(
        GeminiModel::new(config.generation.clone()),
    )));

    let user_service = Arc::new(UserService::new(
        user_repo.clone(),
        activity_repo.clone(),
        Arc::new(Argon2PasswordHasher),
    ));
    let assignment_service = Arc::new(AssignmentService::new(
        assignment_repo.clone(),
        user_repo.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        user_repo.clone(),
        assignment_repo.clone(),
        activity_repo,
        performance_repo.clone(),
    ));
    let practice_service = Arc::new(PracticeService::new(
        practice_repo,
        performance_repo.clone(),
        user_repo.clone(),
        generator.clone(),
    ));
    let booster_service = Arc::new(BoosterService::new(
        booster_repo,
        assignment_repo,
        user_repo.clone(),
    ));
    let tutor_service = Arc::new(TutorService::new(
        tutor_repo,
        performance_repo,
        user_repo,
        generator,
    ));

    let auth = config.jwt_secret.as_ref().map(|secret| {
        Arc::new(AuthManager::new(&AuthConfig {
            jwt_secret: secret.clone(),
            access_token_ttl: config.access_token_ttl,
        }))
    });
    if auth.is_none() {
        tracing::warn!("SET_JWT_SECRET is not set; API routes are not protected");
    }

    Ok(Arc::new(AppState {
        user_service,
        assignment_service,
        dashboard_service,
        practice_service,
        booster_service,
        tutor_service,
        auth,
    }))
}
