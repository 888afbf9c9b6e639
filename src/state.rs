use std::sync::Arc;

use schoolhouse_config::{CorsConfig, DatabaseConfig, JwtConfig, StoreBackend};
use schoolhouse_db::{
    MemoryStore, MemoryUserStore, PgPool, PgStore, RecordStore, UserStore, init_db_pool,
    run_migrations,
};
use schoolhouse_models::{Classroom, School, Student};
use tracing::info;

/// Shared, read-only application state.
///
/// Store handles are trait objects so handlers never know which backend is
/// behind them.
#[derive(Clone)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub users: Arc<dyn UserStore>,
    pub schools: Arc<dyn RecordStore<School>>,
    pub classrooms: Arc<dyn RecordStore<Classroom>>,
    pub students: Arc<dyn RecordStore<Student>>,
}

impl AppState {
    pub fn postgres(pool: PgPool, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        let store = Arc::new(PgStore::new(pool));

        Self {
            jwt_config,
            cors_config,
            users: store.clone(),
            schools: store.clone(),
            classrooms: store.clone(),
            students: store,
        }
    }

    pub fn in_memory(jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            jwt_config,
            cors_config,
            users: Arc::new(MemoryUserStore::new()),
            schools: Arc::new(MemoryStore::<School>::new()),
            classrooms: Arc::new(MemoryStore::<Classroom>::new()),
            students: Arc::new(MemoryStore::<Student>::new()),
        }
    }
}

/// Builds state for the configured backend. The Postgres backend connects
/// and applies migrations before returning.
pub async fn init_app_state(
    database_config: &DatabaseConfig,
    jwt_config: JwtConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    info!(store.backend = %database_config.backend, "Initializing record store");

    match database_config.backend {
        StoreBackend::Postgres => {
            let pool = init_db_pool(database_config).await?;
            run_migrations(&pool).await?;
            Ok(AppState::postgres(pool, jwt_config, cors_config))
        }
        StoreBackend::Memory => Ok(AppState::in_memory(jwt_config, cors_config)),
    }
}
