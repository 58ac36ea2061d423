use anyhow::Context as _;
use tracing::{info, warn};

use careerpath_api::config::ApiConfig;
use careerpath_api::infra::db::Store;
use careerpath_api::router::build_router;
use careerpath_api::state::AppState;
use careerpath_api::usecase::bootstrap::BootstrapUseCase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    careerpath_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let store = match config.store_settings() {
        Some((url, database)) => match Store::connect(url, database).await {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "store connection failed, running without store");
                Store::absent()
            }
        },
        None => {
            warn!("DATABASE_URL or DATABASE_NAME not set, running without store");
            Store::absent()
        }
    };

    let state = AppState {
        store,
        store_env: config.env_flags(),
    };

    if state.store.database_name().is_some() {
        let bootstrap = BootstrapUseCase {
            careers: state.career_repo(),
            questions: state.question_repo(),
            counselors: state.counselor_repo(),
        };
        match bootstrap.execute().await {
            Ok(report) => info!(?report, "store bootstrap finished"),
            Err(e) => warn!(error = %e, "store bootstrap failed"),
        }
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("careerpath api listening on {addr}");
    axum::serve(listener, router).await.context("serve http")?;
    Ok(())
}
