use std::sync::Arc;

use productivity_predictor::config::ServerConfig;
use productivity_predictor::features::FEATURE_COUNT;
use productivity_predictor::model::RegressionModel;
use productivity_predictor::routes::{router, AppState};
use productivity_predictor::service::PredictionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = ServerConfig::from_env();

    let service = match RegressionModel::load(&cfg.model_path) {
        Ok(model) => {
            // Warmup forward on a zero vector before the listener opens.
            let warmup = model.predict(&[0.0; FEATURE_COUNT]);
            tracing::info!(
                "model loaded from {} (warmup score {:.3})",
                cfg.model_path.display(),
                warmup
            );
            PredictionService::ready(model)
        }
        Err(err) => {
            tracing::error!("model load failed, serving in degraded mode: {err:#}");
            PredictionService::unready()
        }
    };

    let state = AppState {
        service: Arc::new(service),
    };
    let app = router(state);

    let addr = cfg.bind_addr();
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
