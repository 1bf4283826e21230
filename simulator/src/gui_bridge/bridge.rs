use crate::gui_bridge::model::{ScenarioRequest, VisualizationModel};
use crate::workflow::runner::Runner;
use log::{error, info, warn};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

pub fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

type SharedModel = Arc<RwLock<VisualizationModel>>;

/// Bridge that hosts the report endpoint and runs scenarios posted by the GUI.
pub struct GuiBridge {
    state: SharedModel,
}

impl GuiBridge {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(VisualizationModel::default())),
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone + Send + Sync + 'static
    {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());

        let get_route = warp::path("payload")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| {
                let model = state.read().map(|guard| guard.clone()).unwrap_or_default();
                warp::reply::json(&model)
            });

        let generator_route = warp::path("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and_then(|request: ScenarioRequest, state: SharedModel| async move {
                let config = request.into_config();
                let name = config.name.clone();
                match Runner::new(config).run() {
                    Ok(result) => {
                        let counts = result.report.counts;
                        if let Ok(mut guard) = state.write() {
                            *guard = VisualizationModel::from_result(&name, &result);
                        }
                        info!("[GUI] Scenario {} -> detections {}", name, counts.total());
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "ok",
                                "detections": counts.total(),
                                "scenario": name,
                            })),
                            StatusCode::OK,
                        ))
                    }
                    Err(err) => {
                        warn!("ingest-config error: {:#}", err);
                        Ok(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "error",
                                "message": format!("{:#}", err),
                            })),
                            StatusCode::BAD_REQUEST,
                        ))
                    }
                }
            });

        get_route.or(generator_route)
    }

    /// Serves the routes on a background thread until the process exits.
    pub fn serve(&self, address: SocketAddr) -> thread::JoinHandle<()> {
        let routes = self.routes();
        thread::spawn(move || {
            match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(warp::serve(routes).run(address)),
                Err(err) => error!("failed to build bridge runtime: {}", err),
            }
        })
    }

    pub fn publish(&self, model: &VisualizationModel) {
        if let Ok(mut guard) = self.state.write() {
            *guard = model.clone();
        }
        let detections = model
            .report
            .as_ref()
            .map(|report| report.detections.len())
            .unwrap_or(0);
        info!("[GUI] published {} detections", detections);
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}

impl Default for GuiBridge {
    fn default() -> Self {
        Self::new()
    }
}
