//! HTTP surface: `GET /`, `POST /predict`, `GET /model/info`.

pub mod handlers;
pub mod http_server;
pub mod state;
pub mod types;

pub use http_server::{create_app, start_server};
pub use state::{AppState, ModelState};
pub use types::{HealthResponse, PredictionResponse, TextRequest};
