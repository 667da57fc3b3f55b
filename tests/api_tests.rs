use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use candle_core::Device;
use sentiment_server::pipelines::sentiment_analysis_pipeline::*;
use sentiment_server::pipelines::utils::DeviceSelectable;
use sentiment_server::server::{create_app, AppState};
use sentiment_server::tokenization::Vocabulary;
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

const LABELS: [&str; 3] = ["부정적", "중성", "긍정적"];

fn loaded_state() -> AppState {
    let pipeline = SentimentAnalysisPipelineBuilder::simple()
        .cpu()
        .build()
        .expect("pipeline should build on CPU");
    AppState::with_pipeline(pipeline)
}

fn failed_state() -> AppState {
    let state: AppState = AppState::new();
    state.initialize(|| Err(anyhow::anyhow!("simulated startup failure")));
    state
}

fn predict_request(text: &str) -> Request<Body> {
    let body = serde_json::json!({ "text": text }).to_string();
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_reports_model_loaded_after_initialization() {
    let state: AppState = AppState::new();
    let app = create_app(state.clone());

    let (status, json) = send_json(&app, get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["model_loaded"], false);

    state.initialize(|| SentimentAnalysisPipelineBuilder::simple().cpu().build());

    let (status, json) = send_json(&app, get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model_loaded"], true);
}

#[tokio::test]
async fn health_stays_unloaded_after_failed_initialization() {
    let app = create_app(failed_state());

    let (status, json) = send_json(&app, get_request("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "running");
    assert_eq!(json["model_loaded"], false);
}

#[tokio::test]
async fn predict_returns_label_with_probabilities() {
    let app = create_app(loaded_state());

    let (status, body) = send(&app, predict_request("좋다")).await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();

    let prediction = json["prediction"].as_str().unwrap();
    assert!(LABELS.contains(&prediction), "unexpected label {prediction}");

    let probabilities = json["probabilities"].as_object().unwrap();
    assert_eq!(probabilities.len(), 3);
    let values: Vec<f64> = LABELS
        .iter()
        .map(|label| probabilities[*label].as_f64().unwrap())
        .collect();
    assert!(values.iter().all(|p| (0.0..=1.0).contains(p)));

    let sum: f64 = values.iter().sum();
    assert!((sum - 1.0).abs() < 1e-3, "probabilities sum to {sum}");

    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(json["confidence"].as_f64().unwrap(), max);
    assert_eq!(probabilities[prediction].as_f64().unwrap(), max);
}

#[tokio::test]
async fn predict_lists_probabilities_in_label_order() {
    let app = create_app(loaded_state());

    let (status, body) = send(&app, predict_request("최고 모델 hello")).await;
    assert_eq!(status, StatusCode::OK);

    let positions: Vec<usize> = LABELS
        .iter()
        .map(|label| body.rfind(&format!("\"{label}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "body: {body}");
}

#[tokio::test]
async fn predict_accepts_empty_and_long_text() {
    let app = create_app(loaded_state());

    let (status, _) = send(&app, predict_request("")).await;
    assert_eq!(status, StatusCode::OK);

    let long_text = "데이터 분석 ".repeat(200);
    let (status, _) = send(&app, predict_request(&long_text)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn predict_without_model_is_unavailable() {
    let app = create_app(failed_state());

    for text in ["좋다", "", "완전히 모르는 문장"] {
        let (status, json) = send_json(&app, predict_request(text)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["detail"], "모델이 로드되지 않았습니다");
    }
}

#[tokio::test]
async fn predict_before_initialization_is_unavailable() {
    let app = create_app(AppState::<SimpleTextClassifier>::new());

    let (status, _) = send(&app, predict_request("좋다")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn predict_rejects_malformed_body() {
    let app = create_app(loaded_state());

    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"message": "좋다"}"#))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert!(status.is_client_error(), "status was {status}");
}

#[tokio::test]
async fn model_info_describes_classifier() {
    let app = create_app(loaded_state());

    let (status, json) = send_json(&app, get_request("/model/info")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model_type"], "SimpleTextClassifier");
    assert_eq!(json["vocab_size"], 23);
    assert_eq!(json["parameters"], 52_803);
    assert_eq!(json["classes"], serde_json::json!(LABELS));
}

#[tokio::test]
async fn model_info_without_model_is_unavailable() {
    let app = create_app(failed_state());

    let (status, json) = send_json(&app, get_request("/model/info")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["detail"], "모델이 로드되지 않았습니다");
}

/// Model whose forward pass always fails.
struct BrokenModel {
    device: Device,
}

impl SentimentAnalysisModel for BrokenModel {
    type Options = ();

    fn new(_options: Self::Options, device: Device) -> anyhow::Result<Self> {
        Ok(Self { device })
    }

    fn classify(&self, _input_ids: &[u32]) -> anyhow::Result<Vec<f32>> {
        anyhow::bail!("forward pass exploded")
    }

    fn model_type(&self) -> &str {
        "BrokenModel"
    }

    fn num_parameters(&self) -> usize {
        0
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

#[tokio::test]
async fn predict_reports_internal_errors() {
    let pipeline = SentimentAnalysisPipelineBuilder::<BrokenModel>::new((), Vocabulary::default())
        .cpu()
        .build()
        .unwrap();
    let app = create_app(AppState::with_pipeline(pipeline));

    let (status, json) = send_json(&app, predict_request("좋다")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = json["detail"].as_str().unwrap();
    assert!(detail.starts_with("예측 중 오류 발생: "), "detail: {detail}");
    assert!(detail.contains("forward pass exploded"), "detail: {detail}");

    // Metadata does not touch the forward pass.
    let (status, json) = send_json(&app, get_request("/model/info")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["model_type"], "BrokenModel");
}
