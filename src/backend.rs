use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_ASSET_DIR: &str = "dist";
const DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 86_400);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ServeRuntimeConfig {
    asset_dir: PathBuf,
    asset_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl ServeRuntimeConfig {
    fn from_env() -> Self {
        let asset_dir = parse_env_non_empty_string("ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));
        let asset_cache_max_age_seconds = parse_env_u64_with_bounds(
            "ASSET_CACHE_MAX_AGE_SECONDS",
            DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            asset_dir,
            asset_cache_max_age_seconds,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: ServeRuntimeConfig,
    started_at_unix: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");
    let config = ServeRuntimeConfig::from_env();
    let state = AppState {
        config: config.clone(),
        started_at_unix: now_unix_seconds(),
    };

    let index_path = config.asset_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.asset_dir).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/healthz", get(get_health))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            finalize_response,
        ))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &state.config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": port,
            "asset_dir": state.config.asset_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    uptime_seconds: u64,
}

async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let payload = HealthPayload {
        ok: true,
        uptime_seconds: now_unix_seconds().saturating_sub(state.started_at_unix),
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control("no-store"));
    (StatusCode::OK, headers, Json(payload))
}

/// Stamps the request id, fills in a cache-control policy for responses that
/// did not set their own, and emits one structured line per request.
async fn finalize_response(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = resolve_request_id(request.headers());

    let mut response = next.run(request).await;

    if !response.headers().contains_key(header::CACHE_CONTROL) {
        let policy = response_cache_control(
            response.status(),
            state.config.asset_cache_max_age_seconds,
        );
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, cache_control(&policy));
    }

    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }

    log_event(
        &state.config,
        LogLevel::Debug,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn response_cache_control(status: StatusCode, max_age_seconds: u64) -> String {
    if status.is_success() {
        format!("public, max-age={max_age_seconds}")
    } else {
        "no-store".to_string()
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    parse_u64_with_bounds(std::env::var(name).ok().as_deref(), default, bounds)
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServeRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_parse_accepts_in_range_values() {
        assert_eq!(parse_u64_with_bounds(Some("120"), 60, (0, 86_400)), 120);
        assert_eq!(parse_u64_with_bounds(Some(" 7 "), 60, (0, 86_400)), 7);
    }

    #[test]
    fn bounded_parse_falls_back_on_garbage_or_out_of_range() {
        assert_eq!(parse_u64_with_bounds(None, 60, (0, 86_400)), 60);
        assert_eq!(parse_u64_with_bounds(Some("nope"), 60, (0, 86_400)), 60);
        assert_eq!(parse_u64_with_bounds(Some("100000"), 60, (0, 86_400)), 60);
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.cmp(&LogLevel::Info), Ordering::Equal);
    }

    #[test]
    fn successful_responses_get_the_public_policy() {
        assert_eq!(
            response_cache_control(StatusCode::OK, 3_600),
            "public, max-age=3600"
        );
        assert_eq!(response_cache_control(StatusCode::NOT_FOUND, 3_600), "no-store");
    }

    #[test]
    fn request_id_prefers_the_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-abc"));
        assert_eq!(resolve_request_id(&headers), "req-abc");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn health_payload_serializes_camel_case() {
        let payload = HealthPayload {
            ok: true,
            uptime_seconds: 42,
        };
        let value = serde_json::to_value(&payload).expect("serializable payload");
        assert_eq!(value["ok"], true);
        assert_eq!(value["uptimeSeconds"], 42);
    }
}
