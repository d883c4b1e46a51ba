use std::collections::BTreeMap;

use actix_web::http::header;
use actix_web::web::{Data, Json};
use actix_web::{get, HttpRequest};
use awc::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::auth;
use crate::config::Config;
use crate::error::Error;

/// Backend route the connection test exercises.
const MY_APPLICATIONS_PATH: &str = "/applications/my";

/// Routes probed by the applications debug report.
const PROBED_PATHS: [&str; 2] = ["/applications", MY_APPLICATIONS_PATH];

/// Upstream bodies are echoed back truncated to keep diagnostic responses bounded.
const BODY_PREVIEW_CHARS: usize = 1000;

#[derive(Clone, Debug, Serialize)]
pub struct ConnectionReport {
    pub status: u16,
    pub backend_url: String,
    pub ok: bool,
    pub data: String,
}

/// Issues a single GET against the configured backend and echoes status and
/// a body preview. The forwarded `Authorization` header goes out verbatim.
#[get("/test-connection")]
#[tracing::instrument(skip(req, config))]
pub async fn test_connection(
    req: HttpRequest,
    config: Data<Config>,
) -> Result<Json<ConnectionReport>, Error> {
    info!("testing backend connection: {}", config.backend_url);

    let url = format!("{}{}", config.backend_url, MY_APPLICATIONS_PATH);
    let mut response = Client::default()
        .get(&url)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .insert_header((header::AUTHORIZATION, auth::forwarded_authorization(&req)))
        .send()
        .await?;

    let body = response.body().await?;
    let text = String::from_utf8_lossy(&body);
    info!("backend responded with status {}", response.status());

    Ok(Json(ConnectionReport {
        status: response.status().as_u16(),
        backend_url: config.backend_url.clone(),
        ok: response.status().is_success(),
        data: text.chars().take(BODY_PREVIEW_CHARS).collect(),
    }))
}

#[derive(Clone, Debug, Serialize)]
pub struct DebugReport {
    pub backend_url: String,
    pub endpoints_tested: Vec<String>,
    pub results: Vec<ProbeOutcome>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ProbeOutcome {
    Response {
        endpoint: String,
        status: u16,
        ok: bool,
        data: Value,
        headers: BTreeMap<String, String>,
    },
    Failure {
        endpoint: String,
        error: String,
        stack: String,
    },
}

/// Probes every application route on the backend and aggregates the
/// outcomes. Individual probe failures are reported in-line; the route
/// itself still answers 200.
#[get("/debug/applications")]
#[tracing::instrument(skip(req, config))]
pub async fn debug_applications(
    req: HttpRequest,
    config: Data<Config>,
) -> Result<Json<DebugReport>, Error> {
    let authorization = auth::forwarded_authorization(&req);
    let client = Client::default();

    let mut results = Vec::with_capacity(PROBED_PATHS.len());
    for path in PROBED_PATHS {
        let url = format!("{}{}", config.backend_url, path);
        info!("probing backend endpoint: {}", url);

        results.push(match probe(&client, &url, &authorization).await {
            Ok(probed) => ProbeOutcome::Response {
                endpoint: path.to_string(),
                status: probed.status,
                ok: probed.ok,
                data: probed.data,
                headers: probed.headers,
            },
            Err(Error::BackendRequestFailed { message, detail }) => ProbeOutcome::Failure {
                endpoint: path.to_string(),
                error: message,
                stack: detail,
            },
            Err(error) => ProbeOutcome::Failure {
                endpoint: path.to_string(),
                error: error.to_string(),
                stack: format!("{:?}", error),
            },
        });
    }

    Ok(Json(DebugReport {
        backend_url: config.backend_url.clone(),
        endpoints_tested: PROBED_PATHS.iter().map(|path| path.to_string()).collect(),
        results,
    }))
}

struct Probed {
    status: u16,
    ok: bool,
    data: Value,
    headers: BTreeMap<String, String>,
}

async fn probe(client: &Client, url: &str, authorization: &str) -> Result<Probed, Error> {
    let mut response = client
        .get(url)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .insert_header((header::AUTHORIZATION, authorization))
        .send()
        .await?;

    let body = response.body().await?;
    let data = serde_json::from_slice(&body).unwrap_or_else(|_| {
        serde_json::json!({
            "error": "Invalid JSON response",
            "text": String::from_utf8_lossy(&body),
        })
    });

    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    Ok(Probed {
        status: response.status().as_u16(),
        ok: response.status().is_success(),
        data,
        headers,
    })
}
