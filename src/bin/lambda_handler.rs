//! AWS Lambda handler for household reports
//!
//! Accepts a `RaioXInput` JSON body through a Lambda Function URL and returns
//! the full `RaioXSummary`. Assumption overrides may be sent alongside the
//! input under `assumptions`.

use aws_lambda_events::event::lambda_function_urls::{
    LambdaFunctionUrlRequest, LambdaFunctionUrlResponse,
};
use base64::Engine;
use finance_engine::{Assumptions, RaioXInput, RaioXSummary, SummaryBuilder};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Request body
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(flatten)]
    pub input: RaioXInput,

    #[serde(default)]
    pub assumptions: Option<Assumptions>,
}

/// Response body
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<RaioXSummary>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn rejected(start: Instant, message: String) -> (i64, ReportResponse) {
    log::warn!("Rejected request body: {}", message);
    (
        400,
        ReportResponse {
            summary: None,
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: Some(message),
        },
    )
}

fn handle_body(body: Option<&str>, is_base64_encoded: bool) -> (i64, ReportResponse) {
    let start = Instant::now();

    let raw = body.unwrap_or("{}");
    let decoded;
    let json = if is_base64_encoded {
        decoded = match base64::engine::general_purpose::STANDARD.decode(raw) {
            Ok(bytes) => bytes,
            Err(e) => return rejected(start, format!("invalid base64 body: {}", e)),
        };
        decoded.as_slice()
    } else {
        raw.as_bytes()
    };

    let request: ReportRequest = match serde_json::from_slice(json) {
        Ok(request) => request,
        Err(e) => return rejected(start, format!("invalid request body: {}", e)),
    };

    let builder = SummaryBuilder::new(request.assumptions.unwrap_or_default());
    let summary = builder.build(&request.input);
    log::info!("Report built with score {}", summary.score);

    (
        200,
        ReportResponse {
            summary: Some(summary),
            execution_time_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
    )
}

async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let payload = event.payload;
    let (status_code, response) = handle_body(payload.body.as_deref(), payload.is_base64_encoded);

    Ok(LambdaFunctionUrlResponse {
        status_code,
        headers: Default::default(),
        body: Some(serde_json::to_string(&response)?),
        is_base64_encoded: false,
        cookies: Vec::new(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
