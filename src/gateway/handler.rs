use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::lookup::{FilterConfiguration, ParameterSource};
use crate::model::{CableField, CableRecord, CableSummary, SearchCriteria};
use crate::publish::PublishReport;
use crate::scoring::AnnotatedRecord;
use crate::search::{SearchBackend, SearchOutcome};

use super::FIBERSHEET_STATUS_HEADER;
use super::error::GatewayError;
use super::state::HandlerState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Sort results by overall score, highest first.
    #[serde(default)]
    pub ranked: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub message: String,
    pub results: Vec<AnnotatedRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionsQuery {
    pub field: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub options: FilterConfiguration,
    /// Fields whose values came from the lookup endpoint.
    pub live_fields: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<String>>,
}

/// Records may use normalized names or the external schema
/// (`typeofCable`, `"isActive": "Y"`, `"cableID": "17"`, ...).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub records: Vec<CableRecord>,
    #[serde(default)]
    pub source_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    /// `true` only when every record was stored.
    pub success: bool,
    #[serde(flatten)]
    pub report: PublishReport,
    pub summaries: Vec<CableSummary>,
}

fn status_headers(status: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(FIBERSHEET_STATUS_HEADER, HeaderValue::from_static(status));
    headers
}

#[instrument(skip(state, request))]
pub async fn search_handler<B, P>(
    State(state): State<HandlerState<B, P>>,
    Query(query): Query<SearchQuery>,
    Json(request): Json<Value>,
) -> Result<Response, GatewayError>
where
    B: SearchBackend + 'static,
    P: ParameterSource + 'static,
{
    let criteria: SearchCriteria = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid search criteria: {e}")))?;

    debug!(
        constraints = CableField::ALL
            .iter()
            .filter(|f| criteria.constraint(**f).is_some())
            .count(),
        "Processing search request"
    );

    let outcome = state.orchestrator.search(&criteria).await;

    let status_code = if outcome.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    let status = outcome.status();
    let message = outcome.user_message();
    let results = if query.ranked {
        outcome.ranked()
    } else {
        outcome.into_results()
    };

    Ok((
        status_code,
        status_headers(status),
        Json(SearchResponse {
            status,
            message,
            results,
        }),
    )
        .into_response())
}

#[instrument(skip(state))]
pub async fn options_handler<B, P>(
    State(state): State<HandlerState<B, P>>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<OptionsResponse>, GatewayError>
where
    B: SearchBackend + 'static,
    P: ParameterSource + 'static,
{
    let Some(name) = query.field.as_deref() else {
        let mut options = FilterConfiguration::new();
        let live_fields = options
            .fetch_all(state.parameters.as_ref(), &state.fallback)
            .await;
        return Ok(Json(OptionsResponse {
            options,
            live_fields,
            matches: None,
        }));
    };

    let field: CableField = name.parse()?;
    let mut options = FilterConfiguration::for_fields([field]);
    let live = options
        .fetch(field, state.parameters.as_ref(), &state.fallback)
        .await;

    let matches = query.filter.as_deref().map(|text| {
        options
            .filter(field, text)
            .into_iter()
            .map(str::to_string)
            .collect()
    });

    Ok(Json(OptionsResponse {
        options,
        live_fields: usize::from(live),
        matches,
    }))
}

#[instrument(skip(state, request))]
pub async fn datasheets_handler<B, P>(
    State(state): State<HandlerState<B, P>>,
    Json(request): Json<Value>,
) -> Result<Response, GatewayError>
where
    B: SearchBackend + 'static,
    P: ParameterSource + 'static,
{
    let request: PublishRequest = serde_json::from_value(request)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid publish request: {e}")))?;

    if request.records.is_empty() {
        return Err(GatewayError::EmptyBatch);
    }

    let summaries = request
        .records
        .iter()
        .map(|record| CableSummary::from_record(record, request.source_file.as_deref()))
        .collect();

    let report = state.publisher.publish_all(&request.records).await;
    info!(
        total = report.total,
        succeeded = report.succeeded,
        "Datasheet batch processed"
    );

    let status = if report.failed == 0 {
        "PUBLISHED"
    } else if report.succeeded == 0 {
        "PUBLISH_FAILED"
    } else {
        "PARTIALLY_PUBLISHED"
    };

    Ok((
        StatusCode::OK,
        status_headers(status),
        Json(PublishResponse {
            success: report.failed == 0,
            report,
            summaries,
        }),
    )
        .into_response())
}
