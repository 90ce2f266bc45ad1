use serde_json::json;

use super::*;
use crate::model::{CableField, SearchCriteria};

fn three_candidates() -> Vec<serde_json::Value> {
    vec![
        json!({ "cableID": 11, "fiberCount": "12F", "typeofCable": "UT", "fiberType": "G.652D" }),
        json!({ "cableID": 12, "fiberCount": "24F", "typeofCable": "MT", "fiberType": "G.652D" }),
        json!({ "cableID": 13, "fiberCount": "24F", "typeofCable": "Indoor MT Cable", "fiberType": "G.657A1" }),
    ]
}

fn criteria() -> SearchCriteria {
    SearchCriteria::new()
        .with(CableField::FiberCount, "24F")
        .with(CableField::TypeOfCable, "mt")
}

#[tokio::test]
async fn test_search_annotates_results_in_response_order() {
    let orchestrator = SearchOrchestrator::new(MockSearchBackend::with_results(three_candidates()));

    let outcome = orchestrator.search(&criteria()).await;

    assert!(!outcome.is_failed());
    assert_eq!(outcome.status(), "MATCHED");

    let results = outcome.results();
    assert_eq!(results.len(), 3);

    let ids: Vec<_> = results.iter().map(|r| r.record.cable_id).collect();
    assert_eq!(ids, vec![Some(11), Some(12), Some(13)]);

    let scores: Vec<_> = results.iter().map(|r| r.overall_score()).collect();
    assert_eq!(scores, vec![0, 100, 100]);
}

#[tokio::test]
async fn test_search_sends_mapped_payload() {
    let backend = MockSearchBackend::with_results(vec![]);
    let orchestrator = SearchOrchestrator::new(backend);

    orchestrator.search(&criteria()).await;

    let requests = orchestrator.backend().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].fiber_count, "24F");
    assert_eq!(requests[0].type_of_cable, "mt");
    assert_eq!(requests[0].fiber_type, "");
    assert_eq!(requests[0].cable_id, 0);
    assert_eq!(requests[0].is_active, "Y");
}

#[tokio::test]
async fn test_zero_results_is_not_a_failure() {
    let orchestrator = SearchOrchestrator::new(MockSearchBackend::with_results(vec![]));

    let outcome = orchestrator.search(&criteria()).await;

    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert!(!outcome.is_failed());
    assert!(outcome.results().is_empty());
    assert_eq!(outcome.user_message(), NO_MATCHES_MESSAGE);
}

#[tokio::test]
async fn test_network_failure_yields_empty_failed_outcome() {
    let orchestrator = SearchOrchestrator::new(MockSearchBackend::unreachable());

    let outcome = orchestrator.search(&criteria()).await;

    assert!(outcome.is_failed());
    assert!(outcome.results().is_empty());
    assert!(outcome.error().is_some_and(SearchError::is_network));
    assert_eq!(outcome.status(), "SEARCH_FAILED");
    assert_eq!(outcome.user_message(), SEARCH_FAILED_MESSAGE);
    assert!(outcome.into_results().is_empty());
}

#[tokio::test]
async fn test_malformed_response_yields_failed_outcome() {
    let orchestrator = SearchOrchestrator::new(MockSearchBackend::failing(
        SearchError::MalformedResponse {
            reason: "missing 'res' array".to_string(),
        },
    ));

    let outcome = orchestrator.search(&criteria()).await;

    assert!(outcome.is_failed());
    assert!(!outcome.error().is_some_and(SearchError::is_network));
}

#[tokio::test]
async fn test_ranked_does_not_change_outcome_order() {
    let orchestrator = SearchOrchestrator::new(MockSearchBackend::with_results(three_candidates()));
    let outcome = orchestrator.search(&criteria()).await;

    let ranked = outcome.ranked();
    assert_eq!(ranked[0].record.cable_id, Some(12));
    assert_eq!(ranked[2].record.cable_id, Some(11));
    assert_eq!(outcome.results()[0].record.cable_id, Some(11));
}

#[test]
fn test_extract_results_accepts_res_array() {
    let items = extract_results(json!({ "res": [{ "fiberCount": "24F" }], "status": "ok" })).unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn test_extract_results_rejects_bad_shapes() {
    for body in [json!({ "data": [] }), json!({ "res": "none" }), json!([1, 2, 3])] {
        let err = extract_results(body).unwrap_err();
        assert!(matches!(err, SearchError::MalformedResponse { .. }));
    }
}

#[test]
fn test_outcome_display() {
    assert_eq!(SearchOutcome::NoMatches.to_string(), "NO_MATCHES");
    let failed = SearchOutcome::Failed(SearchError::UnexpectedStatus {
        url: "http://x".to_string(),
        status: 500,
    });
    assert!(failed.to_string().contains("500"));
}
