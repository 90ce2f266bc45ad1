use serde_json::{Value, json};
use std::time::Duration;

use super::*;
use crate::model::{CableField, CableRecord};

fn unreachable_publisher() -> DatasheetPublisher {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    DatasheetPublisher::new(client, "http://127.0.0.1:1/configure", Duration::ZERO)
}

#[test]
fn test_interpret_response_accepts_plain_success() {
    assert_eq!(interpret_response(""), Ok(Value::Null));
    assert_eq!(
        interpret_response(r#"{"success": true, "id": 7}"#),
        Ok(json!({"success": true, "id": 7}))
    );
    assert_eq!(
        interpret_response(r#"{"status": "stored"}"#),
        Ok(json!({"status": "stored"}))
    );
    assert_eq!(interpret_response("OK"), Ok(Value::String("OK".into())));
}

#[test]
fn test_interpret_response_declines_success_false() {
    let err = interpret_response(r#"{"success": false, "message": "duplicate cable"}"#).unwrap_err();
    assert_eq!(
        err,
        PublishError::Declined {
            message: "duplicate cable".into()
        }
    );

    let err = interpret_response(r#"{"success": false}"#).unwrap_err();
    assert!(matches!(err, PublishError::Declined { .. }));
}

#[test]
fn test_success_flag_must_be_boolean_to_decline() {
    assert!(interpret_response(r#"{"success": "false"}"#).is_ok());
}

#[test]
fn test_report_counts_and_rate() {
    let results = vec![
        PublishResult {
            description: "A".into(),
            outcome: Ok(Value::Null),
        },
        PublishResult {
            description: "B".into(),
            outcome: Err(PublishError::Rejected {
                status: 500,
                body: "boom".into(),
            }),
        },
        PublishResult {
            description: "C".into(),
            outcome: Ok(Value::Null),
        },
        PublishResult {
            description: "D".into(),
            outcome: Ok(Value::Null),
        },
    ];

    let report = PublishReport::from_results(results, 1.5);
    assert_eq!(report.total, 4);
    assert_eq!(report.succeeded, 3);
    assert_eq!(report.failed, 1);
    assert!((report.success_rate - 75.0).abs() < f64::EPSILON);

    let failures: Vec<_> = report.failures().map(|(d, _)| d).collect();
    assert_eq!(failures, vec!["B"]);
}

#[test]
fn test_empty_report_has_zero_rate() {
    let report = PublishReport::from_results(Vec::new(), 0.0);
    assert_eq!(report.total, 0);
    assert_eq!(report.success_rate, 0.0);
}

#[test]
fn test_result_serializes_success_and_error() {
    let ok = PublishResult {
        description: "ADSS 24F".into(),
        outcome: Ok(json!({"id": 1})),
    };
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({"cableDescription": "ADSS 24F", "success": true, "response": {"id": 1}})
    );

    let failed = PublishResult {
        description: "Unknown".into(),
        outcome: Err(PublishError::Declined {
            message: "bad".into(),
        }),
    };
    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(value["success"], json!(false));
    assert!(value["error"].as_str().unwrap().contains("bad"));
}

#[tokio::test]
async fn test_publish_reports_network_failure() {
    let publisher = unreachable_publisher();
    let record = CableRecord::new().with(CableField::CableDescription, "ADSS 24F");

    let result = publisher.publish(&record).await;
    assert_eq!(result.description, "ADSS 24F");
    assert!(matches!(result.outcome, Err(PublishError::Network { .. })));
}

#[tokio::test]
async fn test_publish_all_continues_after_failures() {
    let publisher = unreachable_publisher();
    let records = vec![CableRecord::new(), CableRecord::new()];

    let report = publisher.publish_all(&records).await;
    assert_eq!(report.total, 2);
    assert_eq!(report.failed, 2);
    assert_eq!(report.results[0].description, "Unknown");
}
