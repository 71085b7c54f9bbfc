// Tests for the credential rotation executor using MockDriver.
//
// These validate ordering, short-circuiting, and the error taxonomy without
// making real API calls.

mod test_utils;

use scenescribe_core::{CredentialSet, GenerateRequest};
use scenescribe_error::{GeminiErrorKind, RotationErrorKind, ScenescribeErrorKind};
use scenescribe_models::RotatingExecutor;
use test_utils::MockDriver;

fn test_request() -> GenerateRequest {
    GenerateRequest::builder()
        .model("gemini-2.5-flash")
        .prompt("Test")
        .build()
        .expect("Failed to build test request")
}

fn quota_error() -> GeminiErrorKind {
    GeminiErrorKind::Http {
        status_code: 429,
        message: "Quota exceeded".to_string(),
    }
}

#[tokio::test]
async fn first_credential_success_stops_rotation() -> anyhow::Result<()> {
    let executor = RotatingExecutor::new(MockDriver::new_success("ok"));
    let keys = CredentialSet::parse("key-a key-b key-c");

    let response = executor.execute(&keys, &test_request()).await?;

    assert_eq!(response.text, "ok");
    assert_eq!(executor.driver().call_count(), 1);
    assert_eq!(executor.driver().attempted_keys(), vec!["key-a"]);
    Ok(())
}

#[tokio::test]
async fn failing_credentials_are_each_tried_once_in_order() -> anyhow::Result<()> {
    let driver = MockDriver::new_fail_then_succeed(2, quota_error(), "late success");
    let executor = RotatingExecutor::new(driver);
    let keys = CredentialSet::parse("key-a key-b key-c key-d");

    let response = executor.execute(&keys, &test_request()).await?;

    assert_eq!(response.text, "late success");
    // key-d is never reached: key-c succeeded
    assert_eq!(
        executor.driver().attempted_keys(),
        vec!["key-a", "key-b", "key-c"]
    );
    Ok(())
}

#[tokio::test]
async fn empty_credentials_fail_without_backend_call() {
    let executor = RotatingExecutor::new(MockDriver::new_success("unreachable"));
    let keys = CredentialSet::parse("   \n\t ");

    let err = executor
        .execute(&keys, &test_request())
        .await
        .expect_err("blank credential string must fail");

    match err.kind() {
        ScenescribeErrorKind::Rotation(rotation) => {
            assert_eq!(rotation.kind, RotationErrorKind::NoCredentials);
        }
        other => panic!("expected rotation error, got {other:?}"),
    }
    assert_eq!(executor.driver().call_count(), 0);
}

#[tokio::test]
async fn all_failures_surface_exhaustion_with_last_error() {
    let executor = RotatingExecutor::new(MockDriver::new_error(quota_error()));
    let keys = CredentialSet::parse("key-a key-b key-c");

    let err = executor
        .execute(&keys, &test_request())
        .await
        .expect_err("all keys failing must exhaust the set");

    match err.kind() {
        ScenescribeErrorKind::Rotation(rotation) => match &rotation.kind {
            RotationErrorKind::Exhausted {
                attempts,
                last_error,
            } => {
                assert_eq!(*attempts, 3);
                assert!(last_error.contains("Quota exceeded"));
            }
            other => panic!("expected exhausted, got {other:?}"),
        },
        other => panic!("expected rotation error, got {other:?}"),
    }
    assert_eq!(executor.driver().call_count(), 3);
}

#[tokio::test]
async fn exhaustion_message_is_distinct_from_per_credential_errors() {
    let executor = RotatingExecutor::new(MockDriver::new_error(quota_error()));
    let keys = CredentialSet::parse("key-a key-b");

    let err = executor
        .execute(&keys, &test_request())
        .await
        .expect_err("all keys failing must exhaust the set");

    let message = format!("{err}");
    assert!(message.contains("All 2 API keys failed"));
    assert!(!message.starts_with("HTTP 429"));
}

#[tokio::test]
async fn duplicate_keys_are_attempted_separately() -> anyhow::Result<()> {
    let driver = MockDriver::new_fail_then_succeed(1, quota_error(), "ok");
    let executor = RotatingExecutor::new(driver);
    let keys = CredentialSet::parse("same-key same-key");

    let response = executor.execute(&keys, &test_request()).await?;

    assert_eq!(response.text, "ok");
    assert_eq!(executor.driver().call_count(), 2);
    Ok(())
}
