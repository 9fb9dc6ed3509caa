use super::*;
use httpmock::prelude::*;
use reqwest::Client;
use reqwest_middleware::ClientBuilder;

fn client_for(server: &MockServer) -> RemoteConfigClient {
    let client = ClientBuilder::new(Client::new()).build();
    let base_url = server.url("/v1/projects/test-project/remoteConfig");
    RemoteConfigClient::new_with_client(client, base_url)
}

#[tokio::test]
async fn activate_maps_every_parameter() {
    let server = MockServer::start();
    let rc = client_for(&server);

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "parameters": {
                    "welcome_message": {
                        "defaultValue": { "value": "Hello World" }
                    },
                    "test_data": {
                        "defaultValue": {
                            "value": "{\"test_data\":[{\"activePage\":0,\"id\":1}]}"
                        }
                    }
                }
            }));
    });

    let result = rc.activate().await.unwrap();

    assert_eq!(result.parameters.len(), 2);
    let welcome = &result.parameters["welcome_message"];
    assert_eq!(welcome.source, ParameterSource::Remote);
    assert_eq!(welcome.value, b"Hello World".to_vec());
    assert_eq!(
        result.parameters["test_data"].value,
        b"{\"test_data\":[{\"activePage\":0,\"id\":1}]}".to_vec()
    );

    mock.assert();
}

#[tokio::test]
async fn activate_with_no_parameters_is_empty() {
    let server = MockServer::start();
    let rc = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let result = rc.activate().await.unwrap();
    assert!(result.parameters.is_empty());
}

#[tokio::test]
async fn activate_rejects_non_string_values() {
    let server = MockServer::start();
    let rc = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "parameters": {
                    "ok": { "defaultValue": { "value": "fine" } },
                    "retry_count": { "defaultValue": { "value": 3 } }
                }
            }));
    });

    let err = rc.activate().await.unwrap_err();
    match err {
        Error::ValueType { parameter } => assert_eq!(parameter, "retry_count"),
        other => panic!("expected ValueType, got {other:?}"),
    }
}

#[tokio::test]
async fn activate_rejects_parameters_without_a_default_value() {
    let server = MockServer::start();
    let rc = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "parameters": {
                    "conditional_only": {}
                }
            }));
    });

    let err = rc.activate().await.unwrap_err();
    match err {
        Error::ValueType { parameter } => assert_eq!(parameter, "conditional_only"),
        other => panic!("expected ValueType, got {other:?}"),
    }
}

#[tokio::test]
async fn activate_fails_when_the_remote_call_fails() {
    let server = MockServer::start();
    let rc = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "error": {
                    "code": 500,
                    "message": "backend unavailable",
                    "status": "INTERNAL"
                }
            }));
    });

    let err = rc.activate().await.unwrap_err();
    match err {
        Error::ActivationFailed { reason } => {
            assert_eq!(reason, "Failed to call remote config API")
        }
        other => panic!("expected ActivationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn get_document_decodes_the_error_envelope() {
    let server = MockServer::start();
    let rc = client_for(&server);

    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/projects/test-project/remoteConfig");
        then.status(403)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED"
                }
            }));
    });

    let err = rc.get_document().await.unwrap_err();
    match err {
        Error::FetchFailed { reason } => {
            assert_eq!(reason, "The caller does not have permission (code: 403)")
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_credentials_file_is_service_unavailable() {
    let err = RemoteConfigClient::from_credentials_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(
        err,
        Error::ServiceUnavailable(CredentialError::Read(_))
    ));
}
