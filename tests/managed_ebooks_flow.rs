//! Integration tests for the managed eBook family using wiremock.
//!
//! - GET  /deviceAppManagement/managedEBooks/{id}?$expand=assignments
//! - POST /deviceAppManagement/managedEBooks/{id}/assign
//! - GET  /deviceAppManagement/managedEBooks/{id}/installSummary
//! - GET  /deviceAppManagement/managedEBooks/{id}/userStateSummary/{id}/deviceStates
//! - GET  /deviceAppManagement/managedEBooks/$count

use graph_dam::auth::TokenProvider;
use graph_dam::client::GraphClient;
use graph_dam::models::*;
use graph_dam::query::{ItemQuery, RequestConfiguration};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> GraphClient {
    let tp = TokenProvider::with_token("mock-token");
    GraphClient::with_base_url(tp, &format!("{}/v1.0", server.uri())).unwrap()
}

#[tokio::test]
async fn get_ebook_with_expanded_assignments() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceAppManagement/managedEBooks/book-1"))
        .and(query_param("$expand", "assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "@odata.type": "#microsoft.graph.iosVppEBook",
            "id": "book-1",
            "displayName": "Employee Handbook",
            "publisher": "Contoso Press",
            "assignments": [ { "id": "asg-1", "installIntent": "available" } ]
        })))
        .mount(&server)
        .await;

    let config = RequestConfiguration::with_query(ItemQuery {
        expand: vec!["assignments".to_string()],
        ..Default::default()
    });
    let book = client
        .device_app_management()
        .managed_e_books()
        .by_id("book-1")
        .get(Some(&config))
        .await
        .unwrap();
    assert_eq!(book.display_name.as_deref(), Some("Employee Handbook"));
    assert_eq!(book.odata_type.as_deref(), Some("#microsoft.graph.iosVppEBook"));
    assert!(book.additional_data["assignments"].is_array());
}

#[tokio::test]
async fn assign_ebook_uses_managed_e_book_assignments_key() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1.0/deviceAppManagement/managedEBooks/book-1/assign"))
        .and(body_json(serde_json::json!({
            "managedEBookAssignments": [
                {
                    "@odata.type": "#microsoft.graph.iosVppEBookAssignment",
                    "target": { "@odata.type": "#microsoft.graph.allDevicesAssignmentTarget" },
                    "installIntent": "required"
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = ManagedEBookAssignRequest {
        managed_e_book_assignments: vec![ManagedEBookAssignment {
            odata_type: Some("#microsoft.graph.iosVppEBookAssignment".to_string()),
            target: Some(AssignmentTarget::all_devices()),
            install_intent: Some(InstallIntent::Required),
            ..Default::default()
        }],
    };
    let response = client
        .device_app_management()
        .managed_e_books()
        .by_id("book-1")
        .assign()
        .post(&request, None)
        .await
        .unwrap();
    assert!(response.is_none());
}

#[tokio::test]
async fn install_summary_and_nested_device_states() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path(
            "/v1.0/deviceAppManagement/managedEBooks/book-1/installSummary",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "book-1",
            "installedDeviceCount": 12,
            "failedDeviceCount": 1,
            "notInstalledDeviceCount": 3,
            "installedUserCount": 10
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/v1.0/deviceAppManagement/managedEBooks/book-1/userStateSummary/user-7/deviceStates",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [
                {
                    "id": "state-1",
                    "deviceName": "IPAD-042",
                    "installState": "failed",
                    "errorCode": "0x87D13B8F"
                }
            ]
        })))
        .mount(&server)
        .await;

    let book = client
        .device_app_management()
        .managed_e_books()
        .by_id("book-1");

    let summary = book.install_summary().get(None).await.unwrap();
    assert_eq!(summary.installed_device_count, Some(12));
    assert_eq!(summary.failed_device_count, Some(1));

    let states = book
        .user_state_summary()
        .by_id("user-7")
        .device_states()
        .get(None)
        .await
        .unwrap();
    assert_eq!(states.value.len(), 1);
    assert_eq!(states.value[0].install_state, Some(InstallState::Failed));
    assert_eq!(states.value[0].device_name.as_deref(), Some("IPAD-042"));
}

#[tokio::test]
async fn count_ebooks() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceAppManagement/managedEBooks/$count"))
        .respond_with(ResponseTemplate::new(200).set_body_string("4\n"))
        .mount(&server)
        .await;

    let count = client
        .device_app_management()
        .managed_e_books()
        .count()
        .get(None)
        .await
        .unwrap();
    assert_eq!(count, 4);
}
