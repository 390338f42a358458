//! Integration tests for the mobile app family using wiremock.
//!
//! - GET    /deviceAppManagement/mobileApps  (list with OData options)
//! - POST   /deviceAppManagement/mobileApps  (create)
//! - PATCH  /deviceAppManagement/mobileApps/{id}  (update)
//! - DELETE /deviceAppManagement/mobileApps/{id}  (delete)
//! - POST   /deviceAppManagement/mobileApps/{id}/assign  (assign)
//! - GET    /deviceAppManagement/mobileApps/{id}/categories  (read-only categories)
//! - GET    /deviceAppManagement/mobileAppConfigurations/{id}/...  (status summaries)

use graph_dam::auth::TokenProvider;
use graph_dam::client::GraphClient;
use graph_dam::models::*;
use graph_dam::query::{ItemQuery, ListQuery, RequestConfiguration};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> GraphClient {
    let tp = TokenProvider::with_token("mock-token");
    GraphClient::with_base_url(tp, &format!("{}/v1.0", server.uri())).unwrap()
}

// ── mobileApps ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_mobile_apps_passes_odata_options() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceAppManagement/mobileApps"))
        .and(query_param("$filter", "isFeatured eq true"))
        .and(query_param("$select", "id,displayName,publishingState"))
        .and(query_param("$top", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#deviceAppManagement/mobileApps",
            "value": [
                {
                    "@odata.type": "#microsoft.graph.iosStoreApp",
                    "id": "app-1",
                    "displayName": "Contoso Notes",
                    "publishingState": "published",
                    "bundleId": "com.contoso.notes"
                },
                {
                    "@odata.type": "#microsoft.graph.win32LobApp",
                    "id": "app-2",
                    "displayName": "Contoso Agent",
                    "publishingState": "somethingNew"
                }
            ]
        })))
        .mount(&server)
        .await;

    let config = RequestConfiguration::with_query(ListQuery {
        filter: Some("isFeatured eq true".to_string()),
        select: vec![
            "id".to_string(),
            "displayName".to_string(),
            "publishingState".to_string(),
        ],
        top: Some(5),
        ..Default::default()
    });
    let page = client
        .device_app_management()
        .mobile_apps()
        .get(Some(&config))
        .await
        .unwrap();

    assert_eq!(page.value.len(), 2);
    let notes = &page.value[0];
    assert_eq!(notes.odata_type.as_deref(), Some("#microsoft.graph.iosStoreApp"));
    assert_eq!(notes.publishing_state, Some(MobileAppPublishingState::Published));
    assert_eq!(notes.additional_data["bundleId"], "com.contoso.notes");
    assert_eq!(
        page.value[1].publishing_state,
        Some(MobileAppPublishingState::Unknown),
        "unknown enum members should not fail the page"
    );
}

#[tokio::test]
async fn create_mobile_app_returns_created_entity() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1.0/deviceAppManagement/mobileApps"))
        .and(body_json(serde_json::json!({
            "@odata.type": "#microsoft.graph.webApp",
            "displayName": "Intranet",
            "publisher": "Contoso",
            "appUrl": "https://intranet.contoso.com"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "@odata.type": "#microsoft.graph.webApp",
            "id": "new-app",
            "displayName": "Intranet",
            "publisher": "Contoso",
            "createdDateTime": "2026-10-18T08:00:00Z",
            "appUrl": "https://intranet.contoso.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = MobileApp {
        odata_type: Some("#microsoft.graph.webApp".to_string()),
        display_name: Some("Intranet".to_string()),
        publisher: Some("Contoso".to_string()),
        ..Default::default()
    };
    app.additional_data
        .insert("appUrl".to_string(), "https://intranet.contoso.com".into());

    let created = client
        .device_app_management()
        .mobile_apps()
        .post(&app, None)
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("new-app"));
    assert!(created.created_date_time.is_some());
}

#[tokio::test]
async fn update_and_delete_mobile_app() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("PATCH"))
        .and(path("/v1.0/deviceAppManagement/mobileApps/app-1"))
        .and(body_json(serde_json::json!({ "isFeatured": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/deviceAppManagement/mobileApps/app-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let app = client.device_app_management().mobile_apps().by_id("app-1");
    let patched = app
        .patch(
            &MobileApp {
                is_featured: Some(true),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    assert!(patched.is_none());
    app.delete(None).await.unwrap();
}

#[tokio::test]
async fn assign_posts_assignment_list() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("POST"))
        .and(path("/v1.0/deviceAppManagement/mobileApps/app-1/assign"))
        .and(body_partial_json(serde_json::json!({
            "mobileAppAssignments": [
                {
                    "intent": "required",
                    "target": {
                        "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                        "groupId": "group-1"
                    }
                }
            ]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = MobileAppAssignRequest {
        mobile_app_assignments: vec![MobileAppAssignment {
            intent: Some(InstallIntent::Required),
            target: Some(AssignmentTarget::group("group-1")),
            ..Default::default()
        }],
    };
    client
        .device_app_management()
        .mobile_apps()
        .by_id("app-1")
        .assign()
        .post(&request, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn app_categories_and_assignment_item() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v1.0/deviceAppManagement/mobileApps/app-1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": [ { "id": "cat-1", "displayName": "Productivity" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/v1.0/deviceAppManagement/mobileApps/app-1/assignments/asg-1",
        ))
        .and(query_param("$expand", "target"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "asg-1",
            "intent": "available",
            "target": { "@odata.type": "#microsoft.graph.allLicensedUsersAssignmentTarget" }
        })))
        .mount(&server)
        .await;

    let app = client.device_app_management().mobile_apps().by_id("app-1");
    let categories = app.categories().get(None).await.unwrap();
    assert_eq!(categories.value[0].display_name.as_deref(), Some("Productivity"));

    let config = RequestConfiguration::with_query(ItemQuery {
        expand: vec!["target".to_string()],
        ..Default::default()
    });
    let assignment = app
        .assignments()
        .by_id("asg-1")
        .get(Some(&config))
        .await
        .unwrap();
    assert_eq!(assignment.intent, Some(InstallIntent::Available));
    assert_eq!(
        assignment.target.unwrap(),
        AssignmentTarget::all_licensed_users()
    );
}

// ── mobileAppConfigurations ────────────────────────────────────────────

#[tokio::test]
async fn configuration_status_summary() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path(
            "/v1.0/deviceAppManagement/mobileAppConfigurations/cfg-1/deviceStatusSummary",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cfg-1_summary",
            "successCount": 40,
            "errorCount": 2,
            "pendingCount": 5
        })))
        .mount(&server)
        .await;

    let summary = client
        .device_app_management()
        .mobile_app_configurations()
        .by_id("cfg-1")
        .device_status_summary()
        .get(None)
        .await
        .unwrap();
    assert_eq!(summary.success_count, Some(40));
    assert_eq!(summary.error_count, Some(2));
}
