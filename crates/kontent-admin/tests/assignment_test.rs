//! Assignment workflow tests against a mocked Management API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kontent_admin::model::AssignOptions;
use kontent_admin::{AdminClient, AdminClientConfig};

const ENV: &str = "env-1";
const LANG: &str = "en-US";

fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::new(AdminClientConfig::new(ENV, "mk-test").with_base_url(&server.uri())).unwrap()
}

fn variant_path(item_id: &str) -> String {
    format!("/projects/{ENV}/items/{item_id}/variants/codename/{LANG}")
}

fn variant_body(item_id: &str, contributors: serde_json::Value) -> serde_json::Value {
    json!({
        "item": {"id": item_id},
        "language": {"codename": LANG},
        "elements": [
            {"element": {"id": "title"}, "value": "On Roasts"},
            {"element": {"id": "body"}, "value": "<p>Long-form content</p>"}
        ],
        "contributors": contributors
    })
}

#[tokio::test]
async fn assign_echoes_elements_and_appends_contributor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .and(header("Authorization", "Bearer mk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body("item-1", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    // The written elements must be exactly what was just read; only the
    // contributor list changes.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .and(body_json(json!({
            "elements": [
                {"element": {"id": "title"}, "value": "On Roasts"},
                {"element": {"id": "body"}, "value": "<p>Long-form content</p>"}
            ],
            "contributors": [{"id": "user-1", "role": "contributor"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("item-1", json!([{"id": "user-1", "role": "contributor"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert!(result.success, "unexpected failure: {:?}", result.error);
    let variant = result.variant.unwrap();
    assert_eq!(variant.contributors.len(), 1);
    assert_eq!(variant.contributors[0].id, "user-1");
}

#[tokio::test]
async fn assign_succeeds_when_upsert_returns_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body("item-1", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    // A bare 204 acknowledgement is still a successful write; the returned
    // variant is rebuilt from the payload that was sent.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert!(result.success, "unexpected failure: {:?}", result.error);
    let variant = result.variant.unwrap();
    assert_eq!(variant.item.id.as_deref(), Some("item-1"));
    assert_eq!(variant.language.codename.as_deref(), Some(LANG));
    assert_eq!(variant.elements.len(), 2);
    assert_eq!(variant.contributors.len(), 1);
    assert_eq!(variant.contributors[0].id, "user-1");
}

#[tokio::test]
async fn reassigning_same_user_updates_role_without_duplicate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body(
            "item-1",
            json!([{"id": "user-1", "role": "contributor"}]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    // One entry, role replaced by the latest call; no duplicate appended.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .and(body_json(json!({
            "elements": [
                {"element": {"id": "title"}, "value": "On Roasts"},
                {"element": {"id": "body"}, "value": "<p>Long-form content</p>"}
            ],
            "contributors": [{"id": "user-1", "role": "reviewer"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("item-1", json!([{"id": "user-1", "role": "reviewer"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::with_role("reviewer"))
        .await
        .unwrap();

    assert!(result.success);
}

#[tokio::test]
async fn removing_absent_contributor_is_successful_noop() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body(
            "item-1",
            json!([{"id": "user-1", "role": "contributor"}]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    // The contributor list is written back unchanged.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .and(body_json(json!({
            "elements": [
                {"element": {"id": "title"}, "value": "On Roasts"},
                {"element": {"id": "body"}, "value": "<p>Long-form content</p>"}
            ],
            "contributors": [{"id": "user-1", "role": "contributor"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("item-1", json!([{"id": "user-1", "role": "contributor"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .remove_assignment("item-1", "user-9", Some(LANG))
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.variant.unwrap().contributors.len(), 1);
}

#[tokio::test]
async fn remove_assignment_filters_contributor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body(
            "item-1",
            json!([
                {"id": "user-1", "role": "contributor"},
                {"id": "user-2", "role": "reviewer"}
            ]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .and(body_json(json!({
            "elements": [
                {"element": {"id": "title"}, "value": "On Roasts"},
                {"element": {"id": "body"}, "value": "<p>Long-form content</p>"}
            ],
            "contributors": [{"id": "user-2", "role": "reviewer"}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("item-1", json!([{"id": "user-2", "role": "reviewer"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .remove_assignment("item-1", "user-1", Some(LANG))
        .await
        .unwrap();

    assert!(result.success);
}

#[tokio::test]
async fn bulk_assign_collects_per_item_outcomes_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("a")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body("a", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(variant_path("a")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("a", json!([{"id": "user-1", "role": "contributor"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(variant_path("b")))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("The requested content item was not found"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .bulk_assign(&["a", "b"], "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item_id, "a");
    assert!(results[0].success);
    assert_eq!(results[1].item_id, "b");
    assert!(!results[1].success);
    assert!(results[1].error.as_deref().unwrap().contains("not found"));
}

#[tokio::test]
async fn published_conflict_unpublishes_once_and_retries_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body("item-1", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    // First write hits the published variant.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            "The variant is published and cannot be updated. Create a new version first.",
        ))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!(
            "/projects/{ENV}/items/item-1/variants/codename/{LANG}/unpublish"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // The retried write lands on the now-draft variant.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(variant_body("item-1", json!([{"id": "user-1", "role": "contributor"}]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert!(result.success, "retry after unpublish should succeed: {:?}", result.error);
}

#[tokio::test]
async fn failed_retry_after_unpublish_surfaces_final_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body("item-1", json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            "The variant is published and cannot be updated.",
        ))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!(
            "/projects/{ENV}/items/item-1/variants/codename/{LANG}/unpublish"
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // No second unpublish, no second retry: the failure is final.
    Mock::given(method("PUT"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal server error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.error.as_deref().unwrap().contains("500"));
}

#[tokio::test]
async fn assignments_treats_missing_variant_as_unassigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(404).set_body_string("variant was not found"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let assignments = client.assignments("item-1", Some(LANG)).await.unwrap();

    assert!(assignments.contributors.is_empty());
    assert!(assignments.elements.is_empty());
}

#[tokio::test]
async fn assignments_returns_current_contributors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(variant_body(
            "item-1",
            json!([{"id": "user-2", "role": "reviewer"}]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let assignments = client.assignments("item-1", Some(LANG)).await.unwrap();

    assert_eq!(assignments.contributors.len(), 1);
    assert_eq!(assignments.contributors[0].id, "user-2");
    assert_eq!(assignments.contributors[0].role, "reviewer");
    assert_eq!(assignments.elements.len(), 2);
}

#[tokio::test]
async fn assign_maps_permission_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(variant_path("item-1")))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient permissions"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .assign("item-1", "user-1", Some(LANG), &AssignOptions::default())
        .await
        .unwrap();

    assert!(!result.success);
    assert!(result.error.as_deref().unwrap().contains("permission denied"));
}
