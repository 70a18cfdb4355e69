use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shell::http::router;
use crate::tests::fixtures::make_test_state;

fn json_request(method: &str, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_of(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn creates_updates_and_deletes_against_the_seeded_store() {
    let state = make_test_state();
    let app: Router = router(state.clone());

    let created = app
        .clone()
        .oneshot(json_request("POST", "/events", r#"{"title":"New Talk"}"#))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(
        json_of(created).await,
        serde_json::json!({"id": 3, "title": "New Talk"})
    );

    let updated = app
        .clone()
        .oneshot(json_request("PATCH", "/events/1", r#"{"title":"Updated"}"#))
        .await
        .unwrap();
    assert_eq!(updated.status(), StatusCode::OK);
    assert_eq!(
        json_of(updated).await,
        serde_json::json!({"id": 1, "title": "Updated"})
    );

    let deleted = app
        .clone()
        .oneshot(Request::delete("/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(
        state.store.list().await.unwrap(),
        vec![Event::new(1, "Updated"), Event::new(3, "New Talk")]
    );

    let listed = app
        .oneshot(Request::get("/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(
        json_of(listed).await,
        serde_json::json!([
            {"id": 1, "title": "Updated"},
            {"id": 3, "title": "New Talk"}
        ])
    );
}

#[tokio::test]
async fn reuses_the_top_id_only_after_it_is_deleted() {
    let state = make_test_state();
    let app = router(state.clone());

    let deleted = app
        .clone()
        .oneshot(Request::delete("/events/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let created = app
        .oneshot(json_request("POST", "/events", r#"{"title":"Again"}"#))
        .await
        .unwrap();
    assert_eq!(
        json_of(created).await,
        serde_json::json!({"id": 2, "title": "Again"})
    );
}

#[tokio::test]
async fn failed_requests_leave_the_store_untouched() {
    let state = make_test_state();
    let app = router(state.clone());
    let before = state.store.list().await.unwrap();

    let requests = [
        json_request("POST", "/events", r#"{"title":""}"#),
        json_request("PATCH", "/events/99", r#"{"title":"x"}"#),
        Request::delete("/events/99").body(Body::empty()).unwrap(),
    ];
    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    assert_eq!(state.store.list().await.unwrap(), before);
}
