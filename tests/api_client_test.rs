mod common;

use std::sync::Arc;

use common::{client_with_store, spawn};
use parkeasy::error::Error;
use parkeasy::models::booking::BookingUpdate;
use parkeasy::models::common::Acknowledgement;
use parkeasy::models::parking::{LotQuery, SlotType};
use parkeasy::validation::forms::BulkSlotsForm;
use parkeasy::{ApiClient, MemoryTokenStore, RequestOptions, TokenStore, TOKEN_STORAGE_KEY};
use serde_json::{json, Value};

#[tokio::test]
async fn requests_without_a_token_carry_no_authorization_header() {
    let (client, recorder) = client_with_store(Arc::new(MemoryTokenStore::new())).await;

    let lots = client.get_parking_lots(LotQuery::default()).await.unwrap();
    assert_eq!(lots.len(), 3);

    let sent = recorder.last();
    assert_eq!(sent.authorization, None);
    assert_eq!(sent.content_type.as_deref(), Some("application/json"));
    assert_eq!(sent.query, None);
}

#[tokio::test]
async fn token_is_attached_between_set_and_clear() {
    let store = Arc::new(MemoryTokenStore::new());
    let (client, recorder) = client_with_store(store.clone()).await;

    client.set_token("t0k3n");
    assert_eq!(store.get(TOKEN_STORAGE_KEY).unwrap().as_deref(), Some("t0k3n"));

    client.get_parking_lots(LotQuery::default()).await.unwrap();
    client.get_bookings(None).await.unwrap();
    for sent in recorder.all() {
        assert_eq!(sent.authorization.as_deref(), Some("Bearer t0k3n"));
    }

    client.clear_token();
    assert!(!client.has_token());
    assert_eq!(store.get(TOKEN_STORAGE_KEY).unwrap(), None);

    client.get_parking_lots(LotQuery::default()).await.unwrap();
    assert_eq!(recorder.last().authorization, None);
}

#[tokio::test]
async fn login_persists_the_token_for_later_requests() {
    let store = Arc::new(MemoryTokenStore::new());
    let (client, recorder) = client_with_store(store.clone()).await;

    let response = client.login("a@b.com", "x").await.unwrap();
    assert_eq!(response.access_token, "abc");
    assert_eq!(response.token_type, "bearer");
    assert_eq!(store.get(TOKEN_STORAGE_KEY).unwrap().as_deref(), Some("abc"));

    let login_request = recorder.last();
    assert_eq!(login_request.path, "/api/auth/login");
    assert_eq!(login_request.authorization, None);
    let body: Value = serde_json::from_str(&login_request.body).unwrap();
    assert_eq!(body, json!({ "email": "a@b.com", "password": "x" }));

    let user = client.get_current_user().await.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(recorder.last().authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn failed_login_leaves_no_token_behind() {
    let store = Arc::new(MemoryTokenStore::new());
    let (client, _recorder) = client_with_store(store.clone()).await;

    let err = client.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(err.message(), "Incorrect email or password");
    assert!(!client.has_token());
    assert_eq!(store.get(TOKEN_STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn persisted_token_is_picked_up_on_construction() {
    let (client, recorder) = client_with_store(Arc::new(MemoryTokenStore::with_token("abc"))).await;

    assert!(client.has_token());
    client.get_current_user().await.unwrap();
    assert_eq!(recorder.last().authorization.as_deref(), Some("Bearer abc"));
}

#[tokio::test]
async fn no_content_resolves_to_an_empty_object() {
    let (client, _recorder) = client_with_store(Arc::new(MemoryTokenStore::new())).await;

    let ack = client.delete_parking_lot("lot-2").await.unwrap();
    assert_eq!(ack, Acknowledgement::default());

    let raw: Value = client
        .request("/api/parking/lots/lot-2", RequestOptions::delete())
        .await
        .unwrap();
    assert_eq!(raw, json!({}));
}

#[tokio::test]
async fn backend_detail_becomes_the_error_message() {
    let (client, recorder) = client_with_store(Arc::new(MemoryTokenStore::with_token("abc"))).await;

    let err = client
        .update_booking("b-42", &BookingUpdate::cancel())
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Not authorized");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));

    let sent = recorder.last();
    assert_eq!(sent.method, "PUT");
    assert_eq!(sent.path, "/api/bookings/b-42");
    let body: Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(body, json!({ "status": "cancelled" }));
    // a 403 is not a credentials problem; the token stays
    assert!(client.has_token());
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_the_status() {
    let (client, _recorder) = client_with_store(Arc::new(MemoryTokenStore::new())).await;

    let err = client.get_dashboard_stats().await.unwrap_err();
    assert!(err.message().contains("500"), "got {:?}", err.message());
    assert!(matches!(err, Error::Api { .. }));
}

#[tokio::test]
async fn rejected_token_is_cleared() {
    let store = Arc::new(MemoryTokenStore::with_token("expired"));
    let (client, _recorder) = client_with_store(store.clone()).await;

    let err = client.get_current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message(), "Could not validate credentials");
    assert!(!client.has_token());
    assert_eq!(store.get(TOKEN_STORAGE_KEY).unwrap(), None);
}

#[tokio::test]
async fn lot_listing_is_returned_untouched() {
    let (client, _recorder) = client_with_store(Arc::new(MemoryTokenStore::new())).await;

    let lots = client.get_parking_lots(LotQuery::default()).await.unwrap();
    assert_eq!(lots.len(), 3);
    assert_eq!(lots.iter().filter(|lot| !lot.is_active).count(), 1);

    let visible: Vec<_> = lots.iter().filter(|lot| lot.is_active).collect();
    assert_eq!(visible.len(), 2);
}

#[tokio::test]
async fn filters_are_sent_as_query_parameters() {
    let (client, recorder) = client_with_store(Arc::new(MemoryTokenStore::new())).await;

    client
        .get_parking_lots(LotQuery::near(19.07, 72.87, 5.0))
        .await
        .unwrap();
    assert_eq!(
        recorder.last().query.as_deref(),
        Some("latitude=19.07&longitude=72.87&max_distance=5")
    );

    let result = client
        .create_bulk_parking_slots(
            "lot-1",
            &BulkSlotsForm {
                start_number: 1,
                count: 10,
                slot_type: SlotType::Electric,
                floor_level: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(result.created_count, 10);

    let sent = recorder.last();
    assert_eq!(sent.path, "/api/admin/parking-lots/lot-1/slots/bulk");
    assert_eq!(
        sent.query.as_deref(),
        Some("start_number=1&count=10&slot_type=electric&floor_level=2")
    );
    assert_eq!(sent.body, "");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let (base_url, _recorder) = spawn(axum::Router::new()).await;
    let client = ApiClient::new(&base_url, Arc::new(MemoryTokenStore::new()));
    // nothing is routed, so the backend answers 404 with an empty body
    let err = client.get_vehicles().await.unwrap_err();
    assert!(err.message().contains("404"));

    let closed = ApiClient::new("http://127.0.0.1:1", Arc::new(MemoryTokenStore::new()));
    let err = closed.get_vehicles().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.message(), "An error occurred");
}
