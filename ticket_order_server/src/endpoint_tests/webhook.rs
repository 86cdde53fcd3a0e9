use actix_web::http::StatusCode;
use serde_json::json;
use ticket_order_engine::traits::OrderStoreError;

use super::{
    helpers::{alice_session, completed_checkout_event, post_event, post_event_with_options},
    mocks::MockStore,
};
use crate::{config::WebhookOptions, helpers::TicketPolicy};

#[actix_web::test]
async fn irrelevant_event_types_are_acked_without_a_write() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store.expect_insert_order().times(0);
    // The object here is not a checkout session at all; the handler must not even look at it.
    let event = json!({
        "type": "payment_intent.succeeded",
        "data": { "object": { "id": "pi_123", "amount": 999, "currency": "aud" } }
    });
    let (status, body) = post_event(store, &event).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[actix_web::test]
async fn completed_checkout_appends_one_derived_record() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .withf(|order| {
            order.player_name == "Alice"
                && order.tickets.value() == 30
                && order.session_id.as_str() == "cs_test_123"
                && !order.timestamp.is_empty()
        })
        .times(1)
        .returning(|_| Ok(42));
    let (status, body) = post_event(store, &completed_checkout_event(alice_session())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[actix_web::test]
async fn direct_policy_records_the_subtotal_verbatim() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store.expect_insert_order().withf(|order| order.tickets.value() == 1500).times(1).returning(|_| Ok(1));
    let options = WebhookOptions { ticket_policy: TicketPolicy::Direct, ..Default::default() };
    let (status, _) = post_event_with_options(store, options, &completed_checkout_event(alice_session())).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn absent_subtotal_records_zero_tickets() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store.expect_insert_order().withf(|order| order.tickets.value() == 0).times(1).returning(|_| Ok(1));
    let session = json!({
        "id": "cs_no_total",
        "amount_subtotal": null,
        "custom_fields": [ { "text": { "value": "Alice" } } ]
    });
    let (status, _) = post_event(store, &completed_checkout_event(session)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn missing_custom_fields_record_an_unknown_player() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store.expect_insert_order().withf(|order| order.player_name == "Unknown").times(1).returning(|_| Ok(1));
    let session = json!({ "id": "cs_anon", "amount_subtotal": 100 });
    let (status, _) = post_event(store, &completed_checkout_event(session)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn replaying_an_event_appends_a_second_record() {
    let _ = env_logger::try_init();
    // No dedup by session id: the same event delivered twice must hit the store twice.
    let mut store = MockStore::new();
    store.expect_insert_order().times(2).returning(|_| Ok(1));
    let event = completed_checkout_event(alice_session());
    let api = ticket_order_engine::OrderApi::new(store);
    let app = actix_web::App::new()
        .app_data(actix_web::web::Data::new(api))
        .app_data(actix_web::web::Data::new(WebhookOptions::default()))
        .configure(crate::routes::configure_webhook::<MockStore>);
    let service = actix_web::test::init_service(app).await;
    for _ in 0..2 {
        let req = actix_web::test::TestRequest::post().uri("/webhook").set_json(&event).to_request();
        let res = actix_web::test::call_service(&service, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn store_failure_yields_a_client_error_and_no_record() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store
        .expect_insert_order()
        .times(1)
        .returning(|_| Err(OrderStoreError::DatabaseError("order store unreachable".to_string())));
    let (status, body) = post_event(store, &completed_checkout_event(alice_session())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Webhook handler failed."));
}

#[actix_web::test]
async fn malformed_session_object_yields_a_client_error() {
    let _ = env_logger::try_init();
    let mut store = MockStore::new();
    store.expect_insert_order().times(0);
    // Relevant type, but the object has no session id
    let event = completed_checkout_event(json!({ "amount_subtotal": 1500 }));
    let (status, body) = post_event(store, &event).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("The event payload was not in the expected format."));
}

#[actix_web::test]
async fn health_check_responds() {
    let _ = env_logger::try_init();
    let app = actix_web::App::new().service(crate::routes::health);
    let service = actix_web::test::init_service(app).await;
    let req = actix_web::test::TestRequest::get().uri("/health").to_request();
    let res = actix_web::test::call_service(&service, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}
