use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, App};
use serde_json::{json, Value};
use ticket_order_engine::OrderApi;

use crate::{
    config::WebhookOptions,
    endpoint_tests::mocks::MockStore,
    routes::configure_webhook,
    stripe_event::CHECKOUT_SESSION_COMPLETED,
};

/// Mounts the webhook route against the given mock store and posts `body` to it.
pub async fn post_event(store: MockStore, body: &Value) -> (StatusCode, String) {
    post_event_with_options(store, WebhookOptions::default(), body).await
}

pub async fn post_event_with_options(
    store: MockStore,
    options: WebhookOptions,
    body: &Value,
) -> (StatusCode, String) {
    let api = OrderApi::new(store);
    let app = App::new()
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(options))
        .configure(configure_webhook::<MockStore>);
    let service = test::init_service(app).await;
    let req = TestRequest::post().uri("/webhook").set_json(body).to_request();
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

/// A `checkout.session.completed` envelope around the given session object.
pub fn completed_checkout_event(session: Value) -> Value {
    json!({
        "id": "evt_1PqW2x",
        "object": "event",
        "type": CHECKOUT_SESSION_COMPLETED,
        "data": { "object": session }
    })
}

/// A typical completed checkout: $15.00 subtotal, player name "Alice".
pub fn alice_session() -> Value {
    json!({
        "id": "cs_test_123",
        "object": "checkout.session",
        "amount_subtotal": 1500,
        "currency": "aud",
        "custom_fields": [
            { "key": "playername", "type": "text", "text": { "value": "Alice" } }
        ]
    })
}
