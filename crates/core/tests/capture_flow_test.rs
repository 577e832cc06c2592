// Capture-to-prompt flow without a store
//
// Normalizes a batch of requests, pages over them the way the stores do, and
// builds a handler prompt from the bodies.
//
// Run with: cargo test -p hookwatch-core --test capture_flow_test

use hookwatch_core::{
    build_handler_prompt, join_payloads, CaptureBody, CapturedRequest, EchoHandlerGenerator,
    HandlerGenerator, NewWebhook, Page, PageRequest,
};
use serde_json::json;
use uuid::Uuid;

fn stripe_event(event_type: &str) -> CapturedRequest {
    CapturedRequest {
        method: "post".to_string(),
        path: "/capture/stripe/webhook".to_string(),
        query: Some("livemode=false".to_string()),
        ip: "54.187.174.169".to_string(),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Stripe-Signature".to_string(), "t=1,v1=abc".to_string()),
        ],
        body: Some(CaptureBody::Structured(json!({ "type": event_type }))),
    }
}

/// Newest-first slice of a store, as `list_webhooks` returns it
fn fetch(store: &[(Uuid, NewWebhook)], request: &PageRequest) -> Vec<Uuid> {
    store
        .iter()
        .rev()
        .map(|(id, _)| *id)
        .filter(|id| request.admits(*id))
        .take(request.fetch_limit() as usize)
        .collect()
}

#[test]
fn test_captured_requests_share_one_shape() {
    let webhook = stripe_event("invoice.paid").normalize();

    assert_eq!(webhook.method, "POST");
    assert_eq!(webhook.pathname, "/stripe/webhook");
    assert_eq!(webhook.status_code, 200);
    assert_eq!(webhook.content_type.as_deref(), Some("application/json"));
    assert_eq!(webhook.content_length, None);
    assert_eq!(webhook.headers["stripe-signature"], "t=1,v1=abc");
    assert_eq!(webhook.query_params["livemode"], "false");
    assert_eq!(webhook.body.as_deref(), Some(r#"{"type":"invoice.paid"}"#));
}

#[test]
fn test_pages_cover_every_capture_once() {
    let store: Vec<(Uuid, NewWebhook)> = (0..9)
        .map(|i| (Uuid::now_v7(), stripe_event(&format!("event.{i}")).normalize()))
        .collect();

    let mut request = PageRequest::new(Some(4), None).unwrap();
    let mut seen = Vec::new();
    loop {
        let page = Page::from_overfetch(fetch(&store, &request), request.limit());
        seen.extend(page.items.iter().copied());
        match page.next_cursor {
            Some(cursor) => request = PageRequest::new(Some(4), Some(cursor)).unwrap(),
            None => break,
        }
    }

    let expected: Vec<Uuid> = store.iter().rev().map(|(id, _)| *id).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_bodies_feed_the_generator() {
    let bodies = vec![
        stripe_event("customer.created").normalize().body,
        CapturedRequest::default().normalize().body,
        stripe_event("customer.deleted").normalize().body,
    ];

    let payloads = join_payloads(bodies);
    assert_eq!(
        payloads,
        "{\"type\":\"customer.created\"}\n\n{\"type\":\"customer.deleted\"}"
    );

    let prompt = build_handler_prompt(&payloads);
    assert!(prompt.contains("customer.created"));
    assert!(prompt.contains("handleWebhook"));

    let code = EchoHandlerGenerator.generate(&payloads).await.unwrap();
    assert_eq!(code, payloads);
}
