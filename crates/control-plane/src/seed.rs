// Sample data for local development
//
// Builds Stripe-style webhook rows as if they had arrived through the capture
// route, so the UI and handler generation have realistic payloads to work on.

use crate::storage::CreateWebhookRow;
use hookwatch_core::CAPTURE_STATUS_CODE;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use std::collections::HashMap;

pub const SEED_PATHNAME: &str = "/api/stripe/webhook";

const STRIPE_IPS: &[&str] = &[
    "54.187.174.169",
    "54.187.205.235",
    "54.187.216.72",
    "54.241.31.99",
    "54.241.31.102",
];

const STRIPE_CLIENT_USER_AGENT: &str = r#"{"bindings_version":"8.219.0","lang":"ruby","lang_version":"3.0.0","platform":"x86_64-linux","engine":"ruby","publisher":"stripe","uname":"Linux version 5.4.0","hostname":"ip-10-12-34-56"}"#;

const DAY_SECS: i64 = 86_400;

fn random_id<R: Rng>(rng: &mut R, prefix: &str, len: usize) -> String {
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    format!("{prefix}_{suffix}")
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Wrap a data object in a Stripe event envelope and build the captured row
fn stripe_webhook<R: Rng>(
    rng: &mut R,
    event_type: &str,
    data_object: Value,
    now: i64,
) -> CreateWebhookRow {
    let body = json!({
        "id": random_id(rng, "evt", 24),
        "object": "event",
        "api_version": "2020-08-27",
        "created": now,
        "type": event_type,
        "livemode": false,
        "pending_webhooks": 1,
        "request": {
            "id": random_id(rng, "req", 9),
            "idempotency_key": null,
        },
        "data": { "object": data_object },
    })
    .to_string();

    let signature = format!("t={now},v1={}", random_id(rng, "sig", 64));
    let headers: HashMap<String, String> = [
        ("content-type", "application/json".to_string()),
        (
            "user-agent",
            "Stripe/1.0 (+https://stripe.com/docs/webhooks)".to_string(),
        ),
        ("stripe-signature", signature),
        ("accept", "*/*".to_string()),
        ("accept-encoding", "gzip".to_string()),
        ("content-length", body.len().to_string()),
        (
            "x-stripe-client-user-agent",
            STRIPE_CLIENT_USER_AGENT.to_string(),
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    CreateWebhookRow {
        method: "POST".to_string(),
        pathname: SEED_PATHNAME.to_string(),
        ip: pick(rng, STRIPE_IPS).to_string(),
        status_code: CAPTURE_STATUS_CODE,
        content_type: Some("application/json".to_string()),
        content_length: i32::try_from(body.len()).ok(),
        headers,
        body: Some(body),
        query_params: HashMap::new(),
    }
}

/// 60 webhooks: 20 payment intents (15 succeeded, 5 failed), 15 customer,
/// 15 invoice and 10 subscription events.
pub fn stripe_webhooks<R: Rng>(rng: &mut R, now: i64) -> Vec<CreateWebhookRow> {
    let mut rows = Vec::with_capacity(60);

    for i in 1..=20 {
        let amount = rng.gen_range(500..50_500);
        let currency = pick(rng, &["usd", "eur", "brl"]);
        let order = 1000 + i;

        let (event_type, object) = if i <= 15 {
            (
                "payment_intent.succeeded",
                json!({
                    "id": random_id(rng, "pi", 24),
                    "object": "payment_intent",
                    "amount": amount,
                    "currency": currency,
                    "status": "succeeded",
                    "payment_method": random_id(rng, "pm", 24),
                    "customer": random_id(rng, "cus", 14),
                    "description": format!("Payment for order #{order}"),
                    "metadata": {
                        "order_id": order.to_string(),
                        "customer_email": format!("customer{i}@example.com"),
                    },
                }),
            )
        } else {
            (
                "payment_intent.payment_failed",
                json!({
                    "id": random_id(rng, "pi", 24),
                    "object": "payment_intent",
                    "amount": amount,
                    "currency": currency,
                    "status": "requires_payment_method",
                    "last_payment_error": {
                        "code": "card_declined",
                        "decline_code": "generic_decline",
                        "message": "Your card was declined.",
                    },
                    "customer": random_id(rng, "cus", 14),
                    "description": format!("Failed payment for order #{order}"),
                }),
            )
        };
        rows.push(stripe_webhook(rng, event_type, object, now));
    }

    for i in 1..=15 {
        let event_type = pick(
            rng,
            &["customer.created", "customer.updated", "customer.deleted"],
        );
        let object = json!({
            "id": random_id(rng, "cus", 14),
            "object": "customer",
            "email": format!("customer{i}@example.com"),
            "name": format!("Customer {i}"),
            "phone": format!("+1555000{i:04}"),
            "created": now - rng.gen_range(0..DAY_SECS * 30),
            "metadata": { "user_id": format!("user_{i}") },
        });
        rows.push(stripe_webhook(rng, event_type, object, now));
    }

    for _ in 1..=15 {
        let amount = rng.gen_range(1000..11_000);
        let event_type = pick(
            rng,
            &[
                "invoice.payment_succeeded",
                "invoice.payment_failed",
                "invoice.finalized",
            ],
        );
        let (amount_paid, status) = match event_type {
            "invoice.payment_succeeded" => (amount, "paid"),
            "invoice.payment_failed" => (0, "open"),
            _ => (0, "draft"),
        };
        let object = json!({
            "id": random_id(rng, "in", 24),
            "object": "invoice",
            "amount_due": amount,
            "amount_paid": amount_paid,
            "currency": "usd",
            "customer": random_id(rng, "cus", 14),
            "status": status,
            "subscription": random_id(rng, "sub", 14),
            "period_start": now - DAY_SECS * 30,
            "period_end": now,
        });
        rows.push(stripe_webhook(rng, event_type, object, now));
    }

    for _ in 1..=10 {
        let event_type = pick(
            rng,
            &[
                "customer.subscription.created",
                "customer.subscription.updated",
                "customer.subscription.deleted",
            ],
        );
        let status = if event_type == "customer.subscription.deleted" {
            "canceled"
        } else {
            "active"
        };
        let object = json!({
            "id": random_id(rng, "sub", 14),
            "object": "subscription",
            "customer": random_id(rng, "cus", 14),
            "status": status,
            "current_period_start": now - DAY_SECS * 30,
            "current_period_end": now + DAY_SECS * 30,
            "plan": {
                "id": random_id(rng, "plan", 14),
                "amount": rng.gen_range(1000..6000),
                "currency": "usd",
                "interval": "month",
            },
        });
        rows.push(stripe_webhook(rng, event_type, object, now));
    }

    rows
}
