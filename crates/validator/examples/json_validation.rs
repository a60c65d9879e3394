//! Validating JSON payloads with strata-validator.
//!
//! Run: `RUST_LOG=debug cargo run -p strata-validator --example json_validation`

use serde_json::{Value, json};
use strata_validator::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    path_rules();
    conditional_rules();
    error_reporting();
}

fn order_validator() -> Validator {
    Validator::new()
        .rule("customer.email", required())
        .rule("customer.email", pattern(r"^[^@\s]+@[^@\s]+$").expect("valid regex"))
        .rule("items", min_length(1))
        .rule("items[].sku", required())
        .rule("items[].qty", positive())
        .rule("status", one_of(["draft", "placed", "shipped"]))
}

/// Rules bound to concrete and wildcard paths.
fn path_rules() {
    println!("=== Path Rules ===\n");

    let validator = order_validator();
    let order = json!({
        "customer": { "email": "ana@example.com" },
        "items": [
            { "sku": "A-1", "qty": 2 },
            { "sku": "", "qty": 0 }
        ],
        "status": "lost"
    });

    report(&validator, &order);
}

/// Rules gated on sibling fields.
fn conditional_rules() {
    println!("\n=== Conditional Rules ===\n");

    let validator = Validator::new()
        .rule("gift_note", if_field("gift", max_length(140)))
        .rule("gift_note", unless_field("gift", max_length(0)))
        .rule("confirm_email", equals_field("email"));

    for doc in [
        json!({ "confirm_email": "a@b.c", "email": "a@b.c", "gift": true, "gift_note": "Enjoy!" }),
        json!({ "confirm_email": "a@b.c", "email": "x@y.z", "gift": false, "gift_note": "Enjoy!" }),
    ] {
        report(&validator, &doc);
    }
}

/// Machine-readable error output.
fn error_reporting() {
    println!("\n=== Error Reporting ===\n");

    let errors = order_validator().validate_all(&json!({ "items": [] }));
    println!("{:#}", errors.to_json_value());
}

fn report(validator: &Validator, doc: &Value) {
    match validator.validate(doc) {
        Ok(()) => println!("valid: {doc}"),
        Err(errors) => {
            println!("invalid: {doc}");
            for error in &errors {
                println!("  - {error}");
            }
        }
    }
}
