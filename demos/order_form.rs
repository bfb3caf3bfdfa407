//! Order Registration Form
//!
//! This example shows the order form and its single-space placeholders.
//!
//! Key concepts:
//! - Placeholders that look empty but pass loose checks
//! - Opting into strict numeric validation
//! - Sharing one engine between several input callbacks
//! - Reporting a failed submission to the user
//!
//! Run with: cargo run --example order_form

use formstate::core::{FieldValue, FieldValues};
use formstate::engine::{ChangeEvent, SharedForm};
use formstate::field_enum;
use formstate::host::{ApiError, FormConfig, FormController, RecordApi};
use formstate::validation::{required, required_numeric, strict_numeric, RuleSet};
use serde_json::Value;

field_enum! {
    enum OrderField {
        UserId => "usuarioId",
        Phone => "clienteTelefone",
        Items => "itens",
        Total => "total",
        Status => "status",
    }
}

struct OfflineApi;

impl RecordApi for OfflineApi {
    async fn get(&self, _path: &str) -> Result<Value, ApiError> {
        Err(ApiError::Transport("offline".to_string()))
    }

    async fn post(&self, _path: &str, _body: &Value) -> Result<Value, ApiError> {
        Err(ApiError::Transport("offline".to_string()))
    }
}

fn defaults() -> FieldValues<OrderField> {
    FieldValues::new()
        .with(OrderField::UserId, " ")
        .with(OrderField::Phone, " ")
        .with(OrderField::Items, FieldValue::List(vec![FieldValue::Record(Default::default())]))
        .with(OrderField::Total, " ")
        .with(OrderField::Status, "CRIADO")
}

fn loose_rules() -> RuleSet<OrderField> {
    RuleSet::builder()
        .rule(OrderField::UserId, required("User id is required."))
        .rule(OrderField::Phone, required("Customer phone is required."))
        .rule(OrderField::Status, required("Status is required."))
        .rule(OrderField::Total, required("Total is required."))
        .build()
        .expect("order rules are unique")
}

fn strict_rules() -> RuleSet<OrderField> {
    RuleSet::builder()
        .rule(OrderField::UserId, strict_numeric("User id must be a number."))
        .rule(OrderField::Total, strict_numeric("Total must be a number."))
        .rule(OrderField::Items, required_numeric("Items must be a number."))
        .build()
        .expect("order rules are unique")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formstate=info".into()),
        )
        .init();

    println!("=== Order Form Example ===\n");

    println!("Example 1: Placeholders pass loose rules");
    let form = SharedForm::new(defaults());
    println!("  Valid: {}\n", form.validate(&loose_rules()));

    println!("Example 2: Strict rules reject them");
    println!("  Valid: {}", form.validate(&strict_rules()));
    for (field, message) in form.errors().iter() {
        println!("    {:?}: {message}", field);
    }

    println!("\nExample 3: Inputs share one engine");
    let on_user = form.change_handler(OrderField::UserId);
    let on_total = form.change_handler(OrderField::Total);
    on_user(ChangeEvent::input("1"));
    on_total(ChangeEvent::input("21"));
    println!("  Values: {}", form.values().to_json());

    println!("\nExample 4: Submitting while offline");
    let mut controller = FormController::new(defaults(), FormConfig::new("/pedidos"));
    controller.engine_mut().update_values(form.values());
    let outcome = controller.submit(&OfflineApi, &loose_rules()).await;
    println!("  Outcome: {outcome:?}");
    if let Some(notification) = controller.notification() {
        println!("  Banner ({:?}): {}", notification.severity, notification.message);
    }

    println!("\n=== Example Complete ===");
}
