//! Dish Registration Form
//!
//! This example drives the dish form through a fake record API.
//!
//! Key concepts:
//! - Declaring form fields with `field_enum!`
//! - Loading an existing record in edit mode
//! - Validating on submit and resetting after success
//!
//! Run with: cargo run --example dish_form

use formstate::core::FieldValues;
use formstate::field_enum;
use formstate::host::{ApiError, FormConfig, FormController, RecordApi, SubmitOutcome};
use formstate::validation::{accept_any, required, required_numeric, RuleSet};
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

field_enum! {
    enum DishField {
        Name => "nome",
        Cuisine => "cozinha",
        ShortDescription => "descricao_resumida",
        LongDescription => "descricao_detalhada",
        Image => "imagem",
        Price => "valor",
    }
}

struct FakeApi;

impl RecordApi for FakeApi {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        println!("  [GET] {path}");
        Ok(json!({
            "id": 7,
            "nome": "Moqueca",
            "cozinha": "Baiana",
            "descricao_resumida": "Peixe no dendê",
            "descricao_detalhada": "Peixe cozido no leite de coco com dendê",
            "imagem": "",
            "valor": 58.9
        }))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        println!("  [POST] {path} {body}");
        Ok(json!({ "id": 8 }))
    }
}

fn defaults() -> FieldValues<DishField> {
    FieldValues::new()
        .with(DishField::Name, "")
        .with(DishField::Cuisine, "")
        .with(DishField::ShortDescription, "")
        .with(DishField::LongDescription, "")
        .with(DishField::Image, "")
        .with(DishField::Price, 0)
}

fn rules() -> RuleSet<DishField> {
    RuleSet::builder()
        .rule(DishField::Name, required("Name is required."))
        .rule(DishField::Cuisine, required("Cuisine is required."))
        .rule(
            DishField::ShortDescription,
            required("Short description is required."),
        )
        .rule(
            DishField::LongDescription,
            required("Detailed description is required."),
        )
        .rule(DishField::Price, required_numeric("Price must be a valid number."))
        .rule(DishField::Image, accept_any())
        .build_for(&defaults())
        .expect("dish rules name only dish fields")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formstate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Dish Form Example ===\n");
    let api = FakeApi;

    println!("Step 1: Submit the empty form");
    let mut form = FormController::new(defaults(), FormConfig::new("/pratos"));
    let outcome = form.submit(&api, &rules()).await;
    println!("  Outcome: {outcome:?}");
    for (field, message) in form.engine().errors().iter() {
        println!("    {:?}: {message}", field);
    }

    println!("\nStep 2: Load dish 7 for editing");
    let mut form = FormController::new(defaults(), FormConfig::new("/pratos")).editing(true);
    form.load(&api, Some("7")).await;
    println!("  Loaded: {}", form.engine().values().to_json());

    println!("\nStep 3: Change the price and submit");
    let mut on_price = form.engine_mut().change_handler(DishField::Price);
    on_price.handle("61.5");
    match form.submit(&api, &rules()).await {
        SubmitOutcome::Submitted(answer) => println!("  Saved: {answer}"),
        other => println!("  Not saved: {other:?}"),
    }
    if let Some(notification) = form.notification() {
        println!(
            "  Banner ({:?}, {} ms): {}",
            notification.severity,
            notification.duration.as_millis(),
            notification.message
        );
    }
    println!("  Form reset to: {}", form.engine().values().to_json());

    println!("\n=== Example Complete ===");
}
