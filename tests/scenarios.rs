//! End-to-end behavior of the engine on the dish and order forms.

use formstate::core::{FieldValue, FieldValues};
use formstate::engine::{ChangeEvent, FormEngine};
use formstate::field_enum;
use formstate::validation::{numeric, required, required_numeric, strict_numeric, RuleSet};

field_enum! {
    enum Dish {
        Name => "nome",
        Cuisine => "cozinha",
        Price => "valor",
    }
}

field_enum! {
    enum Order {
        UserId => "usuarioId",
        Total => "total",
    }
}

fn dish_rules() -> RuleSet<Dish> {
    RuleSet::builder()
        .rule(Dish::Name, required("required"))
        .rule(Dish::Price, numeric("invalid"))
        .build()
        .unwrap()
}

fn dish_defaults() -> FieldValues<Dish> {
    FieldValues::new().with(Dish::Name, "").with(Dish::Price, 0)
}

#[test]
fn defaults_fail_on_required_name_only() {
    let mut form = FormEngine::new(dish_defaults());

    assert!(!form.validate(&dish_rules()));
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(&Dish::Name), Some("required"));
    assert!(form.error(&Dish::Price).is_none());
}

#[test]
fn typing_a_name_makes_the_form_valid() {
    let mut form = FormEngine::new(dish_defaults());
    form.validate(&dish_rules());

    let mut on_name = form.change_handler(Dish::Name);
    on_name.handle(ChangeEvent::input("Feijoada"));

    assert!(form.validate(&dish_rules()));
    assert!(form.errors().is_empty());
}

#[test]
fn bulk_update_drops_fields_missing_from_the_update() {
    let mut form = FormEngine::new(dish_defaults().with(Dish::Cuisine, "Y"));

    form.update_values(FieldValues::new().with(Dish::Name, "X").with(Dish::Price, 10));

    assert_eq!(
        form.values(),
        &FieldValues::new().with(Dish::Name, "X").with(Dish::Price, 10)
    );
    assert!(form.value(&Dish::Cuisine).is_none());
}

#[test]
fn blank_placeholder_passes_loose_numeric_check() {
    let rules = RuleSet::builder()
        .rule(Order::Total, numeric("invalid"))
        .build()
        .unwrap();
    let mut form = FormEngine::new(FieldValues::new().with(Order::Total, " "));

    assert!(form.validate(&rules));
    assert!(form.error(&Order::Total).is_none());
}

#[test]
fn blank_placeholder_fails_strict_numeric_check() {
    let rules = RuleSet::builder()
        .rule(Order::Total, strict_numeric("invalid"))
        .build()
        .unwrap();
    let mut form = FormEngine::new(FieldValues::new().with(Order::Total, " "));

    assert!(!form.validate(&rules));
    assert_eq!(form.error(&Order::Total), Some("invalid"));
}

#[test]
fn order_placeholders_pass_required_rules() {
    // Single-space placeholders are truthy, so required rules accept them.
    let rules = RuleSet::builder()
        .rule(Order::UserId, required("user required"))
        .rule(Order::Total, required_numeric("total required"))
        .build()
        .unwrap();
    let mut form = FormEngine::new(
        FieldValues::new()
            .with(Order::UserId, " ")
            .with(Order::Total, " "),
    );

    assert!(form.validate(&rules));
}

#[test]
fn unvalidated_field_is_passed_undefined() {
    let rules = RuleSet::builder()
        .rule(Dish::Cuisine, required("cuisine required"))
        .build()
        .unwrap();
    let mut form = FormEngine::new(dish_defaults());

    assert!(!form.validate(&rules));
    assert_eq!(form.error(&Dish::Cuisine), Some("cuisine required"));
}

#[test]
fn loaded_record_feeds_validation() {
    let record = serde_json::json!({ "nome": "Moqueca", "valor": "quarenta" });
    let mut form = FormEngine::new(dish_defaults());

    form.update_values(FieldValues::pick(&record, Dish::ALL));

    assert_eq!(form.value(&Dish::Cuisine), Some(&FieldValue::Undefined));
    assert!(!form.validate(&dish_rules()));
    assert_eq!(form.error(&Dish::Price), Some("invalid"));
    assert!(form.error(&Dish::Name).is_none());
}
