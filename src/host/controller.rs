//! Controller that drives one form against a record API.

use crate::core::{Field, FieldValues};
use crate::engine::FormEngine;
use crate::host::api::RecordApi;
use crate::host::config::FormConfig;
use crate::host::notify::{Notification, Severity};
use crate::validation::RuleSet;

/// Result of a submit attempt
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid,

    /// The record was accepted and the form reset to its defaults
    Submitted(serde_json::Value),

    /// The API refused or could not be reached; values are kept
    Failed,
}

/// Load-for-edit and submit flows around a [`FormEngine`].
///
/// The controller never resets on its own. Loading replaces values but
/// keeps errors; only a successful submit restores the defaults.
pub struct FormController<F: Field> {
    engine: FormEngine<F>,
    defaults: FieldValues<F>,
    config: FormConfig,
    editing: bool,
    notification: Option<Notification>,
}

impl<F: Field> FormController<F> {
    pub fn new(defaults: FieldValues<F>, config: FormConfig) -> Self {
        Self {
            engine: FormEngine::new(defaults.clone()),
            defaults,
            config,
            editing: false,
            notification: None,
        }
    }

    /// Put the controller in edit mode, where [`load`](Self::load) fetches.
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn engine(&self) -> &FormEngine<F> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut FormEngine<F> {
        &mut self.engine
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.notification = None;
    }

    /// Fetch the record `id` and load it into the form.
    ///
    /// Does nothing unless the controller is editing and `id` is present.
    /// Only the fields of the defaults are taken from the record; the ones
    /// it lacks become undefined.
    pub async fn load<A: RecordApi>(&mut self, api: &A, id: Option<&str>) {
        let Some(id) = id.filter(|_| self.editing) else {
            return;
        };

        let path = self.config.record_path(id);
        match api.get(&path).await {
            Ok(record) => {
                tracing::debug!(path = %path, "record loaded");
                let values = FieldValues::pick(&record, self.defaults.fields());
                self.engine.update_values(values);
            }
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "record load failed");
                self.notify(self.config.load_failed.clone(), Severity::Error);
            }
        }
    }

    /// Validate and, when valid, post the form's values.
    pub async fn submit<A: RecordApi>(&mut self, api: &A, rules: &RuleSet<F>) -> SubmitOutcome {
        if !self.engine.validate(rules) {
            return SubmitOutcome::Invalid;
        }

        let body = self.engine.values().to_json();
        match api.post(&self.config.resource, &body).await {
            Ok(answer) => {
                tracing::info!(resource = %self.config.resource, "record submitted");
                self.notify(self.config.submit_succeeded.clone(), Severity::Success);
                self.engine.update_values(self.defaults.clone());
                SubmitOutcome::Submitted(answer)
            }
            Err(err) => {
                tracing::error!(resource = %self.config.resource, error = %err, "record submit failed");
                self.notify(self.config.submit_failed.clone(), Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }

    fn notify(&mut self, message: String, severity: Severity) {
        self.notification = Some(Notification::new(
            message,
            severity,
            self.config.notification_duration(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use crate::field_enum;
    use crate::host::api::ApiError;
    use crate::validation::{numeric, required};
    use serde_json::{json, Value};
    use std::cell::RefCell;

    field_enum! {
        enum DishField {
            Name => "nome",
            Cuisine => "cozinha",
            Price => "valor",
        }
    }

    #[derive(Default)]
    struct MockApi {
        record: Option<Value>,
        reject_posts: bool,
        gets: RefCell<Vec<String>>,
        posts: RefCell<Vec<(String, Value)>>,
    }

    impl RecordApi for MockApi {
        async fn get(&self, path: &str) -> Result<Value, ApiError> {
            self.gets.borrow_mut().push(path.to_string());
            self.record.clone().ok_or(ApiError::Status { code: 404 })
        }

        async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
            self.posts.borrow_mut().push((path.to_string(), body.clone()));
            if self.reject_posts {
                Err(ApiError::Transport("connection reset".to_string()))
            } else {
                Ok(json!({ "id": 1 }))
            }
        }
    }

    fn defaults() -> FieldValues<DishField> {
        FieldValues::new()
            .with(DishField::Name, "")
            .with(DishField::Cuisine, "")
            .with(DishField::Price, 0)
    }

    fn rules() -> RuleSet<DishField> {
        RuleSet::builder()
            .rule(DishField::Name, required("name required"))
            .rule(DishField::Price, numeric("invalid price"))
            .build()
            .unwrap()
    }

    fn controller() -> FormController<DishField> {
        FormController::new(defaults(), FormConfig::new("/pratos"))
    }

    #[tokio::test]
    async fn load_is_skipped_without_edit_mode() {
        let api = MockApi::default();
        let mut form = controller();

        form.load(&api, Some("3")).await;

        assert!(api.gets.borrow().is_empty());
        assert_eq!(form.engine().values(), &defaults());
    }

    #[tokio::test]
    async fn load_is_skipped_without_id() {
        let api = MockApi::default();
        let mut form = controller().editing(true);

        form.load(&api, None).await;

        assert!(api.gets.borrow().is_empty());
    }

    #[tokio::test]
    async fn load_picks_declared_fields() {
        let api = MockApi {
            record: Some(json!({ "id": 3, "nome": "Moqueca", "valor": 42.5 })),
            ..MockApi::default()
        };
        let mut form = controller().editing(true);

        form.load(&api, Some("3")).await;

        assert_eq!(api.gets.borrow().as_slice(), ["/pratos/3".to_string()]);
        let engine = form.engine();
        assert_eq!(engine.value(&DishField::Name), Some(&FieldValue::from("Moqueca")));
        assert_eq!(engine.value(&DishField::Price), Some(&FieldValue::Number(42.5)));
        assert_eq!(engine.value(&DishField::Cuisine), Some(&FieldValue::Undefined));
        assert!(form.notification().is_none());
    }

    #[tokio::test]
    async fn load_failure_raises_error_notification() {
        let api = MockApi::default();
        let mut form = controller().editing(true);

        form.load(&api, Some("9")).await;

        let notification = form.notification().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, FormConfig::default().load_failed);
        assert_eq!(notification.duration.as_millis(), 10_000);
        assert_eq!(form.engine().values(), &defaults());
    }

    #[tokio::test]
    async fn load_keeps_previous_errors() {
        let api = MockApi {
            record: Some(json!({ "nome": "Moqueca", "cozinha": "Baiana", "valor": 40 })),
            ..MockApi::default()
        };
        let mut form = controller().editing(true);
        form.engine_mut().validate(&rules());

        form.load(&api, Some("3")).await;

        assert_eq!(form.engine().error(&DishField::Name), Some("name required"));
    }

    #[tokio::test]
    async fn invalid_form_is_not_posted() {
        let api = MockApi::default();
        let mut form = controller();

        let outcome = form.submit(&api, &rules()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(api.posts.borrow().is_empty());
        assert_eq!(form.engine().error(&DishField::Name), Some("name required"));
        assert!(form.notification().is_none());
    }

    #[tokio::test]
    async fn valid_form_is_posted_and_reset() {
        let api = MockApi::default();
        let mut form = controller();
        form.engine_mut().handle_change(DishField::Name, "Feijoada");
        form.engine_mut().handle_change(DishField::Price, "35");

        let outcome = form.submit(&api, &rules()).await;

        assert_eq!(outcome, SubmitOutcome::Submitted(json!({ "id": 1 })));
        let posts = api.posts.borrow();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "/pratos");
        assert_eq!(
            posts[0].1,
            json!({ "nome": "Feijoada", "cozinha": "", "valor": "35" })
        );
        assert_eq!(form.engine().values(), &defaults());
        assert_eq!(form.notification().unwrap().severity, Severity::Success);
    }

    #[tokio::test]
    async fn failed_post_keeps_values() {
        let api = MockApi {
            reject_posts: true,
            ..MockApi::default()
        };
        let mut form = controller();
        form.engine_mut().handle_change(DishField::Name, "Feijoada");

        let outcome = form.submit(&api, &rules()).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            form.engine().value(&DishField::Name),
            Some(&FieldValue::from("Feijoada"))
        );
        assert_eq!(form.notification().unwrap().severity, Severity::Error);

        form.dismiss();
        assert!(form.notification().is_none());
    }
}
