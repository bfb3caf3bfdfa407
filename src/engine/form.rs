//! Form state engine that owns one form's values and errors.

use crate::core::{Field, FieldErrors, FieldValue, FieldValues};
use crate::engine::error::FormError;
use crate::engine::event::ChangeEvent;
use crate::engine::handler::ChangeHandler;
use crate::snapshot::{FormSnapshot, SnapshotError};
use crate::validation::RuleSet;
use serde::{Deserialize, Serialize};

/// The values and errors of one form at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EngineState<F: Field> {
    pub values: FieldValues<F>,
    pub errors: FieldErrors<F>,
}

/// Single source of truth for one form's in-progress values and errors.
///
/// Every operation runs to completion and replaces state wholesale.
/// Errors only change when [`validate`](Self::validate) runs or the host
/// clears them; editing a field leaves its old error in place.
///
/// # Example
///
/// ```rust
/// use formstate::core::FieldValues;
/// use formstate::engine::FormEngine;
/// use formstate::validation::{numeric, required, RuleSet};
///
/// let nome = "nome".to_string();
/// let valor = "valor".to_string();
///
/// let mut form = FormEngine::new(
///     FieldValues::new().with(nome.clone(), "").with(valor.clone(), 0),
/// );
/// let rules = RuleSet::builder()
///     .rule(nome.clone(), required("required"))
///     .rule(valor.clone(), numeric("invalid"))
///     .build()
///     .unwrap();
///
/// assert!(!form.validate(&rules));
/// assert_eq!(form.error(&nome), Some("required"));
///
/// form.handle_change(nome.clone(), "Feijoada");
/// assert!(form.validate(&rules));
/// assert!(form.errors().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct FormEngine<F: Field> {
    state: EngineState<F>,
}

impl<F: Field> FormEngine<F> {
    /// Create an engine holding `defaults` and no errors.
    pub fn new(defaults: FieldValues<F>) -> Self {
        Self::from_state(EngineState {
            values: defaults,
            errors: FieldErrors::new(),
        })
    }

    pub fn from_state(state: EngineState<F>) -> Self {
        Self { state }
    }

    pub fn values(&self) -> &FieldValues<F> {
        &self.state.values
    }

    pub fn errors(&self) -> &FieldErrors<F> {
        &self.state.errors
    }

    pub fn value(&self, field: &F) -> Option<&FieldValue> {
        self.state.values.get(field)
    }

    pub fn error(&self, field: &F) -> Option<&str> {
        self.state.errors.get(field)
    }

    pub fn state(&self) -> &EngineState<F> {
        &self.state
    }

    pub fn into_state(self) -> EngineState<F> {
        self.state
    }

    /// Handler bound to one field, for wiring into an input.
    ///
    /// ```rust
    /// use formstate::core::{FieldValue, FieldValues};
    /// use formstate::engine::{ChangeEvent, FormEngine};
    ///
    /// let mut form = FormEngine::new(FieldValues::new().with("nome".to_string(), ""));
    ///
    /// let mut on_nome = form.change_handler("nome".to_string());
    /// on_nome.handle(ChangeEvent::input("Feijoada"));
    ///
    /// assert_eq!(form.value(&"nome".to_string()), Some(&FieldValue::from("Feijoada")));
    /// ```
    pub fn change_handler(&mut self, field: F) -> ChangeHandler<'_, F> {
        ChangeHandler::new(self, field)
    }

    /// Set one field from a change event, keeping every other field.
    ///
    /// A field the form does not hold is still written, and logged as a
    /// warning. Use [`try_handle_change`](Self::try_handle_change) to reject it.
    pub fn handle_change(&mut self, field: F, event: impl Into<ChangeEvent>) {
        if !self.state.values.contains(&field) {
            tracing::warn!(field = field.name(), "change for a field the form does not hold");
        }
        self.set(field, event.into().into_value());
    }

    /// Like [`handle_change`](Self::handle_change), but refuses fields the
    /// form does not hold.
    pub fn try_handle_change(
        &mut self,
        field: F,
        event: impl Into<ChangeEvent>,
    ) -> Result<(), FormError> {
        if !self.state.values.contains(&field) {
            return Err(FormError::UnknownField {
                field: field.name().to_string(),
            });
        }
        self.set(field, event.into().into_value());
        Ok(())
    }

    fn set(&mut self, field: F, value: FieldValue) {
        tracing::trace!(field = field.name(), "field changed");
        self.state.values.insert(field, value);
    }

    /// Replace all values. Fields missing from `values` are dropped.
    pub fn update_values(&mut self, values: FieldValues<F>) {
        tracing::debug!(fields = values.len(), "values replaced");
        self.state.values = values;
    }

    /// Run `rules` against the current values and replace the errors.
    ///
    /// Returns `true` when no rule failed. Fields without a rule never get
    /// an error, whatever a previous pass recorded.
    pub fn validate(&mut self, rules: &RuleSet<F>) -> bool {
        let errors = rules.errors_for(&self.state.values);
        let valid = errors.is_empty();
        tracing::debug!(rules = rules.len(), failed = errors.len(), "validation finished");
        self.state.errors = errors;
        valid
    }

    pub fn clear_errors(&mut self) {
        self.state.errors = FieldErrors::new();
    }

    /// Capture the current state as a snapshot.
    pub fn snapshot(&self) -> FormSnapshot<F> {
        FormSnapshot::new(self.state.clone())
    }

    /// Rebuild an engine from a snapshot.
    pub fn restore(snapshot: FormSnapshot<F>) -> Result<Self, SnapshotError> {
        snapshot.into_state().map(Self::from_state)
    }
}
