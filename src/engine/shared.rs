//! Shared handle for wiring one engine into many UI callbacks.

use crate::core::{Field, FieldErrors, FieldValues};
use crate::engine::event::ChangeEvent;
use crate::engine::form::FormEngine;
use crate::validation::RuleSet;
use std::cell::RefCell;
use std::rc::Rc;

/// Cloneable, single-threaded handle to a [`FormEngine`].
///
/// UI callbacks must own what they capture, so a view hands each input a
/// clone of this handle instead of a borrow of the engine. Rules run while
/// the engine is borrowed and must not reach back into the same handle.
pub struct SharedForm<F: Field> {
    inner: Rc<RefCell<FormEngine<F>>>,
}

impl<F: Field> Clone for SharedForm<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: Field + 'static> SharedForm<F> {
    pub fn new(defaults: FieldValues<F>) -> Self {
        Self::from_engine(FormEngine::new(defaults))
    }

    pub fn from_engine(engine: FormEngine<F>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(engine)),
        }
    }

    /// Owned handler bound to one field.
    ///
    /// ```rust
    /// use formstate::core::{FieldValue, FieldValues};
    /// use formstate::engine::{ChangeEvent, SharedForm};
    ///
    /// let form = SharedForm::new(FieldValues::new().with("nome".to_string(), ""));
    /// let on_nome = form.change_handler("nome".to_string());
    ///
    /// on_nome(ChangeEvent::input("Moqueca"));
    ///
    /// assert_eq!(
    ///     form.values().get(&"nome".to_string()),
    ///     Some(&FieldValue::from("Moqueca"))
    /// );
    /// ```
    pub fn change_handler(&self, field: F) -> impl Fn(ChangeEvent) + 'static {
        let inner = Rc::clone(&self.inner);
        move |event: ChangeEvent| inner.borrow_mut().handle_change(field.clone(), event)
    }

    pub fn handle_change(&self, field: F, event: impl Into<ChangeEvent>) {
        self.inner.borrow_mut().handle_change(field, event);
    }

    pub fn update_values(&self, values: FieldValues<F>) {
        self.inner.borrow_mut().update_values(values);
    }

    pub fn validate(&self, rules: &RuleSet<F>) -> bool {
        self.inner.borrow_mut().validate(rules)
    }

    pub fn clear_errors(&self) {
        self.inner.borrow_mut().clear_errors();
    }

    /// Copy of the current values.
    pub fn values(&self) -> FieldValues<F> {
        self.inner.borrow().values().clone()
    }

    /// Copy of the current errors.
    pub fn errors(&self) -> FieldErrors<F> {
        self.inner.borrow().errors().clone()
    }

    /// Read the engine without copying.
    pub fn with<R>(&self, read: impl FnOnce(&FormEngine<F>) -> R) -> R {
        read(&self.inner.borrow())
    }
}
