//! Field-bound change handlers.

use crate::core::Field;
use crate::engine::event::ChangeEvent;
use crate::engine::form::FormEngine;

/// Writes one field of a borrowed engine from input events.
///
/// The borrow ends after the handler's last use, so the engine can be read
/// or validated right after the input fires.
#[derive(Debug)]
pub struct ChangeHandler<'a, F: Field> {
    engine: &'a mut FormEngine<F>,
    field: F,
}

impl<'a, F: Field> ChangeHandler<'a, F> {
    pub(crate) fn new(engine: &'a mut FormEngine<F>, field: F) -> Self {
        Self { engine, field }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn handle(&mut self, event: impl Into<ChangeEvent>) {
        self.engine.handle_change(self.field.clone(), event);
    }
}
