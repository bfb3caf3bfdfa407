//! Rule sets for whole forms, checked with Validation.

use crate::core::{Field, FieldErrors, FieldValue, FieldValues, Rule};
use crate::validation::builder::RuleSetBuilder;
use crate::validation::errors::FieldError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The rules active for one validation pass, at most one per field.
///
/// Every rule runs on every pass; failures are accumulated rather than
/// stopping at the first one, so a form reports all of its errors at once.
pub struct RuleSet<F: Field> {
    pub(crate) rules: Vec<(F, Rule)>,
}

impl<F: Field> RuleSet<F> {
    pub fn builder() -> RuleSetBuilder<F> {
        RuleSetBuilder::new()
    }

    /// Run every rule against `values`, accumulating ALL failures.
    ///
    /// A field missing from `values` is checked as [`FieldValue::Undefined`].
    pub fn check(&self, values: &FieldValues<F>) -> Validation<(), NonEmptyVec<FieldError<F>>> {
        let undefined = FieldValue::Undefined;

        let checks: Vec<Validation<(), NonEmptyVec<FieldError<F>>>> = self
            .rules
            .iter()
            .map(|(field, rule)| {
                let value = values.get(field).unwrap_or(&undefined);
                match rule.check(value) {
                    Some(message) => Validation::fail(FieldError {
                        field: field.clone(),
                        message,
                    }),
                    None => Validation::success(()),
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Run every rule and collect the failures into an error mapping.
    pub fn errors_for(&self, values: &FieldValues<F>) -> FieldErrors<F> {
        match self.check(values) {
            Validation::Success(()) => FieldErrors::new(),
            Validation::Failure(failures) => failures
                .iter()
                .map(|failure| (failure.field.clone(), failure.message.clone()))
                .collect(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &F> {
        self.rules.iter().map(|(field, _)| field)
    }

    pub fn get(&self, field: &F) -> Option<&Rule> {
        self.rules.iter().find(|(f, _)| f == field).map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
