//! Builder API for creating rule sets.

use crate::core::{Field, FieldValue, FieldValues, Rule};
use crate::validation::errors::BuildError;
use crate::validation::rules::RuleSet;

/// Builder for creating rule sets
///
/// Rule keys are checked here, once, so that validation itself never has
/// to second-guess them.
pub struct RuleSetBuilder<F: Field> {
    rules: Vec<(F, Rule)>,
    duplicate: Option<F>,
}

impl<F: Field> RuleSetBuilder<F> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            duplicate: None,
        }
    }

    /// Add the rule for a field
    pub fn rule(mut self, field: F, rule: Rule) -> Self {
        if self.duplicate.is_none() && self.rules.iter().any(|(f, _)| *f == field) {
            self.duplicate = Some(field.clone());
        }
        self.rules.push((field, rule));
        self
    }

    /// Add a rule from a bare check function
    pub fn check<C>(self, field: F, check: C) -> Self
    where
        C: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        self.rule(field, Rule::new(check))
    }

    /// Build the rule set
    pub fn build(self) -> Result<RuleSet<F>, BuildError> {
        if let Some(field) = self.duplicate {
            return Err(BuildError::DuplicateRule {
                field: field.name().to_string(),
            });
        }
        Ok(RuleSet { rules: self.rules })
    }

    /// Build the rule set, also rejecting rules for fields the form's
    /// values do not declare
    pub fn build_for(self, values: &FieldValues<F>) -> Result<RuleSet<F>, BuildError> {
        let rules = self.build()?;
        if let Some(field) = rules.fields().find(|f| !values.contains(f)) {
            return Err(BuildError::UnknownField {
                field: field.name().to_string(),
            });
        }
        Ok(rules)
    }
}

impl<F: Field> Default for RuleSetBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::checks::required;

    fn key(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn builder_collects_rules_in_order() {
        let rules = RuleSetBuilder::new()
            .rule(key("nome"), required("required"))
            .check(key("valor"), |_| None)
            .build()
            .unwrap();

        let fields: Vec<_> = rules.fields().cloned().collect();
        assert_eq!(fields, vec![key("nome"), key("valor")]);
    }

    #[test]
    fn duplicate_rule_is_rejected() {
        let result = RuleSetBuilder::new()
            .rule(key("nome"), required("required"))
            .rule(key("valor"), required("required"))
            .rule(key("nome"), required("again"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateRule { ref field }) if field == "nome"
        ));
    }

    #[test]
    fn build_for_rejects_undeclared_fields() {
        let defaults = FieldValues::new().with(key("nome"), "");

        let result = RuleSetBuilder::new()
            .rule(key("nome"), required("required"))
            .rule(key("cozinha"), required("required"))
            .build_for(&defaults);

        assert!(matches!(
            result,
            Err(BuildError::UnknownField { ref field }) if field == "cozinha"
        ));
    }

    #[test]
    fn build_for_accepts_declared_fields() {
        let defaults = FieldValues::new().with(key("nome"), "").with(key("valor"), 0);

        let result = RuleSetBuilder::new()
            .rule(key("nome"), required("required"))
            .build_for(&defaults);

        assert!(result.is_ok());
    }
}
