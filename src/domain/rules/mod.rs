//! Compatibility rules
//!
//! A rule is a trigger predicate over the current configuration plus the field
//! assignments it makes when it triggers. Rules are plain function pointers:
//! pure, side-effect free, and evaluated in table order.

mod table;

use std::collections::HashSet;

use crate::domain::entities::StackConfig;
use crate::domain::value_objects::{Field, FieldValue};

/// One declarative compatibility rule
#[derive(Clone, Copy)]
pub struct CompatibilityRule {
    /// Stable identifier, reported in change logs and errors
    pub id: &'static str,
    /// Fields whose values make the rule trigger; notes are recorded against them
    pub cause: &'static [Field],
    pub trigger: fn(&StackConfig) -> bool,
    /// Assignments to make. Entries equal to the current value are ignored.
    pub apply: fn(&StackConfig) -> Vec<FieldValue>,
    /// Human-readable reason, given the configuration before the rule applied
    /// and the assignments that actually changed something
    pub explain: fn(&StackConfig, &[FieldValue]) -> String,
}

impl std::fmt::Debug for CompatibilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompatibilityRule")
            .field("id", &self.id)
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

impl CompatibilityRule {
    /// Assignments that would change `config`, or empty when the rule does not
    /// trigger or would be a no-op
    pub fn effective_assignments(&self, config: &StackConfig) -> Vec<FieldValue> {
        if !(self.trigger)(config) {
            return Vec::new();
        }
        let mut seen = HashSet::new();
        (self.apply)(config)
            .into_iter()
            .filter(|value| seen.insert(value.field()) && config.differs(value))
            .collect()
    }
}

/// Ordered rule table
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompatibilityRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CompatibilityRule>) -> Self {
        Self { rules }
    }

    /// The built-in rule table
    pub fn builtin() -> Self {
        Self::new(table::rules())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompatibilityRule> {
        self.rules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CompatibilityRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Orm, Runtime};

    #[test]
    fn builtin_rule_ids_are_unique() {
        let rules = RuleSet::builtin();
        let ids: HashSet<_> = rules.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn builtin_rules_name_their_cause() {
        for rule in RuleSet::builtin().iter() {
            assert!(!rule.cause.is_empty(), "rule {} has no cause fields", rule.id);
        }
    }

    #[test]
    fn default_config_triggers_nothing() {
        let config = StackConfig::default();
        for rule in RuleSet::builtin().iter() {
            assert!(
                rule.effective_assignments(&config).is_empty(),
                "rule {} fires on the default configuration",
                rule.id
            );
        }
    }

    #[test]
    fn no_op_assignments_are_filtered() {
        let rule = CompatibilityRule {
            id: "test",
            cause: &[Field::Runtime],
            trigger: |_| true,
            apply: |_| vec![FieldValue::Runtime(Runtime::Bun), FieldValue::Orm(Orm::Prisma)],
            explain: |_, _| String::new(),
        };
        let assignments = rule.effective_assignments(&StackConfig::default());
        assert_eq!(assignments, vec![FieldValue::Orm(Orm::Prisma)]);
    }
}
