//! Configuration resolver
//!
//! Applies the rule set to a candidate configuration until a full pass changes
//! nothing. Rules within a pass see the effects of the rules before them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::domain::entities::StackConfig;
use crate::domain::rules::{CompatibilityRule, RuleSet};
use crate::domain::value_objects::{Field, FieldValue};

/// Safety bound on fixed-point passes. The built-in table settles in a handful.
pub const MAX_PASSES: usize = 16;

/// One rule application in the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiredRule {
    pub rule_id: &'static str,
    /// 1-based pass in which the rule fired
    pub pass: usize,
    pub assignments: Vec<FieldValue>,
    pub explanation: String,
}

/// Per-field presentation view of the audit trail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldNotes {
    pub has_issue: bool,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub final_config: StackConfig,
    pub fired: Vec<FiredRule>,
    pub notes_by_field: BTreeMap<Field, FieldNotes>,
    /// Passes run, including the final pass that changed nothing
    pub passes: usize,
}

impl ResolutionResult {
    /// True when the input was already consistent
    pub fn is_unchanged(&self) -> bool {
        self.fired.is_empty()
    }

    /// Fields that ended up with a different value than the input had
    pub fn changed_fields(&self, initial: &StackConfig) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| initial.get(*f) != self.final_config.get(*f))
            .collect()
    }

    pub fn notes(&self, field: Field) -> &[String] {
        self.notes_by_field
            .get(&field)
            .map(|n| n.notes.as_slice())
            .unwrap_or(&[])
    }
}

/// A rule that wanted to change a field the caller pinned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule_id: &'static str,
    pub fields: Vec<Field>,
    pub message: String,
}

/// The requested combination cannot be made consistent without touching
/// explicitly chosen options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompatibleInputError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for IncompatibleInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "incompatible options")?;
        for v in &self.violations {
            let fields: Vec<&str> = v.fields.iter().map(|f| f.key()).collect();
            write!(f, "\n  - [{}] {} (pinned: {})", v.rule_id, v.message, fields.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for IncompatibleInputError {}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Incompatible(#[from] IncompatibleInputError),

    /// The rule table contains a cycle. Never a user error.
    #[error("resolver did not reach a fixed point after {max_passes} passes (still firing: {})", still_firing.join(", "))]
    NonTermination {
        max_passes: usize,
        still_firing: Vec<&'static str>,
    },
}

/// Fixed-point resolver over a rule set
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: RuleSet,
    max_passes: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

impl Resolver {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            max_passes: MAX_PASSES,
        }
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve with auto-fix: every triggered rule applies.
    pub fn resolve(&self, initial: &StackConfig) -> Result<ResolutionResult, ResolveError> {
        let (result, _) = self.run(initial, &BTreeSet::new())?;
        Ok(result)
    }

    /// Resolve without touching `pinned` fields.
    ///
    /// Rules that would change a pinned field are not applied; if any exist at
    /// the fixed point the input is rejected with one message per rule.
    pub fn resolve_strict(
        &self,
        initial: &StackConfig,
        pinned: &BTreeSet<Field>,
    ) -> Result<ResolutionResult, ResolveError> {
        let (result, violations) = self.run(initial, pinned)?;
        if violations.is_empty() {
            Ok(result)
        } else {
            Err(IncompatibleInputError { violations }.into())
        }
    }

    fn run(
        &self,
        initial: &StackConfig,
        pinned: &BTreeSet<Field>,
    ) -> Result<(ResolutionResult, Vec<Violation>), ResolveError> {
        let mut current = initial.clone();
        let mut fired: Vec<FiredRule> = Vec::new();
        let mut violations: Vec<Violation> = Vec::new();
        let mut last_pass_rules: Vec<&'static str> = Vec::new();

        for pass in 1..=self.max_passes {
            let mut changed = false;
            last_pass_rules.clear();

            for rule in self.rules.iter() {
                let assignments = rule.effective_assignments(&current);
                if assignments.is_empty() {
                    continue;
                }
                let explanation = (rule.explain)(&current, &assignments);

                let blocked: Vec<Field> = assignments
                    .iter()
                    .map(FieldValue::field)
                    .filter(|f| pinned.contains(f))
                    .collect();
                if !blocked.is_empty() {
                    if !violations.iter().any(|v| v.rule_id == rule.id) {
                        violations.push(Violation {
                            rule_id: rule.id,
                            fields: blocked,
                            message: explanation,
                        });
                    }
                    continue;
                }

                for assignment in &assignments {
                    current = current.with(assignment.clone());
                }
                fired.push(FiredRule {
                    rule_id: rule.id,
                    pass,
                    assignments,
                    explanation,
                });
                last_pass_rules.push(rule.id);
                changed = true;
            }

            if !changed {
                let notes_by_field = build_notes(&self.rules, &fired);
                let result = ResolutionResult {
                    final_config: current,
                    fired,
                    notes_by_field,
                    passes: pass,
                };
                return Ok((result, violations));
            }
        }

        Err(ResolveError::NonTermination {
            max_passes: self.max_passes,
            still_firing: last_pass_rules,
        })
    }
}

/// Denormalize the audit trail: each explanation is noted against the fields
/// the rule assigned and the fields that caused it.
fn build_notes(rules: &RuleSet, fired: &[FiredRule]) -> BTreeMap<Field, FieldNotes> {
    let mut notes: BTreeMap<Field, FieldNotes> = Field::ALL
        .iter()
        .map(|f| (*f, FieldNotes::default()))
        .collect();

    for entry in fired {
        let cause = rules
            .get(entry.rule_id)
            .map(|r: &CompatibilityRule| r.cause)
            .unwrap_or(&[]);
        let mut touched: Vec<Field> = entry.assignments.iter().map(FieldValue::field).collect();
        for field in cause {
            if !touched.contains(field) {
                touched.push(*field);
            }
        }
        for field in touched {
            let slot = notes.entry(field).or_default();
            slot.has_issue = true;
            slot.notes.push(entry.explanation.clone());
        }
    }

    notes
}

#[cfg(test)]
mod tests;
