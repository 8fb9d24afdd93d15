use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::params::checks::{
    check_between, check_greater, check_if_not, check_in, check_int, check_positive,
};
use crate::params::{ParamError, ParamSet, ParamValue};

#[derive(Debug, Error)]
pub enum RulesLoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Checks usable inside an `if_not` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedCheck {
    Positive,
    Int,
}

impl NamedCheck {
    pub fn run(self, params: &ParamSet) -> Result<(), ParamError> {
        match self {
            NamedCheck::Positive => check_positive(params),
            NamedCheck::Int => check_int(params),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum RuleKind {
    Positive,
    Int,
    Greater { threshold: f64 },
    In { choices: Vec<ParamValue> },
    Between { min: f64, max: f64 },
    IfNot {
        sentinel: ParamValue,
        then: Vec<NamedCheck>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,
    pub params: Vec<String>,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self.kind {
            RuleKind::Positive => "positive",
            RuleKind::Int => "int",
            RuleKind::Greater { .. } => "greater",
            RuleKind::In { .. } => "in",
            RuleKind::Between { .. } => "between",
            RuleKind::IfNot { .. } => "if_not",
        }
    }

    pub fn apply(&self, params: &ParamSet) -> Result<(), ParamError> {
        let selected = params.select(&self.params)?;
        match &self.kind {
            RuleKind::Positive => check_positive(&selected),
            RuleKind::Int => check_int(&selected),
            RuleKind::Greater { threshold } => check_greater(*threshold, &selected),
            RuleKind::In { choices } => check_in(choices, &selected),
            RuleKind::Between { min, max } => check_between(*min, *max, &selected),
            RuleKind::IfNot { sentinel, then } => {
                let chained = |p: &ParamSet| then.iter().try_for_each(|c| c.run(p));
                check_if_not(sentinel, &[&chained], &selected)
            }
        }
    }
}

/// A parameter table plus the rules it must satisfy, as read from TOML:
///
/// ```toml
/// [params]
/// knn = 5
/// t = "auto"
///
/// [[rule]]
/// check = "positive"
/// params = ["knn"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub params: ParamSet,
    #[serde(default, rename = "rule")]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_toml_str(text: &str) -> Result<Self, RulesLoadError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, RulesLoadError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies every rule in file order, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.rules
            .iter()
            .try_for_each(|rule| rule.apply(&self.params))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/params/rules.rs"]
mod tests;
