//! Fail-fast parameter checks.
//!
//! Every check walks the set in insertion order and returns on the first
//! offending parameter. Nothing is logged and nothing is mutated.

use std::cmp::Ordering;

use crate::params::{ParamError, ParamSet, ParamValue};

/// A validation step over a parameter set. Implemented for any
/// `Fn(&ParamSet) -> Result<(), ParamError>`, including the plain check
/// functions in this module.
pub trait Check {
    fn check(&self, params: &ParamSet) -> Result<(), ParamError>;
}

impl<F> Check for F
where
    F: Fn(&ParamSet) -> Result<(), ParamError>,
{
    fn check(&self, params: &ParamSet) -> Result<(), ParamError> {
        self(params)
    }
}

pub fn check_greater(threshold: f64, params: &ParamSet) -> Result<(), ParamError> {
    for (name, value) in params.iter() {
        if value.compare_to(threshold) != Some(Ordering::Greater) {
            return Err(ParamError::InvalidParameter(format!(
                "Expected {name} > {threshold}, got {value}"
            )));
        }
    }
    Ok(())
}

pub fn check_positive(params: &ParamSet) -> Result<(), ParamError> {
    check_greater(0.0, params)
}

pub fn check_int(params: &ParamSet) -> Result<(), ParamError> {
    for (name, value) in params.iter() {
        if !value.is_integral() {
            return Err(ParamError::InvalidParameter(format!(
                "Expected {name} integer, got {value}"
            )));
        }
    }
    Ok(())
}

pub fn check_in(choices: &[ParamValue], params: &ParamSet) -> Result<(), ParamError> {
    for (name, value) in params.iter() {
        if !choices.iter().any(|choice| choice.same_value(value)) {
            return Err(ParamError::InvalidParameter(format!(
                "{name} value {value} not recognized. Choose from [{}]",
                join_choices(choices)
            )));
        }
    }
    Ok(())
}

/// Closed-interval check. A malformed interval (`v_max <= v_min`) is reported
/// before any parameter is looked at.
pub fn check_between(v_min: f64, v_max: f64, params: &ParamSet) -> Result<(), ParamError> {
    check_greater(v_min, &ParamSet::new().with("v_max", v_max))?;
    for (name, value) in params.iter() {
        let above_min = matches!(
            value.compare_to(v_min),
            Some(Ordering::Greater | Ordering::Equal)
        );
        let below_max = matches!(
            value.compare_to(v_max),
            Some(Ordering::Less | Ordering::Equal)
        );
        if !(above_min && below_max) {
            return Err(ParamError::InvalidParameter(format!(
                "Expected {name} between {v_min} and {v_max}, got {value}"
            )));
        }
    }
    Ok(())
}

/// Runs `checks` in order against each parameter whose value differs from
/// `sentinel` (numbers compare across variants, so `0.0` matches `0`).
/// Each check sees a one-entry set holding only the parameter under test.
pub fn check_if_not(
    sentinel: &ParamValue,
    checks: &[&dyn Check],
    params: &ParamSet,
) -> Result<(), ParamError> {
    for (name, value) in params.iter() {
        if value.same_value(sentinel) {
            continue;
        }
        let single = ParamSet::new().with(name, value.clone());
        for check in checks {
            check.check(&single)?;
        }
    }
    Ok(())
}

fn join_choices(choices: &[ParamValue]) -> String {
    choices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/params/checks.rs"]
mod tests;
