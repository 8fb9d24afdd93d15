pub mod checks;
pub mod rules;

use std::cmp::Ordering;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{0}")]
    InvalidParameter(String),
}

/// A single named parameter value.
///
/// The derived `PartialEq` is structural. Membership and sentinel checks use
/// [`ParamValue::same_value`], which compares numbers across variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// 2^63 as f64; the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float bound.
fn compare_int(value: i64, bound: f64) -> Option<Ordering> {
    if bound.is_nan() {
        return None;
    }
    if bound >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if bound < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    let floor = bound.floor();
    match value.cmp(&(floor as i64)) {
        Ordering::Equal if bound > floor => Some(Ordering::Less),
        other => Some(other),
    }
}

impl ParamValue {
    fn as_integer(&self) -> Option<i64> {
        match self {
            ParamValue::Bool(b) => Some(i64::from(*b)),
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Orders a numeric value against `bound`. Booleans count as 0/1;
    /// integers are compared exactly. `None` for NaN and non-numbers.
    pub fn compare_to(&self, bound: f64) -> Option<Ordering> {
        match self {
            ParamValue::Float(f) => f.partial_cmp(&bound),
            _ => compare_int(self.as_integer()?, bound),
        }
    }

    /// Booleans are integral; floats never are, even `2.0`.
    pub fn is_integral(&self) -> bool {
        self.as_integer().is_some()
    }

    /// Value equality: `Bool`, `Int` and `Float` compare by numeric value
    /// (`0 == 0.0 == false`); strings and `None` compare exactly.
    pub fn same_value(&self, other: &ParamValue) -> bool {
        match (self, other) {
            (ParamValue::Float(a), ParamValue::Float(b)) => a == b,
            (ParamValue::Float(f), v) | (v, ParamValue::Float(f)) => v
                .as_integer()
                .is_some_and(|i| compare_int(i, *f) == Some(Ordering::Equal)),
            (ParamValue::Str(a), ParamValue::Str(b)) => a == b,
            (ParamValue::None, ParamValue::None) => true,
            (a, b) => match (a.as_integer(), b.as_integer()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::None => write!(f, "none"),
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(value as f64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::None, Into::into)
    }
}

/// Ordered name -> value collection. Iteration follows insertion order so
/// fail-fast checks report the same parameter on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Replaces an existing entry in place, keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subset in the order of `names`. Unknown names are an invalid parameter.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<ParamSet, ParamError> {
        let mut out = ParamSet::new();
        for name in names {
            let name = name.as_ref();
            let value = self.get(name).ok_or_else(|| {
                ParamError::InvalidParameter(format!("unknown parameter {name}"))
            })?;
            out.insert(name, value.clone());
        }
        Ok(out)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParamSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl<'de> Deserialize<'de> for ParamSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ParamSetVisitor;

        impl<'de> Visitor<'de> for ParamSetVisitor {
            type Value = ParamSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of parameter names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<ParamSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = ParamSet::new();
                while let Some((name, value)) = map.next_entry::<String, ParamValue>()? {
                    set.insert(name, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ParamSetVisitor)
    }
}

/// Builds a [`ParamSet`] from `name => value` pairs, keeping their order.
///
/// ```
/// use ephate_utils::params;
/// let set = params! { knn => 5, decay => 40.0, t => "auto" };
/// assert_eq!(set.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::params::ParamSet::new()
    };
    ($($name:ident => $value:expr),+ $(,)?) => {
        $crate::params::ParamSet::new()$(.with(stringify!($name), $value))+
    };
}

#[cfg(test)]
#[path = "../../tests/src_inline/params/mod.rs"]
mod tests;
