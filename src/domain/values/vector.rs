use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An ordered sequence of `f64` components. Its length is its dimensionality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    pub fn new(values: Vec<f64>) -> Self {
        Vector(values)
    }

    /// Parses whitespace-split tokens as `f64` components.
    ///
    /// `NaN` and infinities are rejected: they have no JSON representation and
    /// would not survive a save.
    pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DomainError> {
        tokens
            .iter()
            .map(|t| {
                let t = t.as_ref();
                t.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| DomainError::InvalidNumber(t.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Vector)
    }

    pub fn dimension(&self) -> usize {
        self.0.len()
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}
