use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which of the three inputs a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Mass,
    Gravity,
    Spring,
}

impl Quantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Mass => "mass",
            Quantity::Gravity => "gravity",
            Quantity::Spring => "spring constant",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("{quantity}: {text:?} is not a number")]
    NotANumber { quantity: Quantity, text: String },

    #[error("{quantity}: {text:?} is not a finite number")]
    NotFinite { quantity: Quantity, text: String },

    /// Every input parsed, but the energy range over the domain does not fit in an f64.
    #[error("m={}, g={}, k={} give energies too large to plot", .parameters.mass, .parameters.gravity, .parameters.spring)]
    Overflow { parameters: Parameters },
}

impl ValidationError {
    /// The offending input, when a single one is to blame.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            ValidationError::NotANumber { quantity, .. }
            | ValidationError::NotFinite { quantity, .. } => Some(*quantity),
            ValidationError::Overflow { .. } => None,
        }
    }
}

/// Parsed physical parameters. Produced fresh on every request, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Parameters {
    pub mass: f64,
    pub gravity: f64,
    pub spring: f64,
}

impl Parameters {
    pub fn new(mass: f64, gravity: f64, spring: f64) -> Parameters {
        Parameters { mass, gravity, spring }
    }

    /// `U(x, y)` at a single point.
    pub fn energy_at(&self, x: f64, y: f64) -> f64 {
        self.gravitational(y) + self.elastic(x * x + y * y)
    }

    pub(crate) fn gravitational(&self, y: f64) -> f64 {
        self.mass * self.gravity * y
    }

    pub(crate) fn elastic(&self, r2: f64) -> f64 {
        0.5 * self.spring * r2
    }
}

/// Raw text of the three input fields, as typed.
#[derive(Clone, Copy, Debug)]
pub struct ParameterText<'a> {
    pub mass: &'a str,
    pub gravity: &'a str,
    pub spring: &'a str,
}

impl<'a> ParameterText<'a> {
    pub fn new(mass: &'a str, gravity: &'a str, spring: &'a str) -> ParameterText<'a> {
        ParameterText { mass, gravity, spring }
    }

    /// Fails on the first field (mass, gravity, spring) that is not a finite number.
    pub fn parse(&self) -> Result<Parameters, ValidationError> {
        Ok(Parameters {
            mass: parse_quantity(Quantity::Mass, self.mass)?,
            gravity: parse_quantity(Quantity::Gravity, self.gravity)?,
            spring: parse_quantity(Quantity::Spring, self.spring)?,
        })
    }
}

fn parse_quantity(quantity: Quantity, text: &str) -> Result<f64, ValidationError> {
    let v: f64 = text.trim().parse().map_err(|_| ValidationError::NotANumber {
        quantity,
        text: text.to_string(),
    })?;
    if !v.is_finite() {
        return Err(ValidationError::NotFinite {
            quantity,
            text: text.to_string(),
        });
    }
    Ok(v)
}
