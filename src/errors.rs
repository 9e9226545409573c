use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Gamma,
    GasConstant,
    StagnationTemperature,
    ExitPressureRatio,
    AmbientPressureRatio,
    AreaRatio,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Gamma => "gamma",
            Parameter::GasConstant => "R",
            Parameter::StagnationTemperature => "T0",
            Parameter::ExitPressureRatio => "pe/p0",
            Parameter::AmbientPressureRatio => "pa/p0",
            Parameter::AreaRatio => "A_e/A*",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    GreaterThan(f64),
    AtLeast(f64),
    HalfOpen { lower: f64, upper: f64 },
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::GreaterThan(min) => write!(f, "> {}", min),
            Bound::AtLeast(min) => write!(f, ">= {}", min),
            Bound::HalfOpen { lower, upper } => write!(f, "in the range [{}, {})", lower, upper),
        }
    }
}

impl Bound {
    /// True when `value` falls outside the bound. NaN is never excluded.
    pub fn excludes(&self, value: f64) -> bool {
        match *self {
            Bound::GreaterThan(min) => value <= min,
            Bound::AtLeast(min) => value < min,
            Bound::HalfOpen { lower, upper } => value < lower || value >= upper,
        }
    }
}

/// Coarse classification of a [`RelationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Domain,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelationError {
    #[error("All inputs must be numeric (float, int, or array); {parameter} was {found}")]
    NonNumeric { parameter: Parameter, found: String },

    #[error("{parameter} has shape {shape:?}, which cannot be broadcast to {target:?}")]
    ShapeMismatch {
        parameter: Parameter,
        shape: Vec<usize>,
        target: Vec<usize>,
    },

    #[error("{parameter} must be {bound}.")]
    OutOfDomain { parameter: Parameter, bound: Bound },
}

impl RelationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelationError::NonNumeric { .. } | RelationError::ShapeMismatch { .. } => {
                ErrorKind::Type
            }
            RelationError::OutOfDomain { .. } => ErrorKind::Domain,
        }
    }

    pub fn parameter(&self) -> Parameter {
        match self {
            RelationError::NonNumeric { parameter, .. }
            | RelationError::ShapeMismatch { parameter, .. }
            | RelationError::OutOfDomain { parameter, .. } => *parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_name_parameter_and_bound() {
        let err = RelationError::OutOfDomain {
            parameter: Parameter::Gamma,
            bound: Bound::GreaterThan(1.0),
        };
        assert_eq!(err.to_string(), "gamma must be > 1.");

        let err = RelationError::OutOfDomain {
            parameter: Parameter::ExitPressureRatio,
            bound: Bound::HalfOpen {
                lower: 0.0,
                upper: 1.0,
            },
        };
        assert_eq!(err.to_string(), "pe/p0 must be in the range [0, 1).");

        let err = RelationError::OutOfDomain {
            parameter: Parameter::AreaRatio,
            bound: Bound::AtLeast(1.0),
        };
        assert_eq!(err.to_string(), "A_e/A* must be >= 1.");
    }

    #[test]
    fn test_bound_exclusion() {
        assert!(Bound::GreaterThan(1.0).excludes(1.0));
        assert!(!Bound::GreaterThan(1.0).excludes(1.0 + f64::EPSILON));
        assert!(!Bound::AtLeast(1.0).excludes(1.0));
        assert!(Bound::AtLeast(1.0).excludes(0.5));

        let ratio = Bound::HalfOpen {
            lower: 0.0,
            upper: 1.0,
        };
        assert!(!ratio.excludes(0.0));
        assert!(ratio.excludes(1.0));
        assert!(ratio.excludes(-1e-300));
        assert!(!ratio.excludes(f64::NAN));
    }

    #[test]
    fn test_error_kinds() {
        let non_numeric = RelationError::NonNumeric {
            parameter: Parameter::GasConstant,
            found: "text \"air\"".to_string(),
        };
        assert_eq!(non_numeric.kind(), ErrorKind::Type);
        assert_eq!(non_numeric.parameter(), Parameter::GasConstant);

        let mismatch = RelationError::ShapeMismatch {
            parameter: Parameter::StagnationTemperature,
            shape: vec![2],
            target: vec![3],
        };
        assert_eq!(mismatch.kind(), ErrorKind::Type);

        let domain = RelationError::OutOfDomain {
            parameter: Parameter::AmbientPressureRatio,
            bound: Bound::HalfOpen {
                lower: 0.0,
                upper: 1.0,
            },
        };
        assert_eq!(domain.kind(), ErrorKind::Domain);
        assert_eq!(domain.parameter(), Parameter::AmbientPressureRatio);
    }

    #[test]
    fn test_non_numeric_message() {
        let err = RelationError::NonNumeric {
            parameter: Parameter::StagnationTemperature,
            found: "nothing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "All inputs must be numeric (float, int, or array); T0 was nothing"
        );
    }
}
