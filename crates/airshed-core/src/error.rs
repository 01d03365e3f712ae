//! Run-level error types.

use std::error::Error;
use std::fmt;

/// Errors that abort a simulation run before any iteration executes.
///
/// Numerical edge cases (zero mass sums, non-finite convergence bias)
/// are absorbed by the convergence state machine and are never surfaced
/// as errors; the only fatal conditions at this layer are emission
/// configuration problems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// An emission pollutant name is outside the recognized set
    /// {VOC, NOx, NH3, SOx, PM2_5}.
    UnknownEmission {
        /// The offending pollutant name.
        name: String,
    },
    /// An emission rate array does not match the grid dimensions.
    EmissionShapeMismatch {
        /// The pollutant whose array is misshapen.
        name: String,
        /// Grid dimensions as `(nz, ny, nx)`.
        expected: (usize, usize, usize),
        /// The array's dimensions as `(nz, ny, nx)`.
        got: (usize, usize, usize),
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEmission { name } => {
                write!(f, "unknown emissions pollutant '{name}'")
            }
            Self::EmissionShapeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "emission array for '{name}' has shape {got:?}, grid is {expected:?}"
            ),
        }
    }
}

impl Error for RunError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_emission_names_the_pollutant() {
        let err = RunError::UnknownEmission {
            name: "CO2".to_string(),
        };
        assert!(format!("{err}").contains("CO2"));
    }

    #[test]
    fn shape_mismatch_reports_both_shapes() {
        let err = RunError::EmissionShapeMismatch {
            name: "NOx".to_string(),
            expected: (3, 4, 5),
            got: (1, 4, 5),
        };
        let msg = format!("{err}");
        assert!(msg.contains("NOx"));
        assert!(msg.contains("(3, 4, 5)"));
        assert!(msg.contains("(1, 4, 5)"));
    }
}
