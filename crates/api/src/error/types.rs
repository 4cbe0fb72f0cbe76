//! Error type definitions for pairing and curve operations

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Primary error type for field, curve and pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Inversion of the additive identity
    DivisionByZero { context: &'static str },

    /// Square root of a quadratic non-residue
    NotASquare { context: &'static str },

    /// Input bytes or text do not describe a valid value
    MalformedEncoding {
        context: &'static str,
        #[cfg(feature = "alloc")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for pairing operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build a `MalformedEncoding` error
    #[allow(unused_variables)]
    pub fn malformed(context: &'static str, message: &str) -> Self {
        Self::MalformedEncoding {
            context,
            #[cfg(feature = "alloc")]
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::NotASquare { .. } => Self::NotASquare { context },
            #[cfg(feature = "alloc")]
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            #[cfg(not(feature = "alloc"))]
            Self::MalformedEncoding { .. } => Self::MalformedEncoding { context },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }

    /// The operation or type the error was raised from
    pub fn context(&self) -> &'static str {
        match self {
            Self::DivisionByZero { context }
            | Self::NotASquare { context }
            | Self::MalformedEncoding { context, .. }
            | Self::InvalidLength { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DivisionByZero { context } => {
                write!(f, "{}: division by zero", context)
            }
            Self::NotASquare { context } => {
                write!(f, "{}: element is not a square", context)
            }
            #[cfg(feature = "alloc")]
            Self::MalformedEncoding { context, message } => {
                write!(f, "Malformed encoding: {}: {}", context, message)
            }
            #[cfg(not(feature = "alloc"))]
            Self::MalformedEncoding { context } => {
                write!(f, "Malformed encoding: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_context_keeps_details() {
        let err = Error::InvalidLength {
            context: "inner",
            expected: 48,
            actual: 47,
        }
        .with_context("G1Affine::from_compressed");

        assert_eq!(
            err,
            Error::InvalidLength {
                context: "G1Affine::from_compressed",
                expected: 48,
                actual: 47,
            }
        );
        assert_eq!(err.context(), "G1Affine::from_compressed");
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_mentions_reason() {
        let err = Error::malformed("Fp2::read_text", "expected separator ' '");
        assert_eq!(
            err.to_string(),
            "Malformed encoding: Fp2::read_text: expected separator ' '"
        );
        assert_eq!(
            Error::DivisionByZero { context: "Fp::invert" }.to_string(),
            "Fp::invert: division by zero"
        );
    }
}
