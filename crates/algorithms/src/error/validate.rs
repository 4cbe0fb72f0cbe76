//! Validation predicates shared by the decoders

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a structural property of an encoding
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        log::debug!("{}: rejected encoding: {}", context, reason);
        return Err(Error::malformed(context, reason));
    }
    Ok(())
}

/// Validate that decoded coordinates satisfy the curve equation
#[inline(always)]
pub fn on_curve(is_on_curve: bool, context: &'static str) -> Result<()> {
    encoding(is_on_curve, context, "point is not on the curve")
}

/// Validate that a point lies in the prime-order subgroup
#[inline(always)]
pub fn in_subgroup(is_in_subgroup: bool, context: &'static str) -> Result<()> {
    encoding(is_in_subgroup, context, "point is not in the prime-order subgroup")
}
