//! Point encodings

use alloc::string::String;
use alloc::vec::Vec;

use dpairing_api::{Serialize, TextSerialize};

use super::text::{expect_separator, read_flag};
use super::{FLAG_IDENTITY, FLAG_POINT};
use crate::ec::{Affine, SwCurveConfig};
use crate::error::{validate, Error, Result, ResultExt};
use crate::field::{Field, SqrtField};

/// Splits off the flag byte, checking the total length
fn split_flag<'a>(
    bytes: &'a [u8],
    expected: usize,
    context: &'static str,
) -> Result<(bool, &'a [u8])> {
    validate::length(context, bytes.len(), expected)?;
    match bytes[0] {
        FLAG_IDENTITY => {
            validate::encoding(
                bytes[1..].iter().all(|&b| b == 0),
                context,
                "identity must be zero-filled",
            )?;
            Ok((false, &bytes[1..]))
        }
        FLAG_POINT => Ok((true, &bytes[1..])),
        _ => {
            log::debug!("{}: bad flag byte {:#04x}", context, bytes[0]);
            Err(Error::malformed(context, "flag must be 0x00 or 0x01"))
        }
    }
}

impl<C: SwCurveConfig> Affine<C> {
    /// Length of [`to_uncompressed`](Self::to_uncompressed)
    pub const UNCOMPRESSED_LEN: usize = 1 + 2 * C::BaseField::ENCODED_LEN;
    /// Length of [`to_compressed`](Self::to_compressed)
    pub const COMPRESSED_LEN: usize = 2 + C::BaseField::ENCODED_LEN;

    /// `[flag][X][Y]`
    pub fn to_uncompressed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::UNCOMPRESSED_LEN);
        if self.infinity {
            out.resize(Self::UNCOMPRESSED_LEN, 0);
            return out;
        }
        out.push(FLAG_POINT);
        out.extend_from_slice(&self.x.to_bytes());
        out.extend_from_slice(&self.y.to_bytes());
        out
    }

    /// `[flag][X][parity]`
    pub fn to_compressed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::COMPRESSED_LEN);
        if self.infinity {
            out.resize(Self::COMPRESSED_LEN, 0);
            return out;
        }
        out.push(FLAG_POINT);
        out.extend_from_slice(&self.x.to_bytes());
        out.push(self.y.sign_bit() as u8);
        out
    }

    /// Decodes `[flag][X][Y]`, rejecting points off the curve
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "Affine::from_uncompressed";
        let (flag, rest) = split_flag(bytes, Self::UNCOMPRESSED_LEN, CTX)?;
        if !flag {
            return Ok(Self::identity());
        }
        let (xb, yb) = rest.split_at(C::BaseField::ENCODED_LEN);
        let x = C::BaseField::from_bytes(xb).with_context(CTX)?;
        let y = C::BaseField::from_bytes(yb).with_context(CTX)?;
        let p = Self::new_unchecked(x, y);
        validate::on_curve(p.is_on_curve(), CTX)?;
        Ok(p)
    }

    /// Like [`from_uncompressed`](Self::from_uncompressed), also rejecting
    /// points outside the prime-order subgroup
    pub fn from_uncompressed_validated(bytes: &[u8]) -> Result<Self> {
        let p = Self::from_uncompressed(bytes)?;
        validate::in_subgroup(
            p.is_in_correct_subgroup(),
            "Affine::from_uncompressed_validated",
        )?;
        Ok(p)
    }

    /// Writes `flag X parity`
    pub fn write_text_compressed(&self, out: &mut String) {
        if self.infinity {
            out.push('0');
            out.push(' ');
            C::BaseField::ZERO.write_text(out);
            out.push_str(" 0");
            return;
        }
        out.push('1');
        out.push(' ');
        self.x.write_text(out);
        out.push(' ');
        out.push(if self.y.sign_bit() { '1' } else { '0' });
    }
}

impl<C: SwCurveConfig> Affine<C>
where
    C::BaseField: SqrtField,
{
    /// Decodes `[flag][X][parity]`, recomputing Y by a square root
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "Affine::from_compressed";
        let (flag, rest) = split_flag(bytes, Self::COMPRESSED_LEN, CTX)?;
        if !flag {
            return Ok(Self::identity());
        }
        let (xb, parity) = rest.split_at(C::BaseField::ENCODED_LEN);
        let sign = match parity[0] {
            0 => false,
            1 => true,
            _ => return Err(Error::malformed(CTX, "parity byte must be 0 or 1")),
        };
        let x = C::BaseField::from_bytes(xb).with_context(CTX)?;
        Self::decompress(x, sign, CTX)
    }

    /// Like [`from_compressed`](Self::from_compressed), also rejecting
    /// points outside the prime-order subgroup
    pub fn from_compressed_validated(bytes: &[u8]) -> Result<Self> {
        let p = Self::from_compressed(bytes)?;
        validate::in_subgroup(
            p.is_in_correct_subgroup(),
            "Affine::from_compressed_validated",
        )?;
        Ok(p)
    }

    /// Reads `flag X parity`
    pub fn read_text_compressed(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "Affine::read_text_compressed";
        let (flag, rest) = read_flag(input, CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (x, rest) = C::BaseField::read_text(rest).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (sign, rest) = read_flag(rest, CTX)?;
        if !flag {
            validate::encoding(x.is_zero() && !sign, CTX, "identity must be zero-filled")?;
            return Ok((Self::identity(), rest));
        }
        Ok((Self::decompress(x, sign, CTX)?, rest))
    }

    fn decompress(x: C::BaseField, sign: bool, context: &'static str) -> Result<Self> {
        let p = Self::from_x_and_sign(x, sign).ok_or(Error::NotASquare { context })?;
        // y = 0 has only one sign
        validate::encoding(p.y.sign_bit() == sign, context, "parity does not match")?;
        Ok(p)
    }

    /// Decodes a complete compressed text encoding
    pub fn from_text_compressed(input: &str) -> Result<Self> {
        let (p, rest) = Self::read_text_compressed(input)?;
        validate::encoding(rest.is_empty(), "Affine::from_text_compressed", "trailing input")?;
        Ok(p)
    }

    /// Encodes as `flag X parity`
    pub fn to_text_compressed(&self) -> String {
        let mut out = String::new();
        self.write_text_compressed(&mut out);
        out
    }
}

impl<C: SwCurveConfig> Serialize for Affine<C> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_uncompressed(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_uncompressed()
    }
}

/// `flag X Y`, the identity written with zero coordinates
impl<C: SwCurveConfig> TextSerialize for Affine<C> {
    fn write_text(&self, out: &mut String) {
        let (flag, x, y) = if self.infinity {
            ('0', C::BaseField::ZERO, C::BaseField::ZERO)
        } else {
            ('1', self.x, self.y)
        };
        out.push(flag);
        out.push(' ');
        x.write_text(out);
        out.push(' ');
        y.write_text(out);
    }

    fn read_text(input: &str) -> Result<(Self, &str)> {
        const CTX: &str = "Affine::read_text";
        let (flag, rest) = read_flag(input, CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (x, rest) = C::BaseField::read_text(rest).with_context(CTX)?;
        let rest = expect_separator(rest, ' ', CTX)?;
        let (y, rest) = C::BaseField::read_text(rest).with_context(CTX)?;
        if !flag {
            validate::encoding(
                x.is_zero() && y.is_zero(),
                CTX,
                "identity must be zero-filled",
            )?;
            return Ok((Self::identity(), rest));
        }
        let p = Self::new_unchecked(x, y);
        validate::on_curve(p.is_on_curve(), CTX)?;
        Ok((p, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_split_borrows_the_payload() {
        let bytes = [FLAG_POINT, 7, 8, 9];
        let (is_point, rest) = split_flag(&bytes, 4, "split_flag").unwrap();
        assert!(is_point);
        assert_eq!(rest, &bytes[1..]);

        let identity = [FLAG_IDENTITY, 0, 0, 0];
        let (is_point, rest) = split_flag(&identity, 4, "split_flag").unwrap();
        assert!(!is_point);
        assert_eq!(rest.len(), 3);

        assert!(matches!(
            split_flag(&[FLAG_IDENTITY, 0, 1, 0], 4, "split_flag"),
            Err(Error::MalformedEncoding { .. })
        ));
        assert!(matches!(
            split_flag(&[0x02, 0, 0, 0], 4, "split_flag"),
            Err(Error::MalformedEncoding { .. })
        ));
        assert!(matches!(
            split_flag(&bytes[..3], 4, "split_flag"),
            Err(Error::InvalidLength { .. })
        ));
    }
}
