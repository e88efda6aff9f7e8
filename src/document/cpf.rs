//! CPF (Brazilian taxpayer number) check digits, generation and validation.
//!
//! A CPF is 11 decimal digits: a 9 digit base followed by two check digits,
//! each computed with [`check_digit`] over everything before it.

use log::trace;
use rand::Rng;

use crate::error::ToolkitError;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Number of digits in a CPF base.
pub const CPF_BASE_LENGTH: usize = 9;

/// Output style for generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpfStyle {
    /// `###.###.###-##`
    #[default]
    Formatted,
    /// Eleven bare digits
    Plain,
}

/// Compute the check digit for a sequence of decimal digits.
///
/// Weights run from `len + 1` down to 2, left to right. The digit is 0 when
/// the weighted sum modulo 11 is below 2, otherwise `11 - remainder`.
///
/// # Examples
///
/// ```
/// use devtoolkit::check_digit;
///
/// let base = [1, 3, 4, 2, 4, 1, 0, 1, 0];
/// assert_eq!(check_digit(&base), 6);
/// ```
pub fn check_digit(base: &[u8]) -> u8 {
    let weight_start = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * (weight_start - i as u32))
        .sum();

    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}

/// Both check digits for a 9 digit base.
pub fn check_digits(base: &[u8; CPF_BASE_LENGTH]) -> (u8, u8) {
    let d1 = check_digit(base);
    let mut extended = base.to_vec();
    extended.push(d1);
    let d2 = check_digit(&extended);
    (d1, d2)
}

/// Generate a valid CPF using the thread-local RNG.
pub fn generate_cpf(style: CpfStyle) -> String {
    generate_cpf_with_rng(&mut rand::thread_rng(), style)
}

/// Generate a valid CPF from the given RNG.
///
/// Draws 9 uniform digits and appends both check digits. Bases made of a
/// single repeated digit are redrawn, since validation rejects them.
pub fn generate_cpf_with_rng<R: Rng + ?Sized>(rng: &mut R, style: CpfStyle) -> String {
    let mut base = [0u8; CPF_BASE_LENGTH];
    loop {
        for digit in base.iter_mut() {
            *digit = rng.gen_range(0..10);
        }
        if base.iter().any(|&d| d != base[0]) {
            break;
        }
    }

    let (d1, d2) = check_digits(&base);
    let digits: String = base
        .iter()
        .chain([d1, d2].iter())
        .map(|d| char::from(b'0' + d))
        .collect();

    trace!("generated cpf with check digits {}{}", d1, d2);

    match style {
        CpfStyle::Formatted => mask_cpf(&digits),
        CpfStyle::Plain => digits,
    }
}

/// Validate a CPF, returning the bare 11 digits on success.
///
/// Any non-digit characters are ignored, so formatted and plain input are
/// both accepted.
pub fn check_cpf(input: &str) -> Result<String, ToolkitError> {
    let digits = strip_non_digits(input);
    if digits.len() != CPF_LENGTH {
        return Err(ToolkitError::InvalidLength {
            expected: CPF_LENGTH,
            found: digits.len(),
        });
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    if values.iter().all(|&d| d == values[0]) {
        return Err(ToolkitError::RepeatedDigits);
    }

    let mut base = [0u8; CPF_BASE_LENGTH];
    base.copy_from_slice(&values[..CPF_BASE_LENGTH]);
    let (d1, d2) = check_digits(&base);

    if values[9] != d1 || values[10] != d2 {
        return Err(ToolkitError::ChecksumMismatch {
            expected: format!("{}{}", d1, d2),
            found: digits[CPF_BASE_LENGTH..].to_string(),
        });
    }

    Ok(digits)
}

/// Whether the input is a valid CPF.
///
/// # Examples
///
/// ```
/// use devtoolkit::validate_cpf;
///
/// assert!(validate_cpf("134.241.010-60"));
/// assert!(!validate_cpf("111.111.111-11"));
/// assert!(!validate_cpf("134.241.010-61"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

/// Live validation status while the user types.
///
/// `None` until exactly 11 digits are present, then whether they are valid.
pub fn cpf_status(input: &str) -> Option<bool> {
    if strip_non_digits(input).len() == CPF_LENGTH {
        Some(validate_cpf(input))
    } else {
        None
    }
}

/// Mask the digits of the input as `###.###.###-##`.
///
/// Input that does not contain exactly 11 digits is returned as its digits only.
pub fn format_cpf(input: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.len() == CPF_LENGTH {
        mask_cpf(&digits)
    } else {
        digits
    }
}

fn mask_cpf(digits: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

pub(crate) fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_golden_vector() {
        // d1: weights 10..2 sum to 115, 115 % 11 = 5, 11 - 5 = 6
        // d2: weights 11..2 over 1342410106 sum to 143, 143 % 11 = 0 -> 0
        let base = [1, 3, 4, 2, 4, 1, 0, 1, 0];
        assert_eq!(check_digits(&base), (6, 0));
        assert!(validate_cpf("134.241.010-60"));
    }

    #[test]
    fn test_remainder_below_two_gives_zero() {
        // 1*2 = 2, 2 % 11 = 2 -> 9; 0 -> 0
        assert_eq!(check_digit(&[0]), 0);
        assert_eq!(check_digit(&[1]), 9);
        // 6*2 = 12, 12 % 11 = 1 -> 0
        assert_eq!(check_digit(&[6]), 0);
    }

    #[test]
    fn test_generated_cpfs_validate() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let formatted = generate_cpf_with_rng(&mut rng, CpfStyle::Formatted);
            let plain = generate_cpf_with_rng(&mut rng, CpfStyle::Plain);
            assert_eq!(formatted.len(), 14);
            assert_eq!(plain.len(), 11);
            assert!(validate_cpf(&formatted), "{}", formatted);
            assert!(validate_cpf(&plain), "{}", plain);
        }
    }

    #[test]
    fn test_check_cpf_errors() {
        assert_eq!(
            check_cpf("123"),
            Err(ToolkitError::InvalidLength { expected: 11, found: 3 })
        );
        assert_eq!(check_cpf("000.000.000-00"), Err(ToolkitError::RepeatedDigits));
        assert_eq!(
            check_cpf("134.241.010-00"),
            Err(ToolkitError::ChecksumMismatch {
                expected: "60".to_string(),
                found: "00".to_string()
            })
        );
    }

    #[test]
    fn test_cpf_status() {
        assert_eq!(cpf_status("134.241"), None);
        assert_eq!(cpf_status("13424101060"), Some(true));
        assert_eq!(cpf_status("13424101061"), Some(false));
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("13424101060"), "134.241.010-60");
        assert_eq!(format_cpf("134.241.010-60"), "134.241.010-60");
        assert_eq!(format_cpf("1342"), "1342");
    }
}
