//! CEP (Brazilian postal code) masking, generation and directory lookup.
//!
//! A CEP is 8 decimal digits with no check digit. Lookups are delegated to a
//! [`PostalDirectory`] supplied by the caller.

use std::collections::HashMap;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::document::cpf::strip_non_digits;
use crate::error::{TextFormat, ToolkitError};

/// Number of digits in a CEP.
pub const CEP_LENGTH: usize = 8;

/// Address record returned by a postal directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    /// Postal code, formatted `#####-###`
    pub cep: String,
    /// Street name
    pub street: String,
    /// Complement (building, range of numbers)
    pub complement: String,
    /// Neighborhood
    pub neighborhood: String,
    /// City
    pub city: String,
    /// Two letter state code
    pub state: String,
    /// Telephone area code
    pub area_code: String,
}

/// A source of address records keyed by CEP.
///
/// Implementations must return [`ToolkitError::LookupNotFound`] when the
/// directory answered but has no record, and
/// [`ToolkitError::LookupTransport`] when it could not be reached.
pub trait PostalDirectory {
    /// Look up the record for 8 bare digits.
    fn find(&self, digits: &str) -> Result<AddressRecord, ToolkitError>;
}

/// Directory backed by a map, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    records: HashMap<String, AddressRecord>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keyed by the digits of its `cep` field.
    pub fn insert(&mut self, record: AddressRecord) {
        self.records.insert(strip_non_digits(&record.cep), record);
    }
}

impl PostalDirectory for InMemoryDirectory {
    fn find(&self, digits: &str) -> Result<AddressRecord, ToolkitError> {
        self.records
            .get(digits)
            .cloned()
            .ok_or_else(|| ToolkitError::LookupNotFound(mask_cep(digits)))
    }
}

/// Validate the input and look it up in the directory.
///
/// Fails with a CEP format error, before any lookup, unless the input holds
/// exactly 8 digits.
pub fn lookup_cep<D: PostalDirectory + ?Sized>(
    directory: &D,
    input: &str,
) -> Result<AddressRecord, ToolkitError> {
    let digits = strip_non_digits(input);
    if digits.len() != CEP_LENGTH {
        return Err(ToolkitError::format(
            TextFormat::Cep,
            "CEP must contain 8 numeric digits",
        ));
    }

    let result = directory.find(&digits);
    match &result {
        Ok(_) => debug!("cep lookup found a record"),
        Err(ToolkitError::LookupNotFound(_)) => debug!("cep lookup found no record"),
        Err(e) => debug!("cep lookup failed: {}", e),
    }
    result
}

/// Generate a random CEP using the thread-local RNG.
pub fn generate_cep(formatted: bool) -> String {
    generate_cep_with_rng(&mut rand::thread_rng(), formatted)
}

/// Generate 8 uniform random digits, optionally masked as `#####-###`.
pub fn generate_cep_with_rng<R: Rng + ?Sized>(rng: &mut R, formatted: bool) -> String {
    let digits: String = (0..CEP_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect();

    if formatted {
        mask_cep(&digits)
    } else {
        digits
    }
}

/// Mask a complete CEP as `#####-###`.
///
/// Input without exactly 8 digits is returned as its digits only.
///
/// # Examples
///
/// ```
/// use devtoolkit::format_cep;
///
/// assert_eq!(format_cep("01001000"), "01001-000");
/// assert_eq!(format_cep("0100"), "0100");
/// ```
pub fn format_cep(input: &str) -> String {
    let digits = strip_non_digits(input);
    if digits.len() == CEP_LENGTH {
        mask_cep(&digits)
    } else {
        digits
    }
}

/// Progressive mask applied while the user types.
///
/// Keeps at most 8 digits and inserts the hyphen once a sixth digit appears.
///
/// # Examples
///
/// ```
/// use devtoolkit::format_cep_partial;
///
/// assert_eq!(format_cep_partial("12345"), "12345");
/// assert_eq!(format_cep_partial("123456"), "12345-6");
/// assert_eq!(format_cep_partial("1234567890"), "12345-678");
/// ```
pub fn format_cep_partial(input: &str) -> String {
    let digits: String = strip_non_digits(input).chars().take(CEP_LENGTH).collect();
    if digits.len() > 5 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits
    }
}

fn mask_cep(digits: &str) -> String {
    if digits.len() == CEP_LENGTH {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits.to_string()
    }
}
