//! Brazilian document numbers used as test data.
//!
//! - CPF: check-digit algorithm, generation, validation and masking
//! - CEP: generation, masking and lookup through a postal directory

pub mod cep;
pub mod cpf;

// Re-export main functionality
pub use cep::{
    format_cep, format_cep_partial, generate_cep, generate_cep_with_rng, lookup_cep,
    AddressRecord, InMemoryDirectory, PostalDirectory, CEP_LENGTH,
};
pub use cpf::{
    check_cpf, check_digit, check_digits, cpf_status, format_cpf, generate_cpf,
    generate_cpf_with_rng, validate_cpf, CpfStyle, CPF_LENGTH,
};
