//! Resource entity definitions

pub mod invoice;
pub mod payment;

pub use invoice::Invoice;
pub use payment::Payment;

// Serde helpers for the wire contract: fields are omitted when at their
// zero value. `String::is_empty` covers the text fields.

pub(crate) fn zero_i64(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn zero_f64(value: &f64) -> bool {
    *value == 0.0
}
