//! Form domain layer
//!
//! Type-safe form handling for the customer and address panels.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{AddressForm, CustomerForm, Form};
