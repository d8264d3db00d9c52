//! Form domain layer
//!
//! Type-safe intake form handling: field values, validation and the
//! submit state machine.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    Form, IntakeForm, SubmitError, ValidationError, BUTTONS_ROW, GENERATION_FAILED_MESSAGE,
};
