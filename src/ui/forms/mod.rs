//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `policy_form`: The intake form

mod field_renderer;
mod policy_form;

pub use policy_form::draw_policy_form;
