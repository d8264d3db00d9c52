//! Application state module

mod app_state;
mod forms;
mod toast;

pub use app_state::*;
pub use forms::*;
pub use toast::*;
