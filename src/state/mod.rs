//! Application state module

mod app_state;
mod forms;
mod progress_state;
mod registration;

pub use app_state::*;
pub use forms::*;
pub use progress_state::*;
pub use registration::*;
