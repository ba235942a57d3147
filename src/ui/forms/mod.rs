//! Form rendering module
//!
//! - `field_renderer`: text field with inline validation message
//! - `registration_form`: progress gauge, fields, interest options and submit button

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
