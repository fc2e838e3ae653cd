pub mod intake_handler;

pub use intake_handler::{show_form, submit_form};
