pub mod clock;
pub mod constants;
pub mod forms;
pub mod templates;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
