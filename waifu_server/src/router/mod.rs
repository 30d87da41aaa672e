pub mod history;
pub mod source;
