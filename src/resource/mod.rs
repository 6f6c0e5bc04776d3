pub mod png;
pub mod source;
