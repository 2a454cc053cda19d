pub mod parse;
pub mod snapshot;
pub mod source;
