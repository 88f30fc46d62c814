pub mod parse;
pub mod stats;
pub mod url;
