pub mod log;
pub mod url;
