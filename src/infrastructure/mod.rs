pub mod json;
pub mod transport;
