pub mod config;
pub mod encoded;
pub mod message;
