pub mod decode;
pub mod scratch;
