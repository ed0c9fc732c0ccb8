pub mod encoding;
pub mod verify;
