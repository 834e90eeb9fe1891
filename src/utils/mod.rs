pub mod classify;
pub mod codec;
pub mod phone;
pub mod validate;
