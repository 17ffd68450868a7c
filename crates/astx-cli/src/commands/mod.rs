pub mod dir;
pub mod dispatch;
pub mod file;
pub mod shared;
pub mod source;
