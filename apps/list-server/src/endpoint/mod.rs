pub mod misc;
pub mod user;
