pub mod path;
pub mod user;
