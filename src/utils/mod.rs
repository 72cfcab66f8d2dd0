pub mod env;
pub mod timer;
