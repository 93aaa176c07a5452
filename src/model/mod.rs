pub mod catalog;
pub mod config;
pub mod route;

pub use catalog::*;
pub use config::*;
pub use route::*;
