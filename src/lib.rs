pub mod application;
pub mod domain;
pub mod io;

pub use domain::*;
