pub mod models;
pub mod session;
pub mod view;

#[cfg(feature = "backend")]
pub mod cli;
