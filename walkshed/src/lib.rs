pub mod app;
pub mod config;
pub mod export;
pub mod io;
pub mod model;
