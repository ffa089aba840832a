pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod invoke;
pub mod logging;
pub mod reference;
pub mod registry;
pub mod source;
pub mod sync;
