//! AscendCV library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod session;

pub use error::{AscendCvError, Result};
pub use config::Config;
