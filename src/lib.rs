pub mod config;
pub mod error;
pub mod git;
pub mod resolve;
pub mod retry;
pub mod sync;
pub mod ui;
pub mod workspace;

pub use error::{CheckoutError, Result};
