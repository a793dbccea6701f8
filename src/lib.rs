pub mod changelog;
pub mod cmake;
pub mod config;
pub mod conventional;
pub mod error;
pub mod git;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
