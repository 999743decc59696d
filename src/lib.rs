pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::browser::SystemLinkOpener;
pub use crate::adapters::http::HttpPageSource;
pub use crate::config::SiteProfile;
pub use crate::core::dispatch::Dispatcher;
pub use crate::utils::error::{MenuError, Result};
