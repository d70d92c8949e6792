pub mod config;
pub mod logging;

pub mod debounce;
pub mod error;
pub mod existence;
pub mod presenter;
pub mod session;
pub mod url_model;

pub use error::InputError;
pub use session::UrlChecker;
