//! Progress handlers.

mod get_progress;

pub use get_progress::GetProgressHandler;
