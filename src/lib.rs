//! # pagenav
//!
//! In-page navigation for static sites: resolve a page identifier to its
//! content through a bounded FIFO cache or a timeout-guarded HTTP fetch,
//! then drive the UI state transitions through an injected presenter.
//!
//! - **Bounded page cache**: fixed capacity, strict FIFO eviction
//! - **Timeout-guarded fetch**: the request is aborted once its bound elapses
//! - **Uniform failure surface**: users see one generic message, the
//!   underlying error goes to the logs
//! - **Async/await**: built on Tokio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagenav::{NavConfig, Navigator, Presenter};
//!
//! struct ConsolePresenter;
//!
//! impl Presenter for ConsolePresenter {
//!     fn show_busy(&self) {}
//!     fn hide_busy(&self) {}
//!     fn show_error(&self, message: &str) { eprintln!("{}", message); }
//!     fn clear_error(&self) {}
//!     fn transition_out(&self) {}
//!     fn replace_content(&self, content: &str) { println!("{}", content); }
//!     fn transition_in(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NavConfig::new("https://example.com");
//!     let navigator = Navigator::connect(config, ConsolePresenter)?;
//!
//!     navigator.navigate("about.html").await?;
//!     navigator.navigate("about.html").await?; // served from cache
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod fetch;
pub mod navigator;
pub mod presenter;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, PageCache};
pub use error::{NavError, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use navigator::{LOAD_FAILED_MESSAGE, NavConfig, Navigator};
pub use presenter::Presenter;
