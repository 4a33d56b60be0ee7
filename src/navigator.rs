//! Navigation orchestration
//!
//! [`Navigator::navigate`] is the one entry point: busy indicator up,
//! exit transition, resolve content (cache or fetch), swap content, busy
//! indicator down no matter what.

use crate::cache::{DEFAULT_CACHE_CAPACITY, PageCache};
use crate::error::Result;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::presenter::Presenter;
use std::time::Duration;
use tracing::{debug, error, info};

/// Fixed message shown for every navigation failure
///
/// The user sees one generic message whatever went wrong; the underlying
/// error only reaches the logs.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load content. Check your network connection.";

/// Navigator configuration
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Base URL page identifiers are resolved against
    pub base_url: String,
    /// Fetch timeout
    pub timeout: Duration,
    /// Maximum number of cached pages
    pub cache_capacity: usize,
    /// Cosmetic delay letting the exit transition play
    pub transition_delay: Duration,
}

impl NavConfig {
    /// Create a new configuration with the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(5000),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            transition_delay: Duration::from_millis(300),
        }
    }

    /// Set the fetch timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the page cache capacity
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the exit-transition delay
    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }
}

/// Drives a single page navigation from request to content swap
///
/// Overlapping `navigate` calls are not serialized: each runs its own
/// pipeline and the last one to finish wins the content area, matching
/// last-write-wins semantics. Cache operations themselves are atomic.
pub struct Navigator<F, P> {
    fetcher: F,
    presenter: P,
    cache: PageCache,
    transition_delay: Duration,
}

impl<P: Presenter> Navigator<HttpFetcher, P> {
    /// Create a navigator fetching over HTTP per the configuration
    pub fn connect(config: NavConfig, presenter: P) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.base_url, config.timeout)?;
        Ok(Self::with_fetcher(fetcher, presenter, config))
    }
}

impl<F: Fetcher, P: Presenter> Navigator<F, P> {
    /// Create a navigator with a custom fetcher
    pub fn with_fetcher(fetcher: F, presenter: P, config: NavConfig) -> Self {
        Self {
            fetcher,
            presenter,
            cache: PageCache::new(config.cache_capacity),
            transition_delay: config.transition_delay,
        }
    }

    /// Navigate to a page
    ///
    /// Resolves the page's content from the cache or the fetcher, swaps it
    /// into the content area and records a page view. On failure the fixed
    /// [`LOAD_FAILED_MESSAGE`] is displayed, the underlying error is logged
    /// and returned, and the prior content stays in place. The busy
    /// indicator is hidden on every exit path.
    pub async fn navigate(&self, page: &str) -> Result<()> {
        self.presenter.show_busy();
        let _busy = BusyGuard(&self.presenter);

        self.presenter.clear_error();
        self.presenter.transition_out();

        // Unconditional, lets the exit transition play
        tokio::time::sleep(self.transition_delay).await;

        match self.resolve(page).await {
            Ok(content) => {
                self.presenter.replace_content(&content);
                self.presenter.transition_in();
                info!(page, "page view");
                Ok(())
            }
            Err(e) => {
                self.presenter.show_error(LOAD_FAILED_MESSAGE);
                error!(page, error = %e, "navigation failed");
                Err(e)
            }
        }
    }

    /// Resolve page content, filling the cache on a miss
    async fn resolve(&self, page: &str) -> Result<String> {
        if let Some(content) = self.cache.get(page) {
            return Ok(content);
        }

        let content = self.fetcher.fetch(page).await?;
        self.cache.insert(page.to_string(), content.clone());
        debug!(page, bytes = content.len(), "fetched and cached");
        Ok(content)
    }

    /// The page cache backing this navigator
    pub fn cache(&self) -> &PageCache {
        &self.cache
    }
}

/// Hides the busy indicator when dropped, success or failure
struct BusyGuard<'a, P: Presenter>(&'a P);

impl<P: Presenter> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        self.0.hide_busy();
    }
}
