//! Common test utilities

use mockito::{Server, ServerGuard};
use pagenav::{HttpFetcher, NavConfig, Navigator, Presenter};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Everything the navigator asked the UI to do, in order
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // Variants matched by individual test modules
pub enum UiEvent {
    ShowBusy,
    HideBusy,
    ShowError(String),
    ClearError,
    TransitionOut,
    ReplaceContent(String),
    TransitionIn,
}

/// Presenter that records every call for later assertions
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

#[allow(dead_code)] // Used by other test modules
impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().clone()
    }

    /// Content of the last `replace_content` call, if any
    pub fn displayed_content(&self) -> Option<String> {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                UiEvent::ReplaceContent(c) => Some(c.clone()),
                _ => None,
            })
    }

    /// Message of the last `show_error` call, if any
    pub fn shown_error(&self) -> Option<String> {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                UiEvent::ShowError(m) => Some(m.clone()),
                _ => None,
            })
    }

    /// True iff the last busy-indicator event hid it
    pub fn busy_ended_hidden(&self) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|e| match e {
                UiEvent::ShowBusy => Some(false),
                UiEvent::HideBusy => Some(true),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Presenter for RecordingPresenter {
    fn show_busy(&self) {
        self.events.lock().push(UiEvent::ShowBusy);
    }

    fn hide_busy(&self) {
        self.events.lock().push(UiEvent::HideBusy);
    }

    fn show_error(&self, message: &str) {
        self.events.lock().push(UiEvent::ShowError(message.to_string()));
    }

    fn clear_error(&self) {
        self.events.lock().push(UiEvent::ClearError);
    }

    fn transition_out(&self) {
        self.events.lock().push(UiEvent::TransitionOut);
    }

    fn replace_content(&self, content: &str) {
        self.events.lock().push(UiEvent::ReplaceContent(content.to_string()));
    }

    fn transition_in(&self) {
        self.events.lock().push(UiEvent::TransitionIn);
    }
}

#[allow(dead_code)] // Used by other test modules
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Mock server plus a navigator pointing at it
///
/// Transition delay is shortened so tests stay fast.
#[allow(dead_code)] // Used by other test modules
pub async fn setup_navigator()
-> (Navigator<HttpFetcher, RecordingPresenter>, ServerGuard, RecordingPresenter) {
    setup_navigator_with_capacity(10).await
}

#[allow(dead_code)] // Used by other test modules
pub async fn setup_navigator_with_capacity(
    capacity: usize,
) -> (Navigator<HttpFetcher, RecordingPresenter>, ServerGuard, RecordingPresenter) {
    init_tracing();

    let server = Server::new_async().await;
    let presenter = RecordingPresenter::new();

    let config = NavConfig::new(server.url())
        .with_timeout(Duration::from_secs(5))
        .with_cache_capacity(capacity)
        .with_transition_delay(Duration::from_millis(10));

    let navigator = Navigator::connect(config, presenter.clone()).unwrap();
    (navigator, server, presenter)
}
