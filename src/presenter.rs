//! UI boundary
//!
//! The navigator never touches a DOM; everything user-visible goes through
//! this trait. Methods take `&self` since real presenters hold internally
//! mutable UI handles.

/// UI collaborator driven by the navigator
pub trait Presenter: Send + Sync {
    /// Show the busy indicator
    fn show_busy(&self);

    /// Hide the busy indicator
    fn hide_busy(&self);

    /// Display a user-facing error message
    fn show_error(&self, message: &str);

    /// Clear any displayed error
    fn clear_error(&self);

    /// Begin the content area's exit transition
    fn transition_out(&self);

    /// Replace the displayed content
    fn replace_content(&self, content: &str);

    /// Begin the content area's enter transition
    fn transition_in(&self);
}
