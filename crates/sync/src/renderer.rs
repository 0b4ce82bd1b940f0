use passcard_domain::Projection;

/// Rendering collaborator driven by the synchronizer.
///
/// Implementations turn a projection into whatever output surface they own
/// (DOM tree, terminal, test recording). Calls must be cheap and
/// non-blocking; the synchronizer invokes them on its own tasks.
pub trait Renderer: Send + Sync {
    /// Shows the loading indicator. Stays up until the next `render` or
    /// `show_error`.
    fn show_loading(&self);

    /// Replaces the rendered view with a fresh projection.
    fn render(&self, projection: &Projection);

    /// Surfaces a visible error state. The previously rendered projection
    /// remains the best known view; a manual retry is the way out.
    fn show_error(&self, message: &str);
}
