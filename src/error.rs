use thiserror::Error;

/// Failures that keep the backdrop from starting.
///
/// Both kinds are terminal for the renderer instance: no frame loop is
/// scheduled and the page falls back to its static CSS background. Nothing
/// fails after initialization succeeds.
#[derive(Debug, Error)]
pub enum InitError {
    /// The canvas cannot provide a WebGL2 context.
    #[error("WebGL2 context unavailable")]
    ContextUnavailable,

    /// Shader compilation or program linking failed; `log` carries the
    /// driver's info log.
    #[error("pipeline build failed ({stage}): {log}")]
    PipelineBuild { stage: &'static str, log: String },
}
