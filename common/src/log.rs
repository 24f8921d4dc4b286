/// Logs a completed step. Rendered with the success marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "lifeline::success", $($arg)*)
    };
}

/// Logs a hint for the user, rendered with the debug marker.
#[macro_export]
macro_rules! hint {
    ($($arg:tt)*) => {
        tracing::info!(target: "lifeline::hint", $($arg)*)
    };
}
