use crate::LocalStateError;

/// Receives failures the binding absorbs instead of returning.
pub trait DiagnosticSink {
    fn report(&self, message: &str, error: &LocalStateError);
}

/// Routes diagnostics to the `log` facade at error level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, message: &str, error: &LocalStateError) {
        log::error!("{}: {}", message, error);
    }
}
