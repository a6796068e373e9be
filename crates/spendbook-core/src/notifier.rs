/// User-facing channel for failures the persistence layer recovers from.
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Routes notifications into the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
