//! User-facing notification sink and the error reporter that feeds it.
//! The reporter decides how a failed API call is presented (one toast, or one
//! per validation message) and hands the text to whatever `Notifier` the
//! embedder installed. It never swallows the failure; callers keep the
//! original error for their own cleanup.

use parking_lot::Mutex;

use crate::error::{format_field_name, http_error_message, HttpFailure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Success,
    Info,
}

/// Where user-visible messages go. Implementations are expected to be cheap
/// and non-blocking; durations are hints in milliseconds.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str, title: &str, duration_ms: u32);

    fn error(&self, message: &str, title: &str, duration_ms: u32) {
        self.notify(Severity::Error, message, title, duration_ms);
    }
    fn warning(&self, message: &str, title: &str, duration_ms: u32) {
        self.notify(Severity::Warning, message, title, duration_ms);
    }
    fn success(&self, message: &str, title: &str, duration_ms: u32) {
        self.notify(Severity::Success, message, title, duration_ms);
    }
    fn info(&self, message: &str, title: &str, duration_ms: u32) {
        self.notify(Severity::Info, message, title, duration_ms);
    }
}

/// Default sink: routes everything through `tracing` under the `notify`
/// target. Headless embedders (and the CLI) get log lines instead of toasts.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str, title: &str, _duration_ms: u32) {
        match severity {
            Severity::Error => tracing::error!(target: "notify", "{}: {}", title, message),
            Severity::Warning => tracing::warn!(target: "notify", "{}: {}", title, message),
            Severity::Success | Severity::Info => {
                tracing::info!(target: "notify", "{}: {}", title, message)
            }
        }
    }
}

/// A notification captured by `CollectingNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub title: String,
    pub duration_ms: u32,
}

/// Records notifications instead of displaying them. Used by tests and by
/// embedders that render toasts themselves.
#[derive(Default)]
pub struct CollectingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self { Self::default() }

    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock())
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, severity: Severity, message: &str, title: &str, duration_ms: u32) {
        self.notifications.lock().push(Notification {
            severity,
            message: message.to_string(),
            title: title.to_string(),
            duration_ms,
        });
    }
}

/// Presents API failures to the user. Server-side errors get a longer toast,
/// validation failures become one toast per field message, everything else a
/// single error toast.
pub struct ErrorReporter<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> ErrorReporter<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Surface `failure` to the user. The caller still owns the failure and
    /// reacts to it after reporting (stopping spinners, re-enabling forms).
    pub fn handle_error(&self, failure: &HttpFailure, default_message: &str) {
        tracing::debug!("reporting api failure: {}", failure);
        let status = failure.status();
        if status >= 500 {
            let message = http_error_message(failure, default_message);
            self.notifier.error(&message, "Server Error", 7000);
        } else if status == 400 {
            self.report_validation(failure);
        } else {
            let message = http_error_message(failure, default_message);
            self.notifier.error(&message, "Error", 5000);
        }
    }

    fn report_validation(&self, failure: &HttpFailure) {
        let body = failure.body();
        if let Some(errors) = body.and_then(|b| b.errors.as_ref()).filter(|e| !e.is_empty()) {
            for (field, messages) in errors {
                for message in messages {
                    let line = format!("{}: {}", format_field_name(field), message);
                    self.notifier.error(&line, "Validation Error", 6000);
                }
            }
        } else if let Some(message) = body.and_then(|b| b.message.as_deref()) {
            self.notifier.error(message, "Validation Error", 5000);
        } else {
            self.notifier.error("Please check your input data", "Validation Error", 5000);
        }
    }

    pub fn show_success(&self, message: &str) {
        self.notifier.success(message, "Success", 3000);
    }

    pub fn show_warning(&self, message: &str) {
        self.notifier.warning(message, "Warning", 4000);
    }

    pub fn show_info(&self, message: &str) {
        self.notifier.info(message, "Info", 3000);
    }
}
