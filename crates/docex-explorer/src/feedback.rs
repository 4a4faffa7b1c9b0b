//! User feedback events (the toast analogue).
//!
//! The controller emits toasts on an unbounded channel; whichever view is
//! attached drains and displays them. Losing the receiver must never fail
//! an operation, so sends ignore a closed channel.

use tokio::sync::mpsc;

/// Severity of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Operation completed.
    Success,
    /// Operation failed; the user may retry.
    Error,
}

/// One feedback message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Severity.
    pub level: ToastLevel,
    /// Localized message text.
    pub message: String,
}

/// Sending half handed to the controller.
#[derive(Debug, Clone)]
pub struct ToastSender {
    tx: mpsc::UnboundedSender<Toast>,
}

impl ToastSender {
    /// Create a feedback channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Toast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Emit a success toast.
    pub fn success(&self, message: impl Into<String>) {
        let _ = self.tx.send(Toast {
            level: ToastLevel::Success,
            message: message.into(),
        });
    }

    /// Emit an error toast.
    pub fn error(&self, message: impl Into<String>) {
        let _ = self.tx.send(Toast {
            level: ToastLevel::Error,
            message: message.into(),
        });
    }
}
