use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Toaster {
    duration: Duration,
    current: Option<Toast>,
    shown: usize,
}

impl Toaster {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            shown: 0,
        }
    }

    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            expires_at: Instant::now() + self.duration,
        });
        self.shown = self.shown.saturating_add(1);
    }

    /// Clears the slot once the toast has expired.
    pub fn current(&mut self) -> Option<&Toast> {
        let now = Instant::now();
        if self.current.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn visible(&self) -> Option<&Toast> {
        let now = Instant::now();
        self.current.as_ref().filter(|toast| toast.expires_at > now)
    }

    pub fn shown_count(&self) -> usize {
        self.shown
    }
}
