use super::{paint, palette};
use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Follow-up navigation offered inside a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub label: &'static str,
    pub to: Location,
}

/// Transient notification shown after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub action: Option<ToastAction>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into(), action: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into(), action: None }
    }

    pub fn with_action(mut self, label: &'static str, to: Location) -> Self {
        self.action = Some(ToastAction { label, to });
        self
    }

    pub fn render(&self) -> String {
        let icon = match self.kind {
            ToastKind::Success => paint("✔", palette::EMERALD),
            ToastKind::Error => paint("✖", palette::ROSE),
        };
        match &self.action {
            Some(action) => format!("{} {} [{} → {}]", icon, self.message, action.label, action.to),
            None => format!("{} {}", icon, self.message),
        }
    }
}
