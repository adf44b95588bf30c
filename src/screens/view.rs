//! What a screen renders after each interaction.

use super::ports::Route;
use crate::forms::{FieldErrors, SubmissionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            message: message.into(),
        }
    }
}

/// A button the user may press to navigate; nothing happens until they do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenView {
    pub title: &'static str,
    pub state: SubmissionState,
    pub field_errors: FieldErrors,
    pub banner: Option<Banner>,
    pub action: Option<CallToAction>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

impl ScreenView {
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.banner
            .as_ref()
            .filter(|banner| banner.kind == BannerKind::Error)
            .map(|banner| banner.message.as_str())
    }
}
