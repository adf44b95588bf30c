//! Capabilities supplied by the hosting application. Screens never own routing
//! or session storage; they only call these ports.

use serde_json::Value;
use std::fmt;

/// Routes the authentication screens can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::ForgotPassword => "/forgot-password",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

pub trait Session: Send + Sync {
    /// Called once with the opaque login response.
    fn on_authenticated(&self, profile: &Value);
}
