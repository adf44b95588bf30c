//! Terminal implementations of the screen ports, plus rendering of a
//! [`ScreenView`] as process output.

use crate::{
    api::HttpAuthApi,
    cli::globals::GlobalArgs,
    screens::{BannerKind, Navigator, Route, ScreenView, Session},
};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Prints each navigation on stdout.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_to(&self, route: Route) {
        info!(route = %route, "navigate");
        println!("-> {route}");
    }
}

/// Prints the login response as JSON on stdout.
#[derive(Debug, Default)]
pub struct TerminalSession;

impl Session for TerminalSession {
    fn on_authenticated(&self, profile: &Value) {
        match serde_json::to_string_pretty(profile) {
            Ok(json) => println!("{json}"),
            Err(err) => warn!("failed to render login response: {err}"),
        }
    }
}

/// # Errors
/// Returns an error if the API configuration is invalid.
pub fn connect(globals: &GlobalArgs) -> Result<Arc<HttpAuthApi>> {
    let config = globals
        .api_config()
        .context("invalid API configuration")?;
    Ok(Arc::new(HttpAuthApi::new(config)?))
}

/// Writes banners and actions; field errors and failures become the process error.
///
/// # Errors
/// Returns an error if the view carries field errors or an error banner.
pub fn report(view: &ScreenView) -> Result<()> {
    if !view.field_errors.is_empty() {
        return Err(anyhow!("{}: {}", view.title, view.field_errors));
    }

    if let Some(action) = view.action {
        eprintln!("{}: {}", action.label, action.route);
    }

    match &view.banner {
        Some(banner) if banner.kind == BannerKind::Error => Err(anyhow!(banner.message.clone())),
        Some(banner) => {
            println!("{}", banner.message);
            Ok(())
        }
        None => Ok(()),
    }
}
