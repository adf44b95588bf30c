#![allow(dead_code)]

use anyhow::Result;
use auth_screens::{
    api::{ApiConfig, HttpAuthApi},
    screens::{Navigator, Route, Session},
};
use serde_json::Value;
use std::{
    net::TcpListener,
    sync::{Arc, Mutex},
};
use wiremock::MockServer;

pub fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

pub fn api(server: &MockServer) -> Result<Arc<HttpAuthApi>> {
    let config = ApiConfig::new(&server.uri())?;
    Ok(Arc::new(HttpAuthApi::new(config)?))
}

#[derive(Default)]
pub struct Routes(Mutex<Vec<Route>>);

impl Routes {
    pub fn visited(&self) -> Vec<Route> {
        self.0.lock().map(|routes| routes.clone()).unwrap_or_default()
    }
}

impl Navigator for Routes {
    fn go_to(&self, route: Route) {
        if let Ok(mut routes) = self.0.lock() {
            routes.push(route);
        }
    }
}

#[derive(Default)]
pub struct Profiles(Mutex<Vec<Value>>);

impl Profiles {
    pub fn received(&self) -> Vec<Value> {
        self.0.lock().map(|profiles| profiles.clone()).unwrap_or_default()
    }
}

impl Session for Profiles {
    fn on_authenticated(&self, profile: &Value) {
        if let Ok(mut profiles) = self.0.lock() {
            profiles.push(profile.clone());
        }
    }
}
