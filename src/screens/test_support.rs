use super::ports::{Navigator, Route, Session};
use crate::api::{ApiError, AuthApi, Endpoint, ServerFailure};
use crate::forms::{Credentials, Registration, ResetConfirmation, ResetRequest};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|routes| routes.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}

#[derive(Default)]
pub struct RecordingSession {
    profiles: Mutex<Vec<Value>>,
}

impl RecordingSession {
    pub fn profiles(&self) -> Vec<Value> {
        self.profiles.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Session for RecordingSession {
    fn on_authenticated(&self, profile: &Value) {
        if let Ok(mut profiles) = self.profiles.lock() {
            profiles.push(profile.clone());
        }
    }
}

/// Answers every call with a fixed result and records which endpoints were hit.
pub struct FakeApi {
    result: Result<Value, ApiError>,
    calls: Mutex<Vec<Endpoint>>,
    emails: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl FakeApi {
    pub fn ok(value: Value) -> Self {
        Self {
            result: Ok(value),
            calls: Mutex::new(Vec::new()),
            emails: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn err(err: ApiError) -> Self {
        Self {
            result: Err(err),
            ..Self::ok(Value::Null)
        }
    }

    /// Holds every call until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().map(|emails| emails.clone()).unwrap_or_default()
    }

    async fn answer(&self, endpoint: Endpoint, email: Option<&str>) -> Result<Value, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(endpoint);
        }
        if let (Some(email), Ok(mut emails)) = (email, self.emails.lock()) {
            emails.push(email.to_string());
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.clone()
    }
}

impl AuthApi for FakeApi {
    async fn register(&self, payload: Registration) -> Result<Value, ApiError> {
        self.answer(Endpoint::Register, Some(&payload.email)).await
    }

    async fn login(&self, credentials: Credentials) -> Result<Value, ApiError> {
        self.answer(Endpoint::Login, Some(&credentials.email)).await
    }

    async fn request_password_reset(&self, request: ResetRequest) -> Result<Value, ApiError> {
        self.answer(Endpoint::ForgotPassword, Some(&request.email))
            .await
    }

    async fn confirm_password_reset(
        &self,
        _confirmation: ResetConfirmation,
    ) -> Result<Value, ApiError> {
        self.answer(Endpoint::ResetPassword, None).await
    }
}

pub fn failure(status: u16, message: &str) -> ServerFailure {
    ServerFailure {
        status,
        message: message.to_string(),
        code: None,
    }
}
