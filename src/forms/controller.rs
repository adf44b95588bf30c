//! Form controller: field values, derived errors and the submission state machine.
//!
//! ```text
//! Idle --submit, invalid--> Idle (errors attached, no request)
//! Idle --submit, valid--> Submitting --resolved--> Succeeded --reset--> Idle
//!                                    --rejected--> Failed --submit--> Submitting
//! ```
//!
//! The controller is shared by clones. Only one submission may be in flight; a
//! second submit while `Submitting` is refused without calling the API. After
//! `unmount`, late results are discarded instead of being applied. A submit
//! future dropped before it resolves returns the form to `Idle`.

use super::validator::{FieldErrors, Schema};
use crate::api::ApiError;
use std::{
    fmt,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    /// Holds the message rendered to the user.
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Validating => f.write_str("validating"),
            Self::Submitting => f.write_str("submitting"),
            Self::Succeeded => f.write_str("succeeded"),
            Self::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Result of one call to [`FormController::submit`].
#[derive(Debug)]
pub enum SubmitOutcome<T> {
    /// Validation failed; no request was sent.
    Invalid(FieldErrors),
    /// Another submission is in flight; no request was sent.
    Busy,
    Succeeded(T),
    Failed(ApiError),
    /// The form was unmounted; the result was dropped without touching state.
    Discarded,
}

struct Inner<I> {
    initial: I,
    values: I,
    errors: FieldErrors,
    state: SubmissionState,
    mounted: bool,
}

/// Puts a still-mounted form back to `Idle` if the submit future is dropped
/// while the request is in flight.
struct InFlight<'a, I> {
    inner: &'a Mutex<Inner<I>>,
    armed: bool,
}

impl<I> InFlight<'_, I> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<I> Drop for InFlight<'_, I> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.mounted && inner.state == SubmissionState::Submitting {
            debug!("submission cancelled before completion");
            inner.state = SubmissionState::Idle;
        }
    }
}

pub struct FormController<S: Schema> {
    inner: Arc<Mutex<Inner<S::Input>>>,
}

impl<S: Schema> Clone for FormController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Schema> Default for FormController<S> {
    fn default() -> Self {
        Self::new(S::Input::default())
    }
}

impl<S: Schema> FormController<S> {
    #[must_use]
    pub fn new(values: S::Input) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                initial: values.clone(),
                values,
                errors: FieldErrors::new(),
                state: SubmissionState::Idle,
                mounted: true,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S::Input>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn values(&self) -> S::Input {
        self.lock().values.clone()
    }

    pub fn set_values(&self, values: S::Input) {
        self.lock().values = values;
    }

    /// Edits values in place, e.g. a single field on input.
    pub fn update(&self, edit: impl FnOnce(&mut S::Input)) {
        edit(&mut self.lock().values);
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// The submit affordance is disabled while a submission is pending.
    #[must_use]
    pub fn is_submit_enabled(&self) -> bool {
        let inner = self.lock();
        inner.mounted && !inner.state.is_pending()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    /// Runs the validator on the current values without submitting.
    ///
    /// # Errors
    /// Returns the field errors when validation fails.
    pub fn validate(&self) -> Result<S::Payload, FieldErrors> {
        S::validate(&self.lock().values)
    }

    /// Returns to `Idle` with the initial values and no errors.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.values = inner.initial.clone();
        inner.errors = FieldErrors::new();
        inner.state = SubmissionState::Idle;
    }

    /// Detaches the form. Any response arriving afterwards is discarded.
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.mounted = false;
        debug!(state = %inner.state, "form unmounted");
    }

    /// Validates the current values and, when valid, hands the payload to `call`.
    ///
    /// `call` runs at most once per successful validation and never while another
    /// submission of this form is in flight.
    pub async fn submit<T, F, Fut>(&self, call: F) -> SubmitOutcome<T>
    where
        F: FnOnce(S::Payload) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let payload = {
            let mut inner = self.lock();
            if !inner.mounted {
                return SubmitOutcome::Discarded;
            }
            if inner.state.is_pending() {
                debug!("submission already in flight");
                return SubmitOutcome::Busy;
            }

            inner.state = SubmissionState::Validating;
            match S::validate(&inner.values) {
                Ok(payload) => {
                    inner.errors = FieldErrors::new();
                    inner.state = SubmissionState::Submitting;
                    payload
                }
                Err(errors) => {
                    debug!(fields = errors.len(), "validation failed");
                    inner.errors = errors.clone();
                    inner.state = SubmissionState::Idle;
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        let in_flight = InFlight {
            inner: &*self.inner,
            armed: true,
        };
        let result = call(payload).await;
        in_flight.disarm();

        let mut inner = self.lock();
        if !inner.mounted {
            debug!("discarding response for unmounted form");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(value) => {
                inner.state = SubmissionState::Succeeded;
                SubmitOutcome::Succeeded(value)
            }
            Err(err) => {
                warn!(error = %err, "submission failed");
                inner.state = SubmissionState::Failed(err.user_message().to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }
}
