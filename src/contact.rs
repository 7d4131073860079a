//! Contact form submission flow.
//!
//! DESIGN
//! ======
//! Submission is split into a synchronous `begin` (lock the button, show the
//! loading indicator), an awaited [`ContactTransport::send`], and a
//! synchronous `finish` that reports the outcome and always restores the
//! button. The shipped transport only simulates latency; the failure branch
//! is reachable through any transport that returns an error.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::future::Future;

use serde::Serialize;

use crate::action::{Action, Target};
use crate::consts::{SUBMIT_FAILURE_NOTICE, SUBMIT_SUCCESS_NOTICE};
use crate::error::PageError;

/// Names of the form fields read on submit.
pub const FIELD_NAMES: [&str; 4] = ["name", "email", "subject", "message"];

/// Flat record of the four contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Read the fields through `lookup`; missing fields become empty strings.
    pub fn from_fields(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let [name, email, subject, message] = FIELD_NAMES.map(|field| lookup(field).unwrap_or_default());
        Self { name, email, subject, message }
    }
}

/// Delivers a contact message somewhere.
pub trait ContactTransport {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), PageError>>;
}

/// Stand-in transport: waits a fixed latency, then succeeds without sending.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
}

#[cfg(feature = "hydrate")]
impl ContactTransport for SimulatedTransport {
    async fn send(&self, message: &ContactMessage) -> Result<(), PageError> {
        let payload = serde_json::to_string(message).map_err(|err| PageError::Submit(err.to_string()))?;
        log::info!("simulating contact submission ({} ms): {payload}", self.delay_ms);
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Submit button state; at most one submission in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactForm {
    in_flight: bool,
}

impl ContactForm {
    #[must_use]
    pub fn in_flight(self) -> bool {
        self.in_flight
    }

    /// Start a submission. Returns `None` if one is already running.
    pub fn begin(&mut self) -> Option<Vec<Action>> {
        if self.in_flight {
            log::debug!("contact submission already in flight; ignoring");
            return None;
        }
        self.in_flight = true;
        Some(busy(true))
    }

    /// Report the outcome, then restore the button regardless of it.
    pub fn finish(&mut self, outcome: &Result<(), PageError>) -> Vec<Action> {
        self.in_flight = false;
        let mut actions = match outcome {
            Ok(()) => {
                log::info!("contact submission delivered");
                vec![Action::Notify(SUBMIT_SUCCESS_NOTICE.to_owned()), Action::ResetForm]
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                vec![Action::Notify(SUBMIT_FAILURE_NOTICE.to_owned())]
            }
        };
        actions.extend(busy(false));
        actions
    }
}

fn busy(on: bool) -> Vec<Action> {
    vec![
        Action::SetDisabled { target: Target::SubmitButton, disabled: on },
        Action::style(Target::SubmitLabel, "display", if on { "none" } else { "flex" }),
        Action::style(Target::SubmitLoading, "display", if on { "flex" } else { "none" }),
    ]
}
