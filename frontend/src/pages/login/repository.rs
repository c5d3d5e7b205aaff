use crate::utils::timer::{ScheduledTask, Scheduler};
use std::{fmt, rc::Rc, time::Duration};
use thiserror::Error;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Diagnostic emission produced when a submission completes.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl From<Credentials> for LoginAttempt {
    fn from(credentials: Credentials) -> Self {
        Self {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("credentials were rejected")]
    Rejected,
    #[error("login request failed: {0}")]
    Transport(String),
}

pub type SubmitOutcome = Result<(), SubmitError>;

/// Outstanding submission. Dropping or cancelling it discards the completion.
pub struct PendingSubmit {
    task: Option<ScheduledTask>,
}

impl PendingSubmit {
    pub fn scheduled(task: ScheduledTask) -> Self {
        Self { task: Some(task) }
    }

    /// For handlers that complete synchronously.
    pub fn completed() -> Self {
        Self { task: None }
    }

    pub fn cancel(self) {
        if let Some(task) = self.task {
            task.cancel();
        }
    }
}

/// Capability that performs the login behind the form.
pub trait SubmitHandler {
    fn submit(
        &self,
        credentials: Credentials,
        on_complete: Box<dyn FnOnce(SubmitOutcome)>,
    ) -> PendingSubmit;
}

/// Stand-in for a real login: always succeeds after a fixed delay.
pub struct SimulatedLogin {
    scheduler: Rc<dyn Scheduler>,
    delay: Duration,
}

impl SimulatedLogin {
    pub fn new(scheduler: Rc<dyn Scheduler>, delay: Duration) -> Self {
        Self { scheduler, delay }
    }
}

impl SubmitHandler for SimulatedLogin {
    fn submit(
        &self,
        credentials: Credentials,
        on_complete: Box<dyn FnOnce(SubmitOutcome)>,
    ) -> PendingSubmit {
        log::debug!("Simulating login for {:?} ({:?})", credentials, self.delay);
        let task = self
            .scheduler
            .schedule(self.delay, Box::new(move || on_complete(Ok(()))));
        PendingSubmit::scheduled(task)
    }
}
