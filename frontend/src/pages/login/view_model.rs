use super::{
    repository::{LoginAttempt, PendingSubmit, SimulatedLogin, SubmitHandler, SubmitOutcome},
    utils::{LoginFormState, SubmitPhase},
};
use crate::{config, utils::timer::BrowserScheduler};
use leptos::*;
use std::rc::Rc;

/// Anything that carries a default action the form must suppress.
pub trait FormSubmission {
    fn prevent_default(&self);
}

impl FormSubmission for ev::SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Collaborators injected into the login view model.
#[derive(Clone)]
pub struct LoginServices {
    pub handler: Rc<dyn SubmitHandler>,
    pub on_attempt: Callback<LoginAttempt>,
}

impl LoginServices {
    pub fn new(handler: Rc<dyn SubmitHandler>, on_attempt: Callback<LoginAttempt>) -> Self {
        Self {
            handler,
            on_attempt,
        }
    }

    /// Simulated login on browser timers, logging each attempt.
    pub fn from_config() -> Self {
        let handler = SimulatedLogin::new(Rc::new(BrowserScheduler::new()), config::submit_delay());
        Self::new(Rc::new(handler), Callback::new(log_attempt))
    }
}

fn log_attempt(attempt: LoginAttempt) {
    log::info!("Login attempt: {:?}", attempt);
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub is_loading: RwSignal<bool>,
    handler: StoredValue<Rc<dyn SubmitHandler>>,
    pending: StoredValue<Option<PendingSubmit>>,
    on_attempt: Callback<LoginAttempt>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let services = use_context::<LoginServices>().unwrap_or_else(LoginServices::from_config);
    LoginViewModel::new(services)
}

impl LoginViewModel {
    pub fn new(services: LoginServices) -> Self {
        Self {
            form: LoginFormState::default(),
            is_loading: create_rw_signal(false),
            handler: store_value(services.handler),
            pending: store_value(None),
            on_attempt: services.on_attempt,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        SubmitPhase::from_loading(self.is_loading.get())
    }

    pub fn on_email_change(&self, value: String) {
        self.form.email.set(value);
    }

    pub fn on_password_change(&self, value: String) {
        self.form.password.set(value);
    }

    pub fn on_toggle_visibility(&self) {
        self.form.show_password.update(|show| *show = !*show);
    }

    pub fn on_submit(&self, ev: &impl FormSubmission) {
        ev.prevent_default();
        if self.is_loading.get_untracked() {
            log::debug!("Ignoring submit while a login is in flight");
            return;
        }
        let credentials = self.form.credentials();
        let attempt = LoginAttempt::from(credentials.clone());
        self.is_loading.set(true);

        let vm = *self;
        let pending = self.handler.with_value(|handler| {
            handler.submit(
                credentials,
                Box::new(move |outcome| vm.complete(attempt, outcome)),
            )
        });
        // The previous handle belongs to a completed submission.
        self.pending.set_value(Some(pending));
    }

    fn complete(&self, attempt: LoginAttempt, outcome: SubmitOutcome) {
        self.is_loading.set(false);
        match outcome {
            Ok(()) => self.on_attempt.call(attempt),
            Err(err) => log::warn!("Login attempt for {} failed: {}", attempt.email, err),
        }
    }

    /// Cancels an in-flight submission when the view goes away.
    pub fn teardown(&self) {
        let Some(pending) = self.pending.try_update_value(Option::take).flatten() else {
            return;
        };
        if self.is_loading.try_get_untracked().unwrap_or(false) {
            log::warn!("Login form unmounted while submitting; discarding the pending attempt");
        }
        pending.cancel();
    }
}
