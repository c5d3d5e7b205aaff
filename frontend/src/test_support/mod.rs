#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

pub mod clock;

#[cfg(test)]
pub mod helpers {
    use super::clock::ManualClock;
    use crate::config::DEFAULT_SUBMIT_DELAY_MS;
    use crate::pages::login::repository::{
        Credentials, LoginAttempt, PendingSubmit, SimulatedLogin, SubmitError, SubmitHandler,
        SubmitOutcome,
    };
    use crate::pages::login::view_model::{FormSubmission, LoginServices};
    use leptos::*;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
        time::Duration,
    };

    /// Submit event stand-in that counts `prevent_default` calls.
    #[derive(Default)]
    pub struct FakeSubmit {
        pub prevented: Cell<u32>,
    }

    impl FormSubmission for FakeSubmit {
        fn prevent_default(&self) {
            self.prevented.set(self.prevented.get() + 1);
        }
    }

    pub type AttemptLog = Rc<RefCell<Vec<LoginAttempt>>>;

    /// Diagnostic sink that records every emission.
    pub fn recording_sink() -> (Callback<LoginAttempt>, AttemptLog) {
        let log: AttemptLog = Rc::default();
        let sink = {
            let log = Rc::clone(&log);
            Callback::new(move |attempt: LoginAttempt| log.borrow_mut().push(attempt))
        };
        (sink, log)
    }

    /// Simulated login on a manual clock, recording diagnostics.
    pub fn simulated_services() -> (LoginServices, ManualClock, AttemptLog) {
        let clock = ManualClock::new();
        let (sink, log) = recording_sink();
        let handler = SimulatedLogin::new(
            Rc::new(clock.clone()),
            Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        );
        (LoginServices::new(Rc::new(handler), sink), clock, log)
    }

    /// Handler that rejects every submission after a delay.
    pub struct RejectingLogin {
        pub clock: ManualClock,
        pub delay: Duration,
    }

    impl SubmitHandler for RejectingLogin {
        fn submit(
            &self,
            _credentials: Credentials,
            on_complete: Box<dyn FnOnce(SubmitOutcome)>,
        ) -> PendingSubmit {
            use crate::utils::timer::Scheduler;
            let task = self.clock.schedule(
                self.delay,
                Box::new(move || on_complete(Err(SubmitError::Rejected))),
            );
            PendingSubmit::scheduled(task)
        }
    }

    /// Handler that succeeds before `submit` returns.
    pub struct ImmediateLogin;

    impl SubmitHandler for ImmediateLogin {
        fn submit(
            &self,
            _credentials: Credentials,
            on_complete: Box<dyn FnOnce(SubmitOutcome)>,
        ) -> PendingSubmit {
            on_complete(Ok(()));
            PendingSubmit::completed()
        }
    }
}
