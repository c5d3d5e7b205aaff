use super::repository::Credentials;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn from_loading(is_loading: bool) -> Self {
        if is_loading {
            SubmitPhase::Submitting
        } else {
            SubmitPhase::Idle
        }
    }
}

/// Controlled field values of the login form.
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password {
        "text"
    } else {
        "password"
    }
}

pub fn visibility_toggle_label(show_password: bool) -> &'static str {
    if show_password {
        "Hide password"
    } else {
        "Show password"
    }
}

pub fn submit_label(phase: SubmitPhase) -> &'static str {
    match phase {
        SubmitPhase::Idle => "Sign In",
        SubmitPhase::Submitting => "Signing in...",
    }
}
