use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{Checkbox, Label, TextInput},
    },
    pages::login::{
        utils::{self, SubmitPhase},
        view_model::LoginViewModel,
    },
};
use leptos::*;

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let is_loading = vm.is_loading;
    let show_password = form.show_password;

    let password_type = Signal::derive(move || {
        utils::password_input_type(show_password.get()).to_string()
    });
    let toggle_label = move || utils::visibility_toggle_label(show_password.get());
    let phase = move || SubmitPhase::from_loading(is_loading.get());

    view! {
        <form class="space-y-4" on:submit=move |ev| vm.on_submit(&ev)>
            <div class="space-y-2">
                <Label for_id="email">"Email"</Label>
                <div class="relative">
                    <MailIcon />
                    <TextInput
                        id="email"
                        input_type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        value=form.email
                        on_input=Callback::new(move |value: String| vm.on_email_change(value))
                        required=true
                        class="pl-10"
                    />
                </div>
            </div>

            <div class="space-y-2">
                <Label for_id="password">"Password"</Label>
                <div class="relative">
                    <LockIcon />
                    <TextInput
                        id="password"
                        input_type=password_type
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        value=form.password
                        on_input=Callback::new(move |value: String| vm.on_password_change(value))
                        required=true
                        class="pl-10 pr-10"
                    />
                    <button
                        type="button"
                        aria-label=toggle_label
                        title=toggle_label
                        class="absolute right-3 top-3 text-white/60 hover:text-white/80 transition-colors"
                        on:click=move |_| vm.on_toggle_visibility()
                    >
                        <EyeIcon crossed=show_password.into() />
                    </button>
                </div>
            </div>

            <div class="flex items-center justify-between">
                <Checkbox label="Remember me" />
                <button
                    type="button"
                    class="text-sm text-white/80 hover:text-white transition-colors underline-offset-4 hover:underline"
                >
                    "Forgot password?"
                </button>
            </div>

            <Button kind="submit" variant=ButtonVariant::Primary loading=Signal::from(is_loading)>
                {move || utils::submit_label(phase())}
            </Button>
        </form>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    view! {
        <svg class="absolute left-3 top-3 h-5 w-5 text-white/60" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <rect x="2" y="4" width="20" height="16" rx="2"></rect>
            <path d="m22 7-10 5L2 7"></path>
        </svg>
    }
}

#[component]
fn LockIcon() -> impl IntoView {
    view! {
        <svg class="absolute left-3 top-3 h-5 w-5 text-white/60" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <rect x="3" y="11" width="18" height="11" rx="2"></rect>
            <path d="M7 11V7a5 5 0 0 1 10 0v4"></path>
        </svg>
    }
}

#[component]
fn EyeIcon(crossed: Signal<bool>) -> impl IntoView {
    view! {
        <svg class="h-5 w-5" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"></path>
            <circle cx="12" cy="12" r="3"></circle>
            <Show when=move || crossed.get()>
                <path d="m2 2 20 20"></path>
            </Show>
        </svg>
    }
}
