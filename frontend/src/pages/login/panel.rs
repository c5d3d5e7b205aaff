use super::{
    components::{
        background::AnimatedBackground,
        form::LoginForm,
        social::{ProviderDivider, SignUpPrompt, SocialButtons},
    },
    view_model::{use_login_view_model, LoginViewModel},
};
use crate::components::cards::{Card, CardContent, CardHeader};
use leptos::*;

/// View model tied to the current owner: unmounting cancels a pending submit.
fn use_mounted_login_view_model() -> LoginViewModel {
    let vm = use_login_view_model();
    on_cleanup(move || vm.teardown());
    vm
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_mounted_login_view_model();

    view! {
        <div class="min-h-screen relative overflow-hidden bg-gradient-to-br from-purple-600 via-blue-600 to-pink-600">
            <AnimatedBackground />
            <div class="relative z-10 min-h-screen flex items-center justify-center p-4">
                <Card class="w-full max-w-md bg-white/10 backdrop-blur-lg border-white/20 shadow-2xl animate-fade-in">
                    <CardHeader title="Welcome Back" description="Sign in to your account to continue">
                        <div class="p-3 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 shadow-lg">
                            <svg class="h-8 w-8 text-white" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                                <path d="M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4"></path>
                                <path d="m10 17 5-5-5-5"></path>
                                <path d="M15 12H3"></path>
                            </svg>
                        </div>
                    </CardHeader>
                    <CardContent>
                        <LoginForm vm=vm />
                        <ProviderDivider />
                        <SocialButtons />
                        <SignUpPrompt />
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
