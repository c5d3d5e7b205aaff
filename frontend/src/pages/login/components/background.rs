use leptos::*;

/// Blurred floating blobs behind the card.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="absolute inset-0" aria-hidden="true">
            <div class="absolute top-20 left-20 w-72 h-72 bg-purple-400 rounded-full mix-blend-multiply filter blur-xl opacity-30 animate-float"></div>
            <div class="absolute top-40 right-20 w-72 h-72 bg-pink-400 rounded-full mix-blend-multiply filter blur-xl opacity-30 animate-float-delayed"></div>
            <div class="absolute -bottom-8 left-40 w-72 h-72 bg-blue-400 rounded-full mix-blend-multiply filter blur-xl opacity-30 animate-float"></div>
        </div>
    }
}
