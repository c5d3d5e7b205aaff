use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "w-full bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600 text-white font-semibold py-3 px-4 rounded-lg transition-all duration-300 transform hover:scale-105 shadow-lg hover:shadow-xl disabled:transform-none",
            ButtonVariant::Outline => "bg-white/10 border border-white/20 text-white hover:bg-white/20 py-2 px-4 rounded-md transition-all duration-300",
        }
    }
}

/// Opaque button primitive. `kind` maps to the HTML `type` attribute.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=kind
            class=format!(
                "inline-flex items-center justify-center text-sm disabled:opacity-50 disabled:cursor-not-allowed {}",
                variant.classes()
            )
            disabled=move || loading.get()
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-white/30 border-t-white"></span>
            </Show>
            {children()}
        </button>
    }
}
