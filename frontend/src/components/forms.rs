use leptos::*;

#[component]
pub fn Label(#[prop(into)] for_id: String, children: Children) -> impl IntoView {
    view! {
        <label for=for_id class="block text-white/90 font-medium text-sm">
            {children()}
        </label>
    }
}

/// Controlled text input: renders `value` and reports every edit.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] input_type: MaybeSignal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] autocomplete: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <input
            id=id.clone()
            name=id
            type=move || input_type.get()
            placeholder=placeholder
            autocomplete=autocomplete
            required=required
            class=format!(
                "w-full rounded-md py-2 bg-white/10 border border-white/20 text-white placeholder:text-white/50 focus:border-white/40 transition-all duration-300 hover:bg-white/15 {}",
                class
            )
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Checkbox(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 cursor-pointer">
            <input
                type="checkbox"
                class="rounded border-white/20 bg-white/10 text-purple-500 focus:ring-purple-500 focus:ring-offset-0"
            />
            <span class="text-sm text-white/80">{label}</span>
        </label>
    }
}
