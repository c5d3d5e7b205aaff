use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border shadow-sm {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col p-6 space-y-1 text-center">
            {children.map(|icon| view! { <div class="flex justify-center mb-4">{icon()}</div> })}
            <h3 class="text-3xl font-bold text-white">{title}</h3>
            <p class="text-white/80 text-lg">{description}</p>
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-6 pt-0 space-y-6">{children()}</div> }
}
