use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h3 class="title">"Page not found"</h3>
            <A href="/">"Back to start"</A>
        </div>
    }
}
