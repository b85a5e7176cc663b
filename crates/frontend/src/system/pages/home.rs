use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h3 class="title">"Pantry"</h3>
            <p>"Keep track of what you store and when it expires."</p>
            <A href="/addproduct">"Add a product"</A>
        </div>
    }
}
