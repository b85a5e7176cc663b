use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Pantry"</span>
                <nav class="header__nav">
                    <A href="/">"Home"</A>
                    <A href="/addproduct">"Add product"</A>
                </nav>
            </div>
        </header>
    }
}
