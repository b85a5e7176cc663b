use crate::domain::a002_product::ui::add::AddProductPage;
use crate::layout::Shell;
use crate::system::pages::{HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/addproduct") view=AddProductPage />
                </Routes>
            </Shell>
        </Router>
    }
}
