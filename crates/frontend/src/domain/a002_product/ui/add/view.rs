use super::view_model::AddProductVm;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::config::AppConfig;
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_product::ProductField;
use leptos::prelude::*;

#[component]
pub fn AddProductPage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let notifications = use_notifications();

    let vm = AddProductVm::new(config.endpoints(), notifications.emitter());
    vm.load_categories();

    let on_field = move |field: ProductField| Callback::new(move |value: String| vm.set_field(field, value));

    view! {
        <div class="add-product">
            <h3 class="title">{"Add product"}</h3>

            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit();
            }>
                <Input
                    id="product-name"
                    value=vm.field_value(ProductField::Name)
                    on_input=on_field(ProductField::Name)
                    error=vm.field_error(ProductField::Name)
                    placeholder="Type product name..."
                />

                <Select
                    id="product-category"
                    value=vm.field_value(ProductField::Category)
                    on_change=on_field(ProductField::Category)
                    options=vm.category_options()
                    error=vm.field_error(ProductField::Category)
                    placeholder="Select category"
                />

                <Show when=move || vm.subcategory_visible().get()>
                    <Select
                        id="product-subcategory"
                        value=vm.field_value(ProductField::SubCategory)
                        on_change=on_field(ProductField::SubCategory)
                        options=vm.subcategory_options()
                        error=vm.field_error(ProductField::SubCategory)
                        placeholder="Select subcategory"
                    />
                </Show>

                <Input
                    id="product-expiry-date"
                    input_type="date"
                    value=vm.field_value(ProductField::ExpiryDate)
                    on_input=on_field(ProductField::ExpiryDate)
                    error=vm.field_error(ProductField::ExpiryDate)
                />

                <Textarea
                    id="product-note"
                    value=vm.field_value(ProductField::Note)
                    on_input=on_field(ProductField::Note)
                    error=vm.field_error(ProductField::Note)
                    placeholder="Type notes..."
                />

                <Button button_type="submit" disabled=vm.is_submitting()>
                    {"Add"}
                </Button>
            </form>
        </div>
    }
}
