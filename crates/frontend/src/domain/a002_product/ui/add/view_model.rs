use super::model;
use super::state::{AddProductState, SubcategoryRequest};
use crate::domain::a001_category::api;
use crate::shared::api_utils::ApiEndpoints;
use crate::shared::notifications::Notification;
use chrono::Utc;
use contracts::domain::a002_product::ProductField;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the "add product" form
#[derive(Clone, Copy)]
pub struct AddProductVm {
    pub state: RwSignal<AddProductState>,
    endpoints: StoredValue<ApiEndpoints>,
    notify: Callback<Notification>,
}

impl AddProductVm {
    pub fn new(endpoints: ApiEndpoints, notify: Callback<Notification>) -> Self {
        Self {
            state: RwSignal::new(AddProductState::new()),
            endpoints: StoredValue::new(endpoints),
            notify,
        }
    }

    fn emit(&self, pending: Vec<Notification>) {
        for notification in pending {
            self.notify.run(notification);
        }
    }

    // === Derived signals ===

    pub fn field_value(&self, field: ProductField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.field_value(field).to_string()))
    }

    pub fn field_error(&self, field: ProductField) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors.message(field)))
    }

    pub fn category_options(&self) -> Signal<Vec<String>> {
        let state = self.state;
        Signal::derive(move || state.with(AddProductState::category_options))
    }

    pub fn subcategory_options(&self) -> Signal<Vec<String>> {
        let state = self.state;
        Signal::derive(move || state.with(AddProductState::subcategory_options))
    }

    pub fn subcategory_visible(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AddProductState::subcategory_visible))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.submitting))
    }

    // === Commands ===

    /// Load the category list; called once when the page mounts.
    pub fn load_categories(&self) {
        let this = *self;
        let endpoints = self.endpoints.get_value();
        log::debug!("Loading categories");
        spawn_local(async move {
            let result = api::fetch_categories(&endpoints).await;
            let pending = this
                .state
                .try_update(|s| {
                    let mut pending = Vec::new();
                    s.apply_categories(result, |n| pending.push(n));
                    pending
                })
                .unwrap_or_default();
            this.emit(pending);
        });
    }

    /// Store a control value; a category change also reloads subcategories.
    pub fn set_field(&self, field: ProductField, value: String) {
        let request = self
            .state
            .try_update(|s| {
                let request = s.set_field(field, value);
                s.revalidate(Utc::now());
                request
            })
            .flatten();

        if let Some(request) = request {
            self.load_subcategories(request);
        }
    }

    fn load_subcategories(&self, request: SubcategoryRequest) {
        let this = *self;
        let endpoints = self.endpoints.get_value();
        log::debug!("Loading subcategories of {}", request.category);
        spawn_local(async move {
            let result = api::fetch_subcategories(&endpoints, &request.category).await;
            let pending = this
                .state
                .try_update(|s| {
                    let mut pending = Vec::new();
                    s.apply_subcategories(&request, result, |n| pending.push(n));
                    s.revalidate(Utc::now());
                    pending
                })
                .unwrap_or_default();
            this.emit(pending);
        });
    }

    /// Validate and post the product
    pub fn submit(&self) {
        let Some(request) = self
            .state
            .try_update(|s| s.begin_submit(Utc::now()))
            .flatten()
        else {
            return;
        };

        let this = *self;
        let endpoints = self.endpoints.get_value();
        log::debug!("Creating product {}", request.name);
        spawn_local(async move {
            let result = model::create_product(&endpoints, &request).await;
            let pending = this
                .state
                .try_update(|s| {
                    let mut pending = Vec::new();
                    s.finish_submit(result, |n| pending.push(n));
                    pending
                })
                .unwrap_or_default();
            this.emit(pending);
        });
    }
}
