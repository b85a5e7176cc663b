//! "Add product" page
//!
//! MVVM split:
//! - model.rs: API call (create)
//! - state.rs: form state machine, no reactive or browser dependencies
//! - view_model.rs: signals, async commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use state::{AddProductState, SubcategoryRequest, ADD_FAIL_TAG, ADD_SUCCESS_TAG};
pub use view::AddProductPage;
pub use view_model::AddProductVm;
