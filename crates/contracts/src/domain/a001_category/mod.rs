pub mod aggregate;

pub use aggregate::{Category, CategoryListResponse, Subcategory, SubcategoryListResponse, SubcategorySet};
