pub mod aggregate;
pub mod validation;

pub use aggregate::{
    CreateProductRequest, CreateProductResponse, ProductDraft, SubmitOutcome,
    DUPLICATE_PRODUCT_ERROR_CODE,
};
pub use validation::{
    parse_expiry_date, validate, validate_field, FieldError, FieldErrors, ProductField,
    ValidationContext, NAME_MAX_LEN, NOTE_MAX_LEN,
};
