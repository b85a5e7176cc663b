pub mod button;
pub mod field_error;
pub mod input;
pub mod select;
pub mod textarea;

pub use button::Button;
pub use field_error::FieldErrorText;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
