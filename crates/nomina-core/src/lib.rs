pub mod code;
pub mod error;
pub mod input;
pub mod key;

pub use code::{CodeConverter, CodeEntry};
pub use error::LoadError;
pub use input::normalize_input;
pub use key::code_key;
