pub mod bindings;
pub mod conversions;

pub use bindings::register;
