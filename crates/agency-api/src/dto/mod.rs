//! Request data transfer objects.

pub mod request;

pub use request::LoginForm;
