//! Signed-cookie session storage and flash messages.

pub mod codec;
pub mod cookie;

pub use cookie::{CookieSessionStore, FLASH_COOKIE, SESSION_COOKIE};
