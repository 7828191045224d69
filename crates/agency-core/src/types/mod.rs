//! Shared domain types.

pub mod flash;
pub mod session;

pub use flash::{FlashCategory, FlashMessage};
pub use session::{LOGIN_TIME_FORMAT, Session, SessionState};
