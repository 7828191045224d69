//! Static credential storage.

pub mod table;

pub use table::CredentialTable;
