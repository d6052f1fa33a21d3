//! Credential configuration adapters

mod credentials;

pub use credentials::{EnvFileCredentialStore, API_KEY_VAR};
