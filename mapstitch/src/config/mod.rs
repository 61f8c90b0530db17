//! Configuration concerns that outlive a single run.
//!
//! Currently the persisted API credential. Everything else the core needs
//! is built once by the CLI as plain value structs and passed in by value;
//! no process-global state exists.

mod credentials;

pub use credentials::{
    is_valid_api_key, load_api_key, load_api_key_from, save_api_key, save_api_key_to,
    CredentialError, API_KEY_FILE,
};
