//! DeDi Registry Keyset Generator Library
//!
//! This crate generates the trust material a DeDi registry is bootstrapped with:
//! an Ed25519 signing keypair for authenticating published records and an
//! X25519 encryption keypair for confidential submissions. Keys are exposed
//! as raw 32-byte encodings and rendered as standard base64.

pub mod config;
pub mod crypto;
pub mod error;
pub mod output;

// Re-export commonly used types
pub use config::{OutputConfig, OutputFormat};
pub use crypto::{EncodedKeyset, EncryptionKeypair, Keyset, SigningKeypair, KEY_LENGTH};
pub use error::KeygenError;
pub use output::{parse_text, render, render_text, write_text, DecodedKeyset};
