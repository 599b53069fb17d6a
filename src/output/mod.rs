//! Keyset Output Module
//!
//! Renders an [`EncodedKeyset`] in the line format consumed by registry
//! operators, or as a JSON record, and parses the line format back into raw
//! key bytes.
//!
//! ## Text Format
//!
//! ```text
//! === Complete Keyset for DeDi Registry ===
//! signingPrivateKey: <base64>
//! signingPublicKey: <base64>
//! encrPrivateKey: <base64>
//! encrPublicKey: <base64>
//! ```

use std::io::Write;

use tracing::debug;

use crate::config::{OutputConfig, OutputFormat};
use crate::crypto::{decode_key, EncodedKeyset, EncryptionKeypair, SigningKeypair, KEY_LENGTH};
use crate::error::{KeygenError, Result};

/// First line of the text output.
pub const HEADER: &str = "=== Complete Keyset for DeDi Registry ===";

pub const SIGNING_PRIVATE_KEY_LABEL: &str = "signingPrivateKey";
pub const SIGNING_PUBLIC_KEY_LABEL: &str = "signingPublicKey";
pub const ENCR_PRIVATE_KEY_LABEL: &str = "encrPrivateKey";
pub const ENCR_PUBLIC_KEY_LABEL: &str = "encrPublicKey";

/// Labels in the order they are printed.
pub const LABELS: [&str; 4] = [
    SIGNING_PRIVATE_KEY_LABEL,
    SIGNING_PUBLIC_KEY_LABEL,
    ENCR_PRIVATE_KEY_LABEL,
    ENCR_PUBLIC_KEY_LABEL,
];

// ============================================================================
// RENDERING
// ============================================================================

fn labelled_values(keyset: &EncodedKeyset) -> [(&'static str, &str); 4] {
    [
        (SIGNING_PRIVATE_KEY_LABEL, keyset.signing_private_key.as_str()),
        (SIGNING_PUBLIC_KEY_LABEL, keyset.signing_public_key.as_str()),
        (ENCR_PRIVATE_KEY_LABEL, keyset.encr_private_key.as_str()),
        (ENCR_PUBLIC_KEY_LABEL, keyset.encr_public_key.as_str()),
    ]
}

/// Renders the five-line text form, each line newline-terminated.
pub fn render_text(keyset: &EncodedKeyset) -> String {
    let mut out = String::with_capacity(HEADER.len() + 4 * 64);
    out.push_str(HEADER);
    out.push('\n');
    for (label, value) in labelled_values(keyset) {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Writes the text form to `writer` and flushes it.
pub fn write_text<W: Write>(writer: &mut W, keyset: &EncodedKeyset) -> Result<()> {
    writer.write_all(render_text(keyset).as_bytes())?;
    writer.flush()?;
    debug!("Wrote keyset in text format");
    Ok(())
}

/// Renders the keyset according to `config`.
///
/// # Returns
///
/// * `Ok(String)` - The rendered keyset
/// * `Err(KeygenError::Serialization)` - JSON rendering failed
pub fn render(keyset: &EncodedKeyset, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(keyset)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(keyset)?;
            json.push('\n');
            Ok(json)
        }
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Raw key bytes recovered from the text form.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedKeyset {
    pub signing_private_key: [u8; KEY_LENGTH],
    pub signing_public_key: [u8; KEY_LENGTH],
    pub encr_private_key: [u8; KEY_LENGTH],
    pub encr_public_key: [u8; KEY_LENGTH],
}

impl DecodedKeyset {
    /// Rebuilds the signing keypair, checking the printed public key matches the seed.
    pub fn signing_keypair(&self) -> Result<SigningKeypair> {
        let keypair = SigningKeypair::from_private_bytes(self.signing_private_key);
        if keypair.public_bytes() != self.signing_public_key {
            return Err(KeygenError::InvalidKey(format!(
                "{} does not correspond to {}",
                SIGNING_PUBLIC_KEY_LABEL, SIGNING_PRIVATE_KEY_LABEL
            )));
        }
        Ok(keypair)
    }

    /// Rebuilds the encryption keypair, checking the printed public key matches the scalar.
    pub fn encryption_keypair(&self) -> Result<EncryptionKeypair> {
        let keypair = EncryptionKeypair::from_private_bytes(self.encr_private_key);
        if keypair.public_bytes() != self.encr_public_key {
            return Err(KeygenError::InvalidKey(format!(
                "{} does not correspond to {}",
                ENCR_PUBLIC_KEY_LABEL, ENCR_PRIVATE_KEY_LABEL
            )));
        }
        Ok(keypair)
    }
}

impl std::fmt::Debug for DecodedKeyset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedKeyset").finish_non_exhaustive()
    }
}

/// Parses the text form produced by [`render_text`].
///
/// Requires exactly five lines: the header, then the four labelled values in
/// order. Every value must be standard base64 of exactly 32 bytes.
pub fn parse_text(text: &str) -> Result<DecodedKeyset> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != 1 + LABELS.len() {
        return Err(KeygenError::Format(format!(
            "expected {} lines, got {}",
            1 + LABELS.len(),
            lines.len()
        )));
    }
    if lines[0] != HEADER {
        return Err(KeygenError::Format(format!("unexpected header: {:?}", lines[0])));
    }

    let mut keys = [[0u8; KEY_LENGTH]; 4];
    for (i, (line, label)) in lines[1..].iter().zip(LABELS).enumerate() {
        let value = line
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(": "))
            .ok_or_else(|| {
                KeygenError::Format(format!("line {}: expected label {}", i + 2, label))
            })?;
        keys[i] = decode_key(label, value)?;
    }

    let [signing_private_key, signing_public_key, encr_private_key, encr_public_key] = keys;
    Ok(DecodedKeyset {
        signing_private_key,
        signing_public_key,
        encr_private_key,
        encr_public_key,
    })
}
