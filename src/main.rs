//! DeDi Registry Keyset Generator
//!
//! Generates the trust material used to bootstrap a DeDi registry and prints
//! it to standard output.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin dedi-keygen
//! ```
//!
//! ## Output
//!
//! - `signingPrivateKey` / `signingPublicKey` - raw Ed25519 seed and public key (base64)
//! - `encrPrivateKey` / `encrPublicKey` - raw X25519 scalar and public key (base64)
//!
//! Diagnostics go to standard error so that standard output carries only the keyset.

use anyhow::{Context, Result};
use tracing::debug;

use dedi_keygen::{output, Keyset};

fn main() -> Result<()> {
    // Keep stdout reserved for the keyset
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    debug!("Generating DeDi registry keyset");

    let keyset = Keyset::generate().context("key generation failed")?;
    let encoded = keyset.encode();

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_text(&mut handle, &encoded).context("failed to print keyset")?;

    debug!(
        signing_public_key = %encoded.signing_public_key,
        encr_public_key = %encoded.encr_public_key,
        "Keyset printed"
    );

    Ok(())
}
