//! Cryptographic Key Generation Module
//!
//! This module generates the two keypairs that make up a registry keyset:
//! an Ed25519 pair for signing published records and an X25519 pair for
//! key agreement on confidential submissions. Keys are handled as raw
//! 32-byte encodings (Ed25519 seed / X25519 scalar and their public points),
//! never as PKCS#8, DER or PEM.
//!
//! ## Security Requirements
//!
//! ⚠️ **CRITICAL**: Every private key is drawn from the operating system CSPRNG
//! in its own draw. The two keypairs never share entropy, and private key
//! bytes must never be logged.

use std::fmt;

use base64::{engine::general_purpose, Engine as _};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};

use crate::error::{KeygenError, Result};

/// Length in bytes of every raw key in a keyset.
pub const KEY_LENGTH: usize = 32;

/// Draws a fresh 32-byte private key from `rng`, propagating RNG failure.
fn draw_private_key<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; KEY_LENGTH]> {
    let mut bytes = [0u8; KEY_LENGTH];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

// ============================================================================
// SIGNING KEYPAIR (Ed25519)
// ============================================================================

/// Ed25519 keypair used to authenticate records published by the registry.
#[derive(Clone)]
pub struct SigningKeypair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl SigningKeypair {
    /// Generates a new keypair from the operating system CSPRNG.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new keypair from the given cryptographic RNG.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let seed = draw_private_key(rng)?;
        let keypair = Self::from_private_bytes(seed);
        debug!("Generated Ed25519 signing keypair");
        Ok(keypair)
    }

    /// Rebuilds the keypair from a raw 32-byte seed, deriving the public key.
    pub fn from_private_bytes(seed: [u8; KEY_LENGTH]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Raw 32-byte private seed.
    pub fn private_bytes(&self) -> [u8; KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// Raw 32-byte compressed public point.
    pub fn public_bytes(&self) -> [u8; KEY_LENGTH] {
        self.verifying_key.to_bytes()
    }

    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Returns true if `signature` over `message` was made by this keypair.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verifying_key.verify(message, signature).is_ok()
    }
}

impl fmt::Debug for SigningKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeypair")
            .field("public_key", &general_purpose::STANDARD.encode(self.public_bytes()))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ENCRYPTION KEYPAIR (X25519)
// ============================================================================

/// X25519 keypair that submitters use to encrypt payloads to the registry.
#[derive(Clone)]
pub struct EncryptionKeypair {
    secret: StaticSecret,
    public: X25519PublicKey,
}

impl EncryptionKeypair {
    /// Generates a new keypair from the operating system CSPRNG.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new keypair from the given cryptographic RNG.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let scalar = draw_private_key(rng)?;
        let keypair = Self::from_private_bytes(scalar);
        debug!("Generated X25519 encryption keypair");
        Ok(keypair)
    }

    /// Rebuilds the keypair from a raw 32-byte scalar, deriving the public key.
    ///
    /// Clamping happens inside the scalar multiplication, so the stored bytes
    /// are returned unchanged by [`Self::private_bytes`].
    pub fn from_private_bytes(scalar: [u8; KEY_LENGTH]) -> Self {
        let secret = StaticSecret::from(scalar);
        let public = X25519PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Raw 32-byte private scalar.
    pub fn private_bytes(&self) -> [u8; KEY_LENGTH] {
        self.secret.to_bytes()
    }

    /// Raw 32-byte Montgomery public point.
    pub fn public_bytes(&self) -> [u8; KEY_LENGTH] {
        self.public.to_bytes()
    }

    /// Performs X25519 key agreement with a peer's raw public key.
    pub fn diffie_hellman(&self, peer_public: &[u8; KEY_LENGTH]) -> [u8; KEY_LENGTH] {
        let peer = X25519PublicKey::from(*peer_public);
        self.secret.diffie_hellman(&peer).to_bytes()
    }
}

impl fmt::Debug for EncryptionKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionKeypair")
            .field("public_key", &general_purpose::STANDARD.encode(self.public_bytes()))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// KEYSET
// ============================================================================

/// The complete trust material for one registry: a signing and an encryption keypair.
#[derive(Debug, Clone)]
pub struct Keyset {
    pub signing: SigningKeypair,
    pub encryption: EncryptionKeypair,
}

/// Base64 form of a keyset, keyed by the labels used on output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedKeyset {
    pub signing_private_key: String,
    pub signing_public_key: String,
    pub encr_private_key: String,
    pub encr_public_key: String,
}

impl Keyset {
    /// Generates a fresh keyset from the operating system CSPRNG.
    ///
    /// # Returns
    ///
    /// * `Ok(Keyset)` - Both keypairs were generated
    /// * `Err(KeygenError::RandomSource)` - The random source failed; nothing is returned
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a fresh keyset from the given cryptographic RNG.
    ///
    /// The signing and encryption keys come from two separate draws, so
    /// neither keypair is derived from the other.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let signing = SigningKeypair::generate_with(rng)?;
        let encryption = EncryptionKeypair::generate_with(rng)?;
        Ok(Self {
            signing,
            encryption,
        })
    }

    /// Encodes all four raw keys as standard padded base64.
    pub fn encode(&self) -> EncodedKeyset {
        EncodedKeyset {
            signing_private_key: general_purpose::STANDARD.encode(self.signing.private_bytes()),
            signing_public_key: general_purpose::STANDARD.encode(self.signing.public_bytes()),
            encr_private_key: general_purpose::STANDARD.encode(self.encryption.private_bytes()),
            encr_public_key: general_purpose::STANDARD.encode(self.encryption.public_bytes()),
        }
    }
}

impl fmt::Debug for EncodedKeyset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyset")
            .field("signing_public_key", &self.signing_public_key)
            .field("encr_public_key", &self.encr_public_key)
            .finish_non_exhaustive()
    }
}

/// Decodes a base64 key and checks it is exactly [`KEY_LENGTH`] bytes.
pub fn decode_key(label: &str, value: &str) -> Result<[u8; KEY_LENGTH]> {
    let bytes = general_purpose::STANDARD
        .decode(value)
        .map_err(|e| KeygenError::InvalidKey(format!("{}: not valid base64: {}", label, e)))?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        KeygenError::InvalidKey(format!(
            "{}: expected {} bytes, got {}",
            label, KEY_LENGTH, len
        ))
    })
}
