//! Shared test helpers
//!
//! - **Random sources**: RNGs that fail or count draws, for exercising generation paths
//! - **Binary runner**: invokes the compiled `dedi-keygen` binary and captures its output

use std::process::{Command, Output};

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

// ============================================================================
// RANDOM SOURCES
// ============================================================================

/// RNG whose every draw fails, standing in for an unavailable OS random source.
pub struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("FailingRng must only be used through try_fill_bytes")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("FailingRng must only be used through try_fill_bytes")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("FailingRng must only be used through try_fill_bytes")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            "entropy source unavailable",
        )))
    }
}

impl CryptoRng for FailingRng {}

/// OS RNG wrapper that counts fill requests and can be told to fail after a number of them.
pub struct CountingRng {
    pub draws: usize,
    pub fail_after: Option<usize>,
}

impl CountingRng {
    pub fn new() -> Self {
        Self {
            draws: 0,
            fail_after: None,
        }
    }

    pub fn failing_after(draws: usize) -> Self {
        Self {
            draws: 0,
            fail_after: Some(draws),
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        OsRng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        OsRng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).expect("counting rng draw")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if self.fail_after == Some(self.draws) {
            return FailingRng.try_fill_bytes(dest);
        }
        self.draws += 1;
        OsRng.try_fill_bytes(dest)
    }
}

impl CryptoRng for CountingRng {}

// ============================================================================
// BINARY RUNNER
// ============================================================================

/// Runs the keyset generator binary with no arguments.
pub fn run_keygen() -> Output {
    Command::new(env!("CARGO_BIN_EXE_dedi-keygen"))
        .output()
        .expect("dedi-keygen binary to run")
}

/// Runs the binary, asserts success and returns its standard output.
pub fn run_keygen_stdout() -> String {
    let output = run_keygen();
    assert!(
        output.status.success(),
        "dedi-keygen exited with {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout to be UTF-8")
}
