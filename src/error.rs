// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Driver error types.

use thiserror::Error;

use crate::command::Command;

/// Errors produced by the SGP30 driver.
///
/// None of these are retried internally: a failed exchange is surfaced
/// as-is and the caller decides whether to retry or abort.
#[derive(Debug, Error)]
pub enum Sgp30Error {
    /// The requested command name is not part of the SGP30 command set.
    #[error("unknown SGP30 command {0:?}")]
    UnknownCommand(String),

    /// The caller supplied the wrong number of parameter words.
    #[error("{command} takes {expected} parameter word(s), {supplied} supplied")]
    ParameterCountMismatch {
        /// Command being encoded.
        command: Command,
        /// Parameter words the command requires.
        expected: usize,
        /// Parameter words the caller supplied.
        supplied: usize,
    },

    /// A response did not have the expected length.
    #[error("malformed response: expected {expected} bytes, got {actual}")]
    MalformedResponse {
        /// Expected response length in bytes.
        expected: usize,
        /// Actual response length in bytes.
        actual: usize,
    },

    /// A response word failed checksum verification.
    #[error("invalid CRC in response word {index}: received {received:#04x}, expected {expected:#04x}")]
    ChecksumMismatch {
        /// Zero-based index of the word/CRC group inside the response.
        index: usize,
        /// CRC byte received on the bus.
        received: u8,
        /// CRC recomputed over the received word.
        expected: u8,
    },

    /// The underlying bus transport failed.
    #[error("bus transport error: {0}")]
    Bus(Box<dyn std::error::Error + Send + Sync>),
}

impl Sgp30Error {
    /// Wrap a transport error.
    pub(crate) fn bus<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Sgp30Error::Bus(Box::new(error))
    }
}
