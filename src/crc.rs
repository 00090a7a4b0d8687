// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! CRC-8 checksum protecting every word on the bus.
//!
//! Parameters per section 6.6 of the SGP30 datasheet: polynomial 0x31
//! (x^8 + x^5 + x^4 + 1), initialization 0xFF, no reflection, no final
//! XOR.

/// Generator polynomial.
const POLYNOMIAL: u8 = 0x31;

/// Accumulator initialization value.
const INIT: u8 = 0xFF;

/// Calculate the 8-bit checksum of a 16-bit word.
///
/// The word is processed most significant byte first, matching the
/// big-endian order it travels in on the bus.
#[must_use]
pub fn crc8(word: u16) -> u8 {
    let mut crc = INIT;
    for byte in word.to_be_bytes() {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_vectors() {
        assert_eq!(crc8(0x0000), 0x81);
        assert_eq!(crc8(0xFFFF), 0xAC);
        // Example word from the datasheet checksum section.
        assert_eq!(crc8(0xBEEF), 0x92);
    }

    #[test]
    fn deterministic_over_repeated_calls() {
        for word in [0x0000, 0x0001, 0x1234, 0x8000, 0xBEEF, 0xFFFF] {
            assert_eq!(crc8(word), crc8(word));
        }
    }
}
