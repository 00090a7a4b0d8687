// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Encoding and decoding of bus transactions.
//!
//! An outbound transaction is the 16-bit opcode followed by zero or
//! more parameter words, each word big-endian with a trailing CRC byte:
//!
//! ```text
//! +-------+-------+---------+---------+-----+- - -
//! | op_hi | op_lo | word_hi | word_lo | crc | ...
//! +-------+-------+---------+---------+-----+- - -
//! ```
//!
//! A response carries no opcode, just word/CRC groups of the same
//! 3-byte shape. Decoding is all-or-nothing: one bad group fails the
//! whole response.

use crate::command::Command;
use crate::crc::crc8;
use crate::error::Sgp30Error;

/// Bytes occupied by one word plus its CRC.
pub const WORD_WITH_CRC_LEN: usize = 3;

/// Length of the big-endian opcode that opens every request.
const OPCODE_LEN: usize = 2;

/// Encode a command and its parameter words into an outbound byte
/// sequence.
///
/// Fails without touching the bus when the number of parameters does
/// not match what the command requires.
pub fn encode(command: Command, parameters: &[u16]) -> Result<Vec<u8>, Sgp30Error> {
    let expected = command.parameter_count();
    if parameters.len() != expected {
        return Err(Sgp30Error::ParameterCountMismatch {
            command,
            expected,
            supplied: parameters.len(),
        });
    }

    let mut bytes = Vec::with_capacity(OPCODE_LEN + parameters.len() * WORD_WITH_CRC_LEN);
    bytes.extend_from_slice(&command.opcode().to_be_bytes());
    for &parameter in parameters {
        bytes.extend_from_slice(&parameter.to_be_bytes());
        bytes.push(crc8(parameter));
    }
    Ok(bytes)
}

/// Decode and verify an inbound byte sequence of `response_count`
/// word/CRC groups.
///
/// Returns the words in response order, or the first verification
/// failure. A partially verified result is never returned.
pub fn decode(bytes: &[u8], response_count: usize) -> Result<Vec<u16>, Sgp30Error> {
    let expected_len = response_count * WORD_WITH_CRC_LEN;
    if bytes.len() != expected_len {
        return Err(Sgp30Error::MalformedResponse {
            expected: expected_len,
            actual: bytes.len(),
        });
    }

    let mut words = Vec::with_capacity(response_count);
    for (index, group) in bytes.chunks_exact(WORD_WITH_CRC_LEN).enumerate() {
        let word = u16::from_be_bytes([group[0], group[1]]);
        let expected = crc8(word);
        if group[2] != expected {
            return Err(Sgp30Error::ChecksumMismatch {
                index,
                received: group[2],
                expected,
            });
        }
        words.push(word);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterless_command_is_opcode_only() {
        let bytes = encode(Command::InitAirQuality, &[]).unwrap();
        assert_eq!(bytes, vec![0x20, 0x03]);
    }

    #[test]
    fn parameters_are_big_endian_with_trailing_crc() {
        let bytes = encode(Command::SetBaseline, &[0xBEEF, 0x0102]).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..2], &[0x20, 0x1e]);
        assert_eq!(&bytes[2..5], &[0xBE, 0xEF, 0x92]);
        assert_eq!(&bytes[5..7], &[0x01, 0x02]);
        assert_eq!(bytes[7], crc8(0x0102));
    }

    #[test]
    fn surplus_parameter_is_rejected() {
        let err = encode(Command::GetBaseline, &[0x1234]).unwrap_err();
        match err {
            Sgp30Error::ParameterCountMismatch {
                command,
                expected,
                supplied,
            } => {
                assert_eq!(command, Command::GetBaseline);
                assert_eq!(expected, 0);
                assert_eq!(supplied, 1);
            }
            other => panic!("expected ParameterCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_parameter_is_rejected() {
        assert!(matches!(
            encode(Command::SetBaseline, &[0x1234]),
            Err(Sgp30Error::ParameterCountMismatch {
                expected: 2,
                supplied: 1,
                ..
            })
        ));
    }

    #[test]
    fn encoded_parameters_decode_back() {
        let words = [0x8a5d, 0x0000];
        let bytes = encode(Command::SetBaseline, &words).unwrap();
        // A response has no opcode, so skip it.
        let decoded = decode(&bytes[2..], words.len()).unwrap();
        assert_eq!(decoded, words);
    }

    #[test]
    fn length_mismatch_is_malformed() {
        let err = decode(&[0x01, 0x02], 1).unwrap_err();
        assert!(matches!(
            err,
            Sgp30Error::MalformedResponse {
                expected: 3,
                actual: 2
            }
        ));

        let long = [0x01, 0x02, crc8(0x0102), 0xFF];
        assert!(matches!(
            decode(&long, 1),
            Err(Sgp30Error::MalformedResponse {
                expected: 3,
                actual: 4
            })
        ));
    }

    #[test]
    fn corrupt_crc_byte_fails_checksum() {
        let mut bytes = vec![0x01, 0x02, crc8(0x0102)];
        bytes[2] ^= 0x01;
        let err = decode(&bytes, 1).unwrap_err();
        match err {
            Sgp30Error::ChecksumMismatch {
                index,
                received,
                expected,
            } => {
                assert_eq!(index, 0);
                assert_eq!(received, crc8(0x0102) ^ 0x01);
                assert_eq!(expected, crc8(0x0102));
            }
            other => panic!("expected ChecksumMismatch, got {other:?}"),
        }
    }

    #[test]
    fn corrupt_word_byte_fails_checksum() {
        let mut bytes = vec![0x01, 0x02, crc8(0x0102)];
        bytes[0] ^= 0x80;
        assert!(matches!(
            decode(&bytes, 1),
            Err(Sgp30Error::ChecksumMismatch { index: 0, .. })
        ));
    }

    #[test]
    fn second_group_corruption_reports_its_index() {
        let mut bytes = Vec::new();
        for word in [0x0190u16, 0x0000] {
            bytes.extend_from_slice(&word.to_be_bytes());
            bytes.push(crc8(word));
        }
        bytes[5] ^= 0xFF;
        let err = decode(&bytes, 2).unwrap_err();
        assert!(matches!(
            err,
            Sgp30Error::ChecksumMismatch { index: 1, .. }
        ));
    }

    #[test]
    fn empty_response_decodes_empty() {
        assert_eq!(decode(&[], 0).unwrap(), Vec::<u16>::new());
    }
}
