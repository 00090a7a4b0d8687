// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The SGP30 command set.
//!
//! Each command carries a 16-bit opcode and a fixed number of parameter
//! and response words. A word is two bytes followed by a third CRC
//! checksum byte, so a response count of 2 results in the transmission
//! of 6 bytes total.

use std::fmt;
use std::str::FromStr;

use crate::error::Sgp30Error;

/// Commands understood by the SGP30 sensor.
///
/// The production-line verification command `measure_test` (0x2032) is
/// deliberately not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start the on-chip air quality measurement algorithm.
    InitAirQuality,
    /// Measure eCO2 and TVOC. Poll at 1 Hz once initialized.
    MeasureAirQuality,
    /// Read the dynamic baseline compensation state.
    GetBaseline,
    /// Restore a previously saved baseline.
    SetBaseline,
    /// Set the absolute humidity used for signal compensation.
    SetHumidity,
    /// Read the product type and feature set version.
    GetFeatureSetVersion,
    /// Measure the uncompensated H2 and ethanol signals.
    MeasureRawSignals,
    /// Read the 48-bit serial identifier.
    GetSerialId,
}

impl Command {
    /// Every command in the set.
    pub const ALL: [Command; 8] = [
        Command::InitAirQuality,
        Command::MeasureAirQuality,
        Command::GetBaseline,
        Command::SetBaseline,
        Command::SetHumidity,
        Command::GetFeatureSetVersion,
        Command::MeasureRawSignals,
        Command::GetSerialId,
    ];

    /// 16-bit opcode transmitted big-endian at the start of a transaction.
    pub const fn opcode(self) -> u16 {
        match self {
            Command::InitAirQuality => 0x2003,
            Command::MeasureAirQuality => 0x2008,
            Command::GetBaseline => 0x2015,
            Command::SetBaseline => 0x201e,
            Command::SetHumidity => 0x2061,
            Command::GetFeatureSetVersion => 0x202f,
            Command::MeasureRawSignals => 0x2050,
            Command::GetSerialId => 0x3682,
        }
    }

    /// Number of parameter words the command requires.
    pub const fn parameter_count(self) -> usize {
        match self {
            Command::SetBaseline => 2,
            Command::SetHumidity => 1,
            _ => 0,
        }
    }

    /// Number of words in the command's response.
    pub const fn response_count(self) -> usize {
        match self {
            Command::InitAirQuality | Command::SetBaseline | Command::SetHumidity => 0,
            Command::GetFeatureSetVersion => 1,
            Command::MeasureAirQuality | Command::GetBaseline | Command::MeasureRawSignals => 2,
            Command::GetSerialId => 3,
        }
    }

    /// Datasheet name of the command.
    pub const fn name(self) -> &'static str {
        match self {
            Command::InitAirQuality => "init_air_quality",
            Command::MeasureAirQuality => "measure_air_quality",
            Command::GetBaseline => "get_baseline",
            Command::SetBaseline => "set_baseline",
            Command::SetHumidity => "set_humidity",
            Command::GetFeatureSetVersion => "get_feature_set_version",
            Command::MeasureRawSignals => "measure_raw_signals",
            Command::GetSerialId => "get_serial_id",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = Sgp30Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| Sgp30Error::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_matches_datasheet() {
        let expected: [(Command, u16, usize, usize); 8] = [
            (Command::InitAirQuality, 0x2003, 0, 0),
            (Command::MeasureAirQuality, 0x2008, 0, 2),
            (Command::GetBaseline, 0x2015, 0, 2),
            (Command::SetBaseline, 0x201e, 2, 0),
            (Command::SetHumidity, 0x2061, 1, 0),
            (Command::GetFeatureSetVersion, 0x202f, 0, 1),
            (Command::MeasureRawSignals, 0x2050, 0, 2),
            (Command::GetSerialId, 0x3682, 0, 3),
        ];
        for (command, opcode, parameters, responses) in expected {
            assert_eq!(command.opcode(), opcode, "{command}");
            assert_eq!(command.parameter_count(), parameters, "{command}");
            assert_eq!(command.response_count(), responses, "{command}");
        }
    }

    #[test]
    fn names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>().unwrap(), command);
            assert_eq!(command.to_string(), command.name());
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "frobnicate".parse::<Command>().unwrap_err();
        match err {
            Sgp30Error::UnknownCommand(name) => assert_eq!(name, "frobnicate"),
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }

    #[test]
    fn production_test_command_not_exposed() {
        assert!(matches!(
            "measure_test".parse::<Command>(),
            Err(Sgp30Error::UnknownCommand(_))
        ));
        for command in Command::ALL {
            assert_ne!(command.opcode(), 0x2032);
        }
    }
}
