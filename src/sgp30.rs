// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The SGP30 device controller.

use std::time::Duration;

use crate::bus::I2cTransport;
use crate::command::Command;
use crate::delay::Delay;
use crate::error::Sgp30Error;
use crate::transaction::{self, WORD_WITH_CRC_LEN};
use crate::types::{Baseline, FeatureSet, RawSignals, Reading};

/// Factory-programmed I2C address of the SGP30.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x58;

/// Settle time between a command write and the response read. Long
/// enough for every command in the set; only the excluded production
/// `measure_test` would need more.
const COMMAND_SETTLE_TIME: Duration = Duration::from_millis(25);

/// Interval between warm-up polls.
const WARMUP_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polls after which warm-up is abandoned even if the sensor still
/// reports its fixed warm-up output.
const WARMUP_POLL_LIMIT: usize = 20;

/// The fixed (eCO2 ppm, TVOC ppb) output reported while the
/// measurement algorithm warms up.
const WARMUP_READING: (u16, u16) = (400, 0);

/// SGP30 driver over an injected bus transport and delay provider.
///
/// The driver owns the transport for its whole lifetime and assumes
/// exclusive access to the device. All exchanges are blocking.
pub struct Sgp30<B, D> {
    bus: B,
    delay: D,
    address: u8,
}

impl<B, D> Sgp30<B, D>
where
    B: I2cTransport,
    D: Delay,
{
    /// Create a driver for a sensor at the factory address 0x58.
    ///
    /// Construction performs no I/O; the first exchange happens on the
    /// first command.
    pub fn new(bus: B, delay: D) -> Self {
        Sgp30::with_address(bus, delay, DEFAULT_I2C_ADDRESS)
    }

    /// Create a driver for a sensor behind a multiplexer or address
    /// translator.
    pub fn with_address(bus: B, delay: D, address: u8) -> Self {
        Sgp30 {
            bus,
            delay,
            address,
        }
    }

    /// Execute one command transaction and return the verified
    /// response words.
    ///
    /// Writes the encoded command, then after the fixed settle delay
    /// reads and verifies exactly the expected number of word/CRC
    /// groups (none for commands without a response). Transport
    /// failures, malformed responses and checksum mismatches all abort
    /// the exchange; nothing is retried.
    pub fn execute(
        &mut self,
        command: Command,
        parameters: &[u16],
    ) -> Result<Vec<u16>, Sgp30Error> {
        let request = transaction::encode(command, parameters)?;
        log::trace!("{} -> {:02x?}", command, request);
        self.bus
            .write(self.address, &request)
            .map_err(Sgp30Error::bus)?;
        self.delay.sleep(COMMAND_SETTLE_TIME);

        let response_count = command.response_count();
        if response_count == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .bus
            .read(self.address, response_count * WORD_WITH_CRC_LEN)
            .map_err(Sgp30Error::bus)?;
        let words = transaction::decode(&raw, response_count)?;
        log::trace!("{} <- {:04x?}", command, words);
        Ok(words)
    }

    /// Start the air quality measurement algorithm and wait out its
    /// warm-up phase.
    ///
    /// After `init_air_quality` the sensor reports a fixed 400 ppm /
    /// 0 ppb for roughly the first 15 s. Readings are polled once per
    /// second and discarded until the output moves, capped at 20
    /// polls, so this blocks for up to roughly 20 s. `progress`, when
    /// given, runs once per discarded reading.
    pub fn start_measurement(
        &mut self,
        mut progress: Option<&mut dyn FnMut()>,
    ) -> Result<(), Sgp30Error> {
        self.execute(Command::InitAirQuality, &[])?;
        log::debug!("air quality algorithm started, waiting for warm-up");

        for discarded in 0..WARMUP_POLL_LIMIT {
            let words = self.execute(Command::MeasureAirQuality, &[])?;
            if (words[0], words[1]) != WARMUP_READING {
                log::debug!("warm-up finished after {} discarded readings", discarded);
                return Ok(());
            }
            if let Some(callback) = progress.as_mut() {
                callback();
            }
            self.delay.sleep(WARMUP_POLL_INTERVAL);
        }

        log::warn!(
            "sensor still reporting warm-up values after {} polls",
            WARMUP_POLL_LIMIT
        );
        Ok(())
    }

    /// Measure air quality.
    ///
    /// Call at 1 s intervals so the dynamic baseline compensation
    /// operates correctly.
    pub fn get_air_quality(&mut self) -> Result<Reading, Sgp30Error> {
        let words = self.execute(Command::MeasureAirQuality, &[])?;
        Ok(Reading {
            equivalent_co2: words[0],
            total_voc: words[1],
        })
    }

    /// Read the current baseline of the compensation algorithm.
    pub fn get_baseline(&mut self) -> Result<Baseline, Sgp30Error> {
        let words = self.execute(Command::GetBaseline, &[])?;
        Ok(Baseline {
            equivalent_co2: words[0],
            total_voc: words[1],
        })
    }

    /// Restore a previously saved baseline.
    pub fn set_baseline(&mut self, baseline: Baseline) -> Result<(), Sgp30Error> {
        // Wire order is (TVOC, eCO2), the reverse of the read-back order.
        self.execute(
            Command::SetBaseline,
            &[baseline.total_voc, baseline.equivalent_co2],
        )?;
        Ok(())
    }

    /// Set the absolute humidity used for signal compensation.
    ///
    /// `humidity` is rounded to the nearest integer word.
    pub fn set_humidity(&mut self, humidity: f32) -> Result<(), Sgp30Error> {
        let word = humidity.round() as u16;
        self.execute(Command::SetHumidity, &[word])?;
        Ok(())
    }

    /// Read the uncompensated H2 and ethanol signals.
    pub fn get_raw_signals(&mut self) -> Result<RawSignals, Sgp30Error> {
        let words = self.execute(Command::MeasureRawSignals, &[])?;
        Ok(RawSignals {
            h2: words[0],
            ethanol: words[1],
        })
    }

    /// Read the 48-bit serial identifier.
    pub fn get_serial_id(&mut self) -> Result<u64, Sgp30Error> {
        let words = self.execute(Command::GetSerialId, &[])?;
        Ok(u64::from(words[0]) << 32 | u64::from(words[1]) << 16 | u64::from(words[2]))
    }

    /// Read the product type and feature set version.
    pub fn get_feature_set_version(&mut self) -> Result<FeatureSet, Sgp30Error> {
        let words = self.execute(Command::GetFeatureSetVersion, &[])?;
        Ok(FeatureSet {
            product_type: ((words[0] & 0xf000) >> 12) as u8,
            version: (words[0] & 0x00ff) as u8,
        })
    }

    /// Consume the driver and hand the bus transport back.
    ///
    /// Dropping the driver releases the transport just as well; this
    /// exists for callers that want the handle back for reuse.
    pub fn release(self) -> B {
        self.bus
    }
}
