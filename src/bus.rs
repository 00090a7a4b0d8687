// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! I2C bus transport seam.
//!
//! The driver only ever performs raw write and read exchanges against a
//! device address; anything that can do that can carry it. The stock
//! implementation wraps [`LinuxI2CDevice`] from the `i2cdev` crate. The
//! transport is always supplied by the caller, the driver never opens a
//! device node on its own.

use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

/// Raw byte exchanges against an addressed device on a two-wire bus.
///
/// Implementations are driven from one thread at a time. A command
/// transaction is not atomic across its write/delay/read sequence, so
/// sharing a bus between threads needs external mutual exclusion.
pub trait I2cTransport {
    /// Transport-level error, passed through the driver untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write `bytes` to the device at `address` in a single exchange.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Read exactly `len` bytes from the device at `address`.
    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>, Self::Error>;
}

impl I2cTransport for LinuxI2CDevice {
    type Error = LinuxI2CError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        self.set_slave_address(u16::from(address))?;
        I2CDevice::write(self, bytes)
    }

    fn read(&mut self, address: u8, len: usize) -> Result<Vec<u8>, Self::Error> {
        self.set_slave_address(u16::from(address))?;
        let mut buffer = vec![0u8; len];
        I2CDevice::read(self, &mut buffer)?;
        Ok(buffer)
    }
}
