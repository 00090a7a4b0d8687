// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Driver for the Sensirion SGP30 TVOC/eCO2 gas sensor on the Linux
//! I2C bus.
//!
//! Commands taken from the [datasheet](https://sensirion.com/media/documents/984E0DD5/61644B8B/Sensirion_Gas_Sensors_Datasheet_SGP30.pdf).
//! Every command is a 16-bit opcode; parameters and responses travel
//! as big-endian 16-bit words, each followed by a CRC-8 checksum byte.
//!
//! The bus transport and the delay provider are injected by the
//! caller, so the driver runs against a [`LinuxI2CDevice`] on real
//! hardware and against stub transports in tests. Nothing is opened
//! implicitly.
//!
//! Pending stuff:
//!
//! - [ ] Soft reset via the I2C general call address
//! - [ ] Absolute humidity conversion helper (g/m3 to the fixed-point word)
//!
//! ## Basic Example
//!
//! Warming the sensor up, then polling air quality at 1 Hz:
//!
//! ```no_run
//! use i2cdev::linux::LinuxI2CDevice;
//! use sgp30_i2c::{Sgp30, SystemDelay, DEFAULT_I2C_ADDRESS};
//! use std::thread;
//! use std::time::Duration;
//!
//! fn main() {
//!     // Open the I2C device
//!     let bus = LinuxI2CDevice::new("/dev/i2c-1", DEFAULT_I2C_ADDRESS as u16).unwrap();
//!     let mut sgp = Sgp30::new(bus, SystemDelay);
//!
//!     println!("Sensor warming up, please wait...");
//!     sgp.start_measurement(Some(&mut || print!("."))).unwrap();
//!     println!();
//!
//!     loop {
//!         match sgp.get_air_quality() {
//!             Ok(reading) => {
//!                 println!(
//!                     "eCO2: {} ppm TVOC: {} ppb",
//!                     reading.equivalent_co2, reading.total_voc
//!                 );
//!             }
//!             Err(e) => {
//!                 println!("Error obtaining measurement. More details: {}", e);
//!             }
//!         }
//!         thread::sleep(Duration::from_secs(1));
//!     }
//! }
//! ```
//!
//! [`LinuxI2CDevice`]: i2cdev::linux::LinuxI2CDevice

pub mod bus;
pub mod command;
pub mod crc;
pub mod delay;
pub mod error;
pub mod sgp30;
pub mod transaction;
pub mod types;

pub use bus::I2cTransport;
pub use command::Command;
pub use delay::{Delay, SystemDelay};
pub use error::Sgp30Error;
pub use sgp30::{Sgp30, DEFAULT_I2C_ADDRESS};
pub use types::{Baseline, FeatureSet, RawSignals, Reading};
