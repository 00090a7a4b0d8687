// Copyright 2026, the sgp30_i2c authors
//
// Licensed under the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>,
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Blocking delay seam.

use std::thread;
use std::time::Duration;

/// Blocking delay primitive used between bus exchanges.
pub trait Delay {
    /// Block the calling thread for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// [`Delay`] backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDelay;

impl Delay for SystemDelay {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
