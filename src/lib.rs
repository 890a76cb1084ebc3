//! Keyboard LED control.
//!
//! Keyboards have three lock indicator LEDs: Num Lock, Caps Lock and Scroll Lock. On Linux
//! a virtual console exposes them as a 3-bit register that can be read and written with the
//! `KDGETLED` and `KDSETLED` ioctls (see `linux/kd.h` and `console_ioctl(2)`). Writing that
//! register only changes the lights; the lock state the keyboard driver keeps is left alone.
//! On Windows there is no such register, so the LEDs are driven by simulating presses of the
//! lock keys themselves.
//!
//! [`BlinkenLights`] wraps either of these in one controller. Its state can be handled in two
//! orders:
//!
//! - *native* order ([`LedState`]) is what the platform primitive reads and writes.
//! - *digital* order ([`Digital`]) reads the LEDs as a binary number from left to right, so
//!   `LEFT = 4`, `MIDDLE = 2` and `RIGHT = 1` no matter which key each LED belongs to.
//!
//! A [`Layout`] maps one onto the other. The blink patterns (`circle`, `converge`,
//! `random`, ...) are all written in digital order.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use blinkenlights::{BlinkenLights, Config};
//! use std::time::Duration;
//!
//! let config = Config::from_env()?.with_device("/dev/tty8");
//! BlinkenLights::scoped(&config, |lights| {
//!     lights.set_digital(0b101)?;
//!     lights.toggle_middle(Duration::from_millis(500))?;
//!     lights.converge(Duration::from_millis(200))
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! Every LED change sleeps for [`Config::delay`] (100ms by default) afterwards. Keyboard
//! controllers that receive updates faster than that may lose track of which LEDs are lit.
//!
//! The controller is meant to have exactly one owner. The original LED state is restored
//! by [`BlinkenLights::close`] or, on a best-effort basis, when the controller is dropped.

#![cfg(any(unix, windows))]

pub mod backend;
mod config;
mod controller;
mod error;
mod layout;
mod led;
#[cfg(unix)]
mod sys;

pub use crate::backend::{DefaultBackend, LedBackend, MemoryBackend};
pub use crate::config::{
    parse_delay, Config, DEFAULT_DELAY, DEFAULT_DEVICE, DELAY_ENV, DEVICE_ENV,
};
pub use crate::controller::BlinkenLights;
pub use crate::error::{Error, Result};
pub use crate::layout::Layout;
pub use crate::led::{Digital, Led, LedState};

#[cfg(test)]
mod tests;
