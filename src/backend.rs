//! Platform access to the LED register.
//!
//! Every backend exposes the same 3-bit native register through [`LedBackend`]. The one
//! matching the target platform is re-exported as [`DefaultBackend`]:
//!
//! - unix: [`ConsoleBackend`], the `KDGETLED`/`KDSETLED` console ioctls. These are Linux
//!   ioctls; other unixes report an error from the first call.
//! - windows: [`WindowsBackend`], which reads the lock key toggle state and simulates key
//!   presses to flip it.
//!
//! [`MemoryBackend`] keeps the register in memory and is available everywhere.

use cfg_if::cfg_if;

use crate::config::Config;
use crate::error::Result;
use crate::led::LedState;

mod memory;
pub use memory::MemoryBackend;

cfg_if! {
    if #[cfg(unix)] {
        mod console;
        pub use console::ConsoleBackend;
        /// The backend used by [`BlinkenLights::open`](crate::BlinkenLights::open).
        pub type DefaultBackend = ConsoleBackend;
    } else if #[cfg(windows)] {
        mod win32;
        pub use win32::WindowsBackend;
        /// The backend used by [`BlinkenLights::open`](crate::BlinkenLights::open).
        pub type DefaultBackend = WindowsBackend;
    }
}

/// Read and write access to the native LED register.
pub trait LedBackend {
    /// Acquires the device described by `config`.
    fn open(config: &Config) -> Result<Self>
    where
        Self: Sized;

    /// Returns the currently lit LEDs in native order.
    fn get(&self) -> Result<LedState>;

    /// Lights exactly the LEDs in `state`.
    fn set(&mut self, state: LedState) -> Result<()>;

    /// Names the device behind this backend, for logs and `Display`.
    fn describe(&self) -> String;
}
