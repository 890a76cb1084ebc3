//! Controller configuration and its environment-based defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::layout::Layout;

/// The console used when `BLINKENLIGHTS_TTY` is not set.
pub const DEFAULT_DEVICE: &str = "/dev/tty7";

/// Pause after every LED change. If it is too small the keyboard may lose track of its LED
/// state.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Environment variable naming the console device.
pub const DEVICE_ENV: &str = "BLINKENLIGHTS_TTY";

/// Environment variable overriding the delay, in (fractional) seconds.
pub const DELAY_ENV: &str = "BLINKENLIGHTS_DELAY";

/// Settings for opening a [`BlinkenLights`](crate::BlinkenLights) controller.
///
/// ```
/// use blinkenlights::Config;
/// use std::time::Duration;
///
/// let config = Config::default()
///     .with_device("/dev/tty8")
///     .with_delay(Duration::from_millis(50));
/// assert_eq!(config.device.to_str(), Some("/dev/tty8"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Console device whose LEDs are controlled. Ignored on Windows.
    pub device: PathBuf,
    /// Time slept after every LED change.
    pub delay: Duration,
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            device: PathBuf::from(DEFAULT_DEVICE),
            delay: DEFAULT_DELAY,
            layout: Layout::default(),
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// `BLINKENLIGHTS_TTY` selects the device, falling back to [`DEFAULT_DEVICE`].
    /// `BLINKENLIGHTS_DELAY` overrides the delay in seconds, falling back to
    /// [`DEFAULT_DELAY`].
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|k| std::env::var_os(k))
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// The device path is taken as is, so paths that are not valid UTF-8 survive.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Config> {
        let mut config = Config::default();
        if let Some(device) = lookup(DEVICE_ENV).filter(|d| !d.is_empty()) {
            config.device = PathBuf::from(device);
        }
        if let Some(delay) = lookup(DELAY_ENV) {
            let delay = delay.into_string().map_err(|raw| {
                Error::InvalidDelay(format!("{raw:?}: not valid UTF-8"))
            })?;
            config.delay = parse_delay(&delay)?;
        }
        Ok(config)
    }

    pub fn with_device(mut self, device: impl AsRef<Path>) -> Self {
        self.device = device.as_ref().to_path_buf();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

/// Parses a delay given in seconds, e.g. `0.1`.
pub fn parse_delay(secs: &str) -> Result<Duration> {
    let value: f64 = secs
        .trim()
        .parse()
        .map_err(|e| Error::InvalidDelay(format!("{secs:?}: {e}")))?;
    Duration::try_from_secs_f64(value)
        .map_err(|e| Error::InvalidDelay(format!("{secs:?}: {e}")))
}
