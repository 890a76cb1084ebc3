use std::fs::{File, OpenOptions};
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::led::LedState;
use crate::sys;

use super::LedBackend;

/// A virtual console whose keyboard LEDs are driven with `KDGETLED`/`KDSETLED`.
///
/// Paths are typically something like `/dev/tty7`. The console must be opened read/write,
/// which normally requires root or membership in the `tty` group.
#[derive(Debug)]
pub struct ConsoleBackend {
    file: File,
    path: PathBuf,
}

impl ConsoleBackend {
    /// Opens a console, given its system path.
    #[inline(always)]
    pub fn open_path(path: impl AsRef<Path>) -> Result<ConsoleBackend> {
        Self::_open(path.as_ref())
    }

    fn _open(path: &Path) -> Result<ConsoleBackend> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ConsoleBackend {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedBackend for ConsoleBackend {
    fn open(config: &Config) -> Result<Self> {
        Self::open_path(&config.device)
    }

    fn get(&self) -> Result<LedState> {
        let mut leds: u8 = 0;
        unsafe { sys::kdgetled(self.as_raw_fd(), &mut leds)? };
        Ok(LedState::from_bits_truncate(leds))
    }

    fn set(&mut self, state: LedState) -> Result<()> {
        unsafe { sys::kdsetled(self.as_raw_fd(), libc::c_int::from(state.bits()))? };
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl AsRawFd for ConsoleBackend {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}
