use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::backend::{DefaultBackend, LedBackend};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::led::{Digital, Led, LedState};

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Controls the keyboard LEDs of a console.
///
/// The LED state found when the controller is created is restored when it is
/// [closed](Self::close) or dropped.
///
/// Every change sleeps for the configured [delay](Self::delay) before returning, so callers
/// never have to pace the keyboard controller themselves. Pattern methods additionally take a
/// `delay` that is slept between their steps.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use blinkenlights::{BlinkenLights, Config};
/// use std::time::Duration;
///
/// let mut lights = BlinkenLights::open(&Config::from_env()?)?;
/// for _ in 0..10 {
///     lights.circle(Duration::from_millis(50))?;
/// }
/// lights.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BlinkenLights<B: LedBackend = DefaultBackend> {
    backend: Option<B>,
    device: PathBuf,
    delay: Duration,
    layout: Layout,
    original: LedState,
}

impl BlinkenLights<DefaultBackend> {
    /// Opens the console named in `config` with the platform's default backend.
    pub fn open(config: &Config) -> Result<Self> {
        let backend = DefaultBackend::open(config)?;
        Self::with_backend(backend, config)
    }

    /// Opens the console selected by the environment, see [`Config::from_env`].
    pub fn open_default() -> Result<Self> {
        Self::open(&Config::from_env()?)
    }

    /// Opens a controller, hands it to `f`, and closes it again once `f` returns.
    ///
    /// The original LED state is restored even if `f` fails. An error from `f` takes
    /// precedence over an error while closing.
    pub fn scoped<T>(config: &Config, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut lights = Self::open(config)?;
        lights.run_scoped(f)
    }
}

impl<B: LedBackend> BlinkenLights<B> {
    /// Creates a controller on top of an already opened backend.
    ///
    /// Reads the current state, which is restored on [`close`](Self::close).
    pub fn with_backend(backend: B, config: &Config) -> Result<Self> {
        let original = backend.get()?;
        info!(
            "opened {} with LEDs at {:03b}",
            backend.describe(),
            original.bits()
        );
        Ok(BlinkenLights {
            backend: Some(backend),
            device: config.device.clone(),
            delay: config.delay,
            layout: config.layout,
            original,
        })
    }

    /// Runs `f` against this controller and closes it afterwards.
    pub fn run_scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let result = f(self);
        if self.is_closed() {
            return result;
        }
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Restores the LED state found at creation and releases the device.
    ///
    /// The device is released even if restoring fails.
    pub fn close(&mut self) -> Result<()> {
        let mut backend = self.backend.take().ok_or(Error::Closed)?;
        backend.set(self.original)?;
        pause(self.delay);
        info!(
            "closed {}, LEDs restored to {:03b}",
            backend.describe(),
            self.original.bits()
        );
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.backend.is_none()
    }

    /// The backend, or `None` once closed.
    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> Option<&mut B> {
        self.backend.as_mut()
    }

    /// The device path from the [`Config`] this controller was created with. Backends that
    /// do not use a path ignore it.
    pub fn device(&self) -> &Path {
        &self.device
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The time slept after every LED change.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// The LED state found when the controller was created.
    pub fn original(&self) -> LedState {
        self.original
    }

    /// Returns the LEDs in native order.
    pub fn get(&self) -> Result<LedState> {
        let backend = self.backend.as_ref().ok_or(Error::Closed)?;
        let state = backend.get()?;
        trace!("{}: LEDs at {:03b}", backend.describe(), state.bits());
        Ok(state)
    }

    /// Sets the LEDs in native order, then sleeps for the configured delay.
    pub fn set(&mut self, state: LedState) -> Result<LedState> {
        let backend = self.backend.as_mut().ok_or(Error::Closed)?;
        backend.set(state)?;
        debug!("{}: LEDs set to {:03b}", backend.describe(), state.bits());
        pause(self.delay);
        Ok(state)
    }

    /// Returns the LEDs in digital order.
    pub fn digital(&self) -> Result<Digital> {
        Ok(self.layout.to_digital(self.get()?))
    }

    /// Sets the LEDs to `number` in digital order. `number` is reduced modulo 8 first, see
    /// [`Digital::from_number`].
    pub fn set_digital(&mut self, number: u32) -> Result<Digital> {
        self.write_digital(Digital::from_number(number))
    }

    fn write_digital(&mut self, digital: Digital) -> Result<Digital> {
        self.set(self.layout.to_native(digital))?;
        Ok(digital)
    }

    /// Restores the LED state found when the controller was created.
    pub fn reset(&mut self) -> Result<()> {
        self.set(self.original)?;
        Ok(())
    }

    /// Switches all LEDs off.
    pub fn off(&mut self) -> Result<()> {
        self.write_digital(Digital::empty())?;
        Ok(())
    }

    /// Switches all LEDs on.
    pub fn on(&mut self) -> Result<()> {
        self.write_digital(Digital::all())?;
        Ok(())
    }

    /// Switches all LEDs on, sleeps for `delay`, then switches them off.
    pub fn flash(&mut self, delay: Duration) -> Result<()> {
        self.on()?;
        pause(delay);
        self.off()
    }

    fn run_sequence(&mut self, steps: &[Digital], delay: Duration) -> Result<()> {
        for &step in steps {
            self.write_digital(step)?;
            pause(delay);
        }
        Ok(())
    }

    /// Lights the LEDs one at a time from left to right.
    pub fn left_to_right(&mut self, delay: Duration) -> Result<()> {
        self.run_sequence(&[Digital::LEFT, Digital::MIDDLE, Digital::RIGHT], delay)
    }

    /// Lights the LEDs one at a time from right to left.
    pub fn right_to_left(&mut self, delay: Duration) -> Result<()> {
        self.run_sequence(&[Digital::RIGHT, Digital::MIDDLE, Digital::LEFT], delay)
    }

    /// [`left_to_right`](Self::left_to_right) followed by
    /// [`right_to_left`](Self::right_to_left).
    pub fn circle(&mut self, delay: Duration) -> Result<()> {
        self.left_to_right(delay)?;
        self.right_to_left(delay)
    }

    /// [`right_to_left`](Self::right_to_left) followed by
    /// [`left_to_right`](Self::left_to_right).
    pub fn reverse_circle(&mut self, delay: Duration) -> Result<()> {
        self.right_to_left(delay)?;
        self.left_to_right(delay)
    }

    /// Lights the outer LEDs, then the inner one.
    pub fn converge(&mut self, delay: Duration) -> Result<()> {
        self.run_sequence(&[Digital::LEFT | Digital::RIGHT, Digital::MIDDLE], delay)
    }

    /// Lights the inner LED, then the outer ones.
    pub fn diverge(&mut self, delay: Duration) -> Result<()> {
        self.run_sequence(&[Digital::MIDDLE, Digital::LEFT | Digital::RIGHT], delay)
    }

    /// Lights a random subset of the LEDs, then sleeps for `delay`.
    pub fn random(&mut self, delay: Duration) -> Result<Digital> {
        self.random_with(&mut rand::thread_rng(), delay)
    }

    /// Like [`random`](Self::random), drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, delay: Duration) -> Result<Digital> {
        let number = rng.gen_range(0..=u32::from(Digital::all().bits()));
        let digital = self.set_digital(number)?;
        pause(delay);
        Ok(digital)
    }

    /// Whether `led` is lit.
    pub fn led(&self, led: Led) -> Result<bool> {
        Ok(self.get()?.intersects(self.layout.mask(led)))
    }

    /// Switches `led` on or off, leaving the others alone.
    pub fn set_led(&mut self, led: Led, on: bool) -> Result<()> {
        let mask = self.layout.mask(led);
        let mut state = self.get()?;
        state.set(mask, on);
        self.set(state)?;
        Ok(())
    }

    /// Flips `led`, then sleeps for `delay`.
    pub fn toggle_led(&mut self, led: Led, delay: Duration) -> Result<()> {
        let on = self.led(led)?;
        self.set_led(led, !on)?;
        pause(delay);
        Ok(())
    }

    /// Whether any LED at `position` (in digital order) is lit.
    pub fn position(&self, position: Digital) -> Result<bool> {
        Ok(self.digital()?.intersects(position))
    }

    /// Switches the LEDs at `position` on or off, leaving the others alone.
    pub fn set_position(&mut self, position: Digital, on: bool) -> Result<()> {
        let mut digital = self.digital()?;
        digital.set(position, on);
        self.write_digital(digital)?;
        Ok(())
    }

    /// Flips the LEDs at `position`, then sleeps for `delay`.
    pub fn toggle_position(&mut self, position: Digital, delay: Duration) -> Result<()> {
        let on = self.position(position)?;
        self.set_position(position, !on)?;
        pause(delay);
        Ok(())
    }

    /// Scroll Lock LED.
    pub fn scr(&self) -> Result<bool> {
        self.led(Led::Scroll)
    }

    pub fn set_scr(&mut self, on: bool) -> Result<()> {
        self.set_led(Led::Scroll, on)
    }

    pub fn toggle_scr(&mut self, delay: Duration) -> Result<()> {
        self.toggle_led(Led::Scroll, delay)
    }

    /// Caps Lock LED.
    pub fn cap(&self) -> Result<bool> {
        self.led(Led::Caps)
    }

    pub fn set_cap(&mut self, on: bool) -> Result<()> {
        self.set_led(Led::Caps, on)
    }

    pub fn toggle_cap(&mut self, delay: Duration) -> Result<()> {
        self.toggle_led(Led::Caps, delay)
    }

    /// Num Lock LED.
    pub fn num(&self) -> Result<bool> {
        self.led(Led::Num)
    }

    pub fn set_num(&mut self, on: bool) -> Result<()> {
        self.set_led(Led::Num, on)
    }

    pub fn toggle_num(&mut self, delay: Duration) -> Result<()> {
        self.toggle_led(Led::Num, delay)
    }

    /// The leftmost LED.
    pub fn left(&self) -> Result<bool> {
        self.position(Digital::LEFT)
    }

    pub fn set_left(&mut self, on: bool) -> Result<()> {
        self.set_position(Digital::LEFT, on)
    }

    pub fn toggle_left(&mut self, delay: Duration) -> Result<()> {
        self.toggle_position(Digital::LEFT, delay)
    }

    /// The middle LED.
    pub fn middle(&self) -> Result<bool> {
        self.position(Digital::MIDDLE)
    }

    pub fn set_middle(&mut self, on: bool) -> Result<()> {
        self.set_position(Digital::MIDDLE, on)
    }

    pub fn toggle_middle(&mut self, delay: Duration) -> Result<()> {
        self.toggle_position(Digital::MIDDLE, delay)
    }

    /// The rightmost LED.
    pub fn right(&self) -> Result<bool> {
        self.position(Digital::RIGHT)
    }

    pub fn set_right(&mut self, on: bool) -> Result<()> {
        self.set_position(Digital::RIGHT, on)
    }

    pub fn toggle_right(&mut self, delay: Duration) -> Result<()> {
        self.toggle_position(Digital::RIGHT, delay)
    }
}

impl<B: LedBackend> Drop for BlinkenLights<B> {
    fn drop(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            if let Err(e) = backend.set(self.original) {
                warn!(
                    "failed to restore LEDs of {} on drop: {}",
                    backend.describe(),
                    e
                );
            }
        }
    }
}

impl<B: LedBackend> fmt::Display for BlinkenLights<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(backend) = &self.backend else {
            return write!(f, "#<BlinkenLights: closed>");
        };
        write!(
            f,
            "#<BlinkenLights: delay={}s, tty={}, LEDs=",
            self.delay.as_secs_f64(),
            backend.describe()
        )?;
        match self.digital() {
            Ok(digital) => write!(f, "{}>", digital),
            Err(_) => write!(f, "???>"),
        }
    }
}
