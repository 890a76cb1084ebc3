//! Windows has no call that sets keyboard LEDs directly. The LEDs follow the toggle state of
//! the lock keys instead, so this backend flips that state by simulating key presses.

use windows::Win32::UI::Input::KeyboardAndMouse::{
    keybd_event, GetKeyState, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP, VIRTUAL_KEY, VK_CAPITAL,
    VK_NUMLOCK, VK_SCROLL,
};

use crate::config::Config;
use crate::error::Result;
use crate::led::{Led, LedState};

use super::LedBackend;

/// Lock keys as seen by the Win32 keyboard API.
#[derive(Debug)]
pub struct WindowsBackend {
    keys: [(LedState, VIRTUAL_KEY); 3],
}

fn virtual_key(led: Led) -> VIRTUAL_KEY {
    match led {
        Led::Scroll => VK_SCROLL,
        Led::Num => VK_NUMLOCK,
        Led::Caps => VK_CAPITAL,
    }
}

fn toggled(key: VIRTUAL_KEY) -> bool {
    // The low-order bit is the toggle state; the high-order bit means "held down".
    let state = unsafe { GetKeyState(i32::from(key.0)) };
    state & 1 != 0
}

fn press(key: VIRTUAL_KEY) {
    let vk = key.0 as u8;
    unsafe {
        keybd_event(vk, 0, KEYBD_EVENT_FLAGS(0), 0);
        keybd_event(vk, 0, KEYEVENTF_KEYUP, 0);
    }
}

impl LedBackend for WindowsBackend {
    fn open(config: &Config) -> Result<Self> {
        let keys = Led::ALL.map(|led| (config.layout.mask(led), virtual_key(led)));
        Ok(WindowsBackend { keys })
    }

    fn get(&self) -> Result<LedState> {
        Ok(self
            .keys
            .iter()
            .filter(|(_, key)| toggled(*key))
            .fold(LedState::empty(), |acc, (mask, _)| acc | *mask))
    }

    fn set(&mut self, state: LedState) -> Result<()> {
        for (mask, key) in self.keys {
            if state.contains(mask) != toggled(key) {
                log::trace!("pressing virtual key {:#04x}", key.0);
                press(key);
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "keyboard".to_owned()
    }
}
