#![allow(dead_code)]

use blinkenlights::{BlinkenLights, Config, Error, LedBackend, MemoryBackend};
use std::time::Duration;

pub fn memory_lights() -> BlinkenLights<MemoryBackend> {
    let config = Config::default().with_delay(Duration::ZERO);
    BlinkenLights::with_backend(MemoryBackend::default(), &config).unwrap()
}

/// Opens the console named by `BLINKENLIGHTS_TTY` (or the default). The configured delay is
/// kept so the keyboard can keep up.
pub fn console_lights() -> blinkenlights::Result<BlinkenLights> {
    BlinkenLights::open_default()
}

pub fn positions<B: LedBackend>(lights: &BlinkenLights<B>) -> [bool; 3] {
    [
        lights.left().unwrap(),
        lights.middle().unwrap(),
        lights.right().unwrap(),
    ]
}

// Scenarios shared by the memory and the console tests. Each starts from a random state.

pub fn check_digital<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.random(Duration::ZERO).unwrap();
    for n in 0..=8u32 {
        lights.set_digital(n).unwrap();
        assert_eq!(u32::from(lights.digital().unwrap().bits()), n % 8);
    }
}

pub fn check_reset<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.reset().unwrap();
    let original = positions(lights);
    lights.random(Duration::ZERO).unwrap();
    lights.reset().unwrap();
    assert_eq!(positions(lights), original);
}

pub fn check_on_off_flash<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.random(Duration::ZERO).unwrap();
    lights.off().unwrap();
    assert_eq!(positions(lights), [false, false, false]);

    lights.random(Duration::ZERO).unwrap();
    lights.on().unwrap();
    assert_eq!(positions(lights), [true, true, true]);

    lights.random(Duration::ZERO).unwrap();
    lights.flash(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [false, false, false]);
}

pub fn check_sweeps<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.random(Duration::ZERO).unwrap();
    lights.left_to_right(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [false, false, true]);

    lights.random(Duration::ZERO).unwrap();
    lights.right_to_left(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [true, false, false]);

    lights.random(Duration::ZERO).unwrap();
    lights.circle(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [true, false, false]);

    lights.random(Duration::ZERO).unwrap();
    lights.reverse_circle(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [false, false, true]);
}

pub fn check_converge_diverge<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.random(Duration::ZERO).unwrap();
    lights.converge(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [false, true, false]);

    lights.random(Duration::ZERO).unwrap();
    lights.diverge(Duration::ZERO).unwrap();
    assert_eq!(positions(lights), [true, false, true]);
}

pub fn check_lock_keys<B: LedBackend>(lights: &mut BlinkenLights<B>) {
    lights.random(Duration::ZERO).unwrap();
    lights.set_num(false).unwrap();
    assert!(!lights.num().unwrap());
    lights.set_num(true).unwrap();
    assert!(lights.num().unwrap());
    lights.toggle_num(Duration::ZERO).unwrap();
    assert!(!lights.num().unwrap());
    lights.toggle_num(Duration::ZERO).unwrap();
    assert!(lights.num().unwrap());

    lights.set_cap(false).unwrap();
    assert!(!lights.cap().unwrap());
    lights.toggle_cap(Duration::ZERO).unwrap();
    assert!(lights.cap().unwrap());

    lights.set_scr(true).unwrap();
    assert!(lights.scr().unwrap());
    lights.toggle_scr(Duration::ZERO).unwrap();
    assert!(!lights.scr().unwrap());
}

pub fn check_close<B: LedBackend>(mut lights: BlinkenLights<B>) {
    assert!(!lights.is_closed());
    lights.close().unwrap();
    assert!(lights.is_closed());
    assert!(matches!(lights.flash(Duration::ZERO), Err(Error::Closed)));
}
