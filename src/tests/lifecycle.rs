use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::{BlinkenLights, Config, Error, LedBackend, LedState};

/// A register that outlives the controller, so its final value can be checked after the
/// backend is gone.
struct SharedBackend {
    register: Rc<Cell<LedState>>,
}

impl LedBackend for SharedBackend {
    fn open(_config: &Config) -> crate::Result<Self> {
        Ok(SharedBackend {
            register: Rc::default(),
        })
    }

    fn get(&self) -> crate::Result<LedState> {
        Ok(self.register.get())
    }

    fn set(&mut self, state: LedState) -> crate::Result<()> {
        self.register.set(state);
        Ok(())
    }

    fn describe(&self) -> String {
        "shared".to_owned()
    }
}

/// Reads fine, refuses every write.
struct ReadOnlyBackend {
    state: LedState,
}

impl LedBackend for ReadOnlyBackend {
    fn open(_config: &Config) -> crate::Result<Self> {
        Ok(ReadOnlyBackend {
            state: LedState::empty(),
        })
    }

    fn get(&self) -> crate::Result<LedState> {
        Ok(self.state)
    }

    fn set(&mut self, _state: LedState) -> crate::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only register").into())
    }

    fn describe(&self) -> String {
        "read-only".to_owned()
    }
}

fn shared_lights(initial: LedState) -> (BlinkenLights<SharedBackend>, Rc<Cell<LedState>>) {
    let register = Rc::new(Cell::new(initial));
    let backend = SharedBackend {
        register: Rc::clone(&register),
    };
    let config = Config::default().with_delay(Duration::ZERO);
    let lights = BlinkenLights::with_backend(backend, &config).unwrap();
    (lights, register)
}

#[test]
fn close_restores_original() {
    let (mut lights, register) = shared_lights(LedState::CAPS);
    lights.on().unwrap();
    assert_eq!(register.get(), LedState::all());

    lights.close().unwrap();
    assert_eq!(register.get(), LedState::CAPS);
    assert_eq!(Rc::strong_count(&register), 1);
}

#[test]
fn drop_restores_original() {
    let (mut lights, register) = shared_lights(LedState::NUM | LedState::SCROLL);
    lights.off().unwrap();
    assert_eq!(register.get(), LedState::empty());

    drop(lights);
    assert_eq!(register.get(), LedState::NUM | LedState::SCROLL);
    assert_eq!(Rc::strong_count(&register), 1);
}

#[test]
fn drop_after_close_leaves_register_alone() {
    let (mut lights, register) = shared_lights(LedState::SCROLL);
    lights.close().unwrap();
    register.set(LedState::CAPS);

    drop(lights);
    assert_eq!(register.get(), LedState::CAPS);
}

#[test]
fn close_releases_backend_on_failed_restore() {
    let config = Config::default().with_delay(Duration::ZERO);
    let backend = ReadOnlyBackend {
        state: LedState::NUM,
    };
    let mut lights = BlinkenLights::with_backend(backend, &config).unwrap();
    assert_eq!(lights.original(), LedState::NUM);

    let err = lights.close().unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
    assert!(lights.is_closed());
    assert!(lights.backend().is_none());
    assert!(matches!(lights.close(), Err(Error::Closed)));
}

#[test]
fn failed_restore_on_drop_does_not_panic() {
    let config = Config::default().with_delay(Duration::ZERO);
    let lights = BlinkenLights::with_backend(
        ReadOnlyBackend {
            state: LedState::CAPS,
        },
        &config,
    )
    .unwrap();
    assert_eq!(lights.to_string(), "#<BlinkenLights: delay=0s, tty=read-only, LEDs=010>");
    drop(lights);
}
