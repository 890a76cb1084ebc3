use crate::config::Config;
use crate::error::Result;
use crate::led::LedState;

use super::LedBackend;

/// An LED register that only lives in memory.
///
/// Useful for dry runs and for exercising patterns without a console. Every write is
/// recorded, so the full sequence a pattern produced can be inspected afterwards. The log
/// is never trimmed on its own; long-running users should call
/// [`clear_writes`](Self::clear_writes) now and then.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: LedState,
    writes: Vec<LedState>,
}

impl MemoryBackend {
    pub fn new(initial: LedState) -> Self {
        MemoryBackend {
            state: initial,
            writes: Vec::new(),
        }
    }

    /// Current register value, read without going through a controller.
    pub fn state(&self) -> LedState {
        self.state
    }

    /// All values written so far, oldest first.
    pub fn writes(&self) -> &[LedState] {
        &self.writes
    }

    /// Forgets the recorded writes. The register keeps its value.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl LedBackend for MemoryBackend {
    fn open(_config: &Config) -> Result<Self> {
        Ok(MemoryBackend::default())
    }

    fn get(&self) -> Result<LedState> {
        Ok(self.state)
    }

    fn set(&mut self, state: LedState) -> Result<()> {
        self.state = state;
        self.writes.push(state);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}
