//! Single-active-emitter playback state machine.

/// Which blob slot (1-based) is currently playing, if any.
///
/// `play` is a total function over every `i32`: the values 1..=5 select that
/// slot, everything else clears the selection. There is no toggle and no
/// error path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    active: Option<usize>,
}

impl Playback {
    pub fn play(&mut self, blob: i32) {
        self.active = match blob {
            1..=5 => Some(blob as usize),
            _ => None,
        };
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, slot: usize) -> bool {
        self.active == Some(slot)
    }
}
