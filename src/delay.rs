/// A single-slot delay line for events that must fire a little in the
/// future. The shim never has more than one event pending at a time,
/// so there is no timer heap; scheduling a new item evicts the old one.
pub struct DelaySlot<T> {
    slot: Option<(u64, T)>,
}

impl<T> DelaySlot<T> {
    pub fn new() -> DelaySlot<T> {
        DelaySlot { slot: None }
    }

    /// Schedule `item` to fire at `at` milliseconds.
    pub fn schedule(&mut self, at: u64, item: T) {
        self.slot = Some((at, item));
    }

    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref().map(|&(_, ref item)| item)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Remove and return the occupant once its time has come.
    pub fn take_due(&mut self, now: u64) -> Option<T> {
        match self.slot {
            Some((at, _)) if now >= at =>
                self.slot.take().map(|(_, item)| item),
            _ => None,
        }
    }
}
