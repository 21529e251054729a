use time;

/// Milliseconds since the clock was created. The translator never
/// reads a clock itself; timestamps are passed in, so tests can drive
/// time by hand.
pub struct Clock {
    start_ns: u64,
}

impl Clock {
    pub fn new() -> Clock {
        Clock { start_ns: time::precise_time_ns() }
    }

    pub fn now_ms(&self) -> u64 {
        (time::precise_time_ns() - self.start_ns) / 1_000_000
    }
}
