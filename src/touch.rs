use std::cmp;

use delay::DelaySlot;
use event::{IOEvent, Key, Mods, RawEvent};
use host::Host;
use tuning::Tuning;

/// Translates raw touch and gesture input into the synthetic
/// mouse/keyboard stream the host expects: taps become clicks,
/// multi-finger taps become right and middle clicks, long two-finger
/// swipes become Escape or menu/keyboard requests, and the gesture
/// strip emulates an Alt key.
///
/// State is per touch sequence: a sequence begins when the first
/// finger lands and ends when it lifts. The machine never reads a
/// clock; callers pass the current time in milliseconds.
pub struct Translator {
    tuning: Tuning,
    screen: (u32, u32),

    // Cursor position, clamped to the screen rectangle.
    cur_x: i32,
    cur_y: i32,

    // Accumulated first-finger travel, for tap recognition.
    drag_x: i32,
    drag_y: i32,

    // Most recently pressed finger; None once finger 0 lifts.
    active_finger: Option<i64>,

    // Set once the first finger travels past the tap radius.
    dragging: bool,

    // True while the gesture strip is held (emulated Alt).
    gesture_down: bool,

    // A right or middle click blocks the lower-order clicks for the
    // rest of the sequence.
    block_lclick: bool,
    block_rclick: bool,

    // A swipe already opened a menu or the keyboard; releasing the
    // touch must not click on it.
    special_action: bool,

    // Holds the pending tap-and-hold press or a queued key release.
    queued: DelaySlot<IOEvent>,
}

impl Translator {
    pub fn new(tuning: Tuning, screen: (u32, u32)) -> Translator {
        Translator {
            tuning: tuning,
            screen: screen,
            cur_x: 0,
            cur_y: 0,
            drag_x: 0,
            drag_y: 0,
            active_finger: None,
            dragging: false,
            gesture_down: false,
            block_lclick: false,
            block_rclick: false,
            special_action: false,
            queued: DelaySlot::new(),
        }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.screen = (w, h);
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cur_x, self.cur_y)
    }

    /// Deliver the queued event once its time has come. Call once per
    /// tick, before pumping raw events.
    pub fn poll(&mut self, now: u64) -> Option<IOEvent> {
        match self.queued.take_due(now) {
            // A delayed press lands wherever the cursor is at fire
            // time, not where it was when the press was queued.
            Some(IOEvent::LButtonDown {..}) =>
                Some(IOEvent::LButtonDown { x: self.cur_x, y: self.cur_y }),
            other => other,
        }
    }

    /// Feed one raw event through the state machine. Returns the
    /// synthetic events to deliver, in order.
    pub fn feed(&mut self, ev: RawEvent, now: u64, host: &mut Host)
            -> Vec<IOEvent> {
        match ev {
            RawEvent::FingerDown {finger, x, y} =>
                self.finger_down(finger, x, y, now),
            RawEvent::FingerUp {finger, ..} =>
                self.finger_up(finger, now, host),
            RawEvent::FingerMotion {finger, x, y, dx, dy} =>
                self.finger_motion(finger, x, y, dx, dy),
            RawEvent::GestureDown => {
                self.gesture_down = true;
                vec![]
            }
            RawEvent::GestureUp => {
                self.gesture_down = false;
                vec![]
            }
            RawEvent::KeyDown(key, mods) => self.key_down(key, mods, host),
            RawEvent::KeyUp(key, mods) => self.key_up(key, mods, host),
        }
    }

    fn finger_down(&mut self, finger: i64, x: i32, y: i32, now: u64)
            -> Vec<IOEvent> {
        if self.active_finger.is_none() {
            // First touch of a sequence: the cursor jumps to the
            // finger and a left press is queued in case this turns
            // into a tap-and-hold.
            self.move_cursor(x, y);
            self.drag_x = 0;
            self.drag_y = 0;
            self.dragging = false;
            self.block_lclick = false;
            self.block_rclick = false;
            self.special_action = false;
            self.queued.schedule(now + self.tuning.hold_delay,
                IOEvent::LButtonDown { x: x, y: y });
        } else {
            // A second finger joined; this is not a tap-and-hold.
            self.cancel_hold();
        }
        self.active_finger = Some(finger);
        vec![]
    }

    fn finger_up(&mut self, finger: i64, now: u64, host: &mut Host)
            -> Vec<IOEvent> {
        self.cancel_hold();

        let mut out = Vec::new();
        match finger {
            0 => {
                self.active_finger = None;

                if self.dragging {
                    self.dragging = false;
                    // Release the drag, unless a swipe already opened
                    // something the release would land on.
                    if !self.special_action {
                        out.push(IOEvent::LButtonUp {
                            x: self.cur_x, y: self.cur_y });
                    }
                    return out;
                }

                if self.is_tap() && !self.block_lclick {
                    out.push(IOEvent::LButtonDown {
                        x: self.cur_x, y: self.cur_y });
                    out.push(IOEvent::LButtonUp {
                        x: self.cur_x, y: self.cur_y });
                }
            }
            1 => {
                let (w, h) = self.screen;

                // A long vertical swipe asks the host for the virtual
                // keyboard (upward) or the main menu (downward).
                if self.drag_y.abs() >= self.tuning.swipe_y(h) {
                    self.special_action = true;
                    if self.drag_y <= 0 {
                        if host.has_virtual_keyboard() {
                            host.set_keyboard_visible(true);
                            return out;
                        }
                    } else if !host.is_paused() {
                        host.open_main_menu();
                        return out;
                    }
                }

                // A long horizontal swipe, either direction, presses
                // Escape. The release is queued so the host sees a key
                // press of believable length.
                if self.drag_x.abs() >= self.tuning.swipe_x(w) {
                    self.special_action = true;
                    out.push(IOEvent::KeyDown(Key::Escape, Mods::none()));
                    self.queued.schedule(now + self.tuning.release_delay,
                        IOEvent::KeyUp(Key::Escape, Mods::none()));
                    return out;
                }

                if self.is_tap() && !self.block_rclick {
                    out.push(IOEvent::RButtonDown {
                        x: self.cur_x, y: self.cur_y });
                    out.push(IOEvent::RButtonUp {
                        x: self.cur_x, y: self.cur_y });
                    self.block_lclick = true;
                }
            }
            2 => {
                if self.is_tap() {
                    out.push(IOEvent::MButtonDown {
                        x: self.cur_x, y: self.cur_y });
                    out.push(IOEvent::MButtonUp {
                        x: self.cur_x, y: self.cur_y });
                    self.block_lclick = true;
                    self.block_rclick = true;
                }
            }
            _ => {}
        }
        out
    }

    fn finger_motion(&mut self, finger: i64, x: i32, y: i32,
            dx: i32, dy: i32) -> Vec<IOEvent> {
        let mut out = Vec::new();
        if finger == 0 {
            self.move_cursor(x, y);
            self.drag_x += dx;
            self.drag_y += dy;
            out.push(IOEvent::MouseMove { x: self.cur_x, y: self.cur_y });
        }

        // Travelling past the tap radius means this is a drag; the
        // pending hold press must not fire.
        if self.active_finger.is_some() && !self.dragging
                && (self.drag_x.abs() > self.tuning.tap_radius
                    || self.drag_y.abs() > self.tuning.tap_radius) {
            self.cancel_hold();
            self.dragging = true;
        }
        out
    }

    fn key_down(&mut self, key: Key, mods: Mods, host: &mut Host)
            -> Vec<IOEvent> {
        // First-generation firmware releases the strip tap after the
        // back/forward gesture, not before; drop the emulated Alt the
        // moment the gesture key arrives.
        if key == Key::Escape || key == Key::ForwardGesture {
            self.gesture_down = false;
        }

        if key == Key::DismissKeyboard && host.has_virtual_keyboard() {
            host.set_keyboard_visible(false);
            return vec![];
        }

        vec![IOEvent::KeyDown(key, self.with_gesture_alt(mods))]
    }

    fn key_up(&mut self, key: Key, mods: Mods, host: &mut Host)
            -> Vec<IOEvent> {
        if key == Key::DismissKeyboard && host.has_virtual_keyboard() {
            host.set_keyboard_visible(false);
            return vec![];
        }

        vec![IOEvent::KeyUp(key, self.with_gesture_alt(mods))]
    }

    fn with_gesture_alt(&self, mods: Mods) -> Mods {
        Mods { alt: mods.alt || self.gesture_down, ..mods }
    }

    fn is_tap(&self) -> bool {
        self.drag_x.abs() <= self.tuning.tap_radius
            && self.drag_y.abs() <= self.tuning.tap_radius
    }

    fn cancel_hold(&mut self) {
        if let Some(&IOEvent::LButtonDown {..}) = self.queued.peek() {
            self.queued.clear();
        }
    }

    fn move_cursor(&mut self, x: i32, y: i32) {
        let (w, h) = self.screen;
        self.cur_x = cmp::min(w as i32, cmp::max(0, x));
        self.cur_y = cmp::min(h as i32, cmp::max(0, y));
    }
}
