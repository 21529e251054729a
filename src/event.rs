use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};

/// Keyboard modifier flags as the host application understands them.
/// The hardware has no usable Alt key; the translator raises `alt`
/// while the gesture strip is held down.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Mods {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Mods {
    pub fn none() -> Mods {
        Mods { shift: false, ctrl: false, alt: false }
    }

    pub fn from_sdl(m: Mod) -> Mods {
        Mods {
            shift: m.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
            ctrl: m.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD),
            alt: false,
        }
    }
}

/// A restricted set of keys that we're particularly interested in.
/// Everything else passes through untouched as `Other`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Also how the back gesture arrives on first-generation firmware.
    Escape,
    /// The forward gesture, reported as a key event.
    ForwardGesture,
    /// Dismisses the system virtual keyboard where one exists.
    DismissKeyboard,
    Other(Keycode),
}

/// A restricted subset of SDL events covering exactly what the shim
/// consumes: finger contacts in pixel coordinates, the gesture strip,
/// and keys.
#[derive(Clone, PartialEq, Debug)]
pub enum RawEvent {
    FingerDown { finger: i64, x: i32, y: i32 },
    FingerUp { finger: i64, x: i32, y: i32 },
    FingerMotion { finger: i64, x: i32, y: i32, dx: i32, dy: i32 },
    /// Gesture strip pressed down.
    GestureDown,
    /// Gesture strip released.
    GestureUp,
    KeyDown(Key, Mods),
    KeyUp(Key, Mods),
}

/// The synthetic input stream handed to the host application.
#[derive(Clone, PartialEq, Debug)]
pub enum IOEvent {
    MouseMove { x: i32, y: i32 },
    LButtonDown { x: i32, y: i32 },
    LButtonUp { x: i32, y: i32 },
    RButtonDown { x: i32, y: i32 },
    RButtonUp { x: i32, y: i32 },
    MButtonDown { x: i32, y: i32 },
    MButtonUp { x: i32, y: i32 },
    KeyDown(Key, Mods),
    KeyUp(Key, Mods),
}

unsafe impl Send for IOEvent {}
unsafe impl Sync for IOEvent {}

fn translate_key(k: Keycode) -> Key {
    match k {
        Keycode::Escape => Key::Escape,
        Keycode::AcForward => Key::ForwardGesture,
        Keycode::AcBack => Key::DismissKeyboard,
        other => Key::Other(other),
    }
}

/// Translates a raw SDL event into the restricted vocabulary above.
/// Finger coordinates arrive normalized to 0..1 and are scaled to the
/// screen rectangle; the gesture strip reports as the Menu key.
pub fn translate_event(e: Event, (w, h): (u32, u32)) -> Option<RawEvent> {
    match e {
        Event::FingerDown {finger_id, x, y, ..} =>
            Some(RawEvent::FingerDown {
                finger: finger_id,
                x: (x * w as f32) as i32,
                y: (y * h as f32) as i32,
            }),
        Event::FingerUp {finger_id, x, y, ..} =>
            Some(RawEvent::FingerUp {
                finger: finger_id,
                x: (x * w as f32) as i32,
                y: (y * h as f32) as i32,
            }),
        Event::FingerMotion {finger_id, x, y, dx, dy, ..} =>
            Some(RawEvent::FingerMotion {
                finger: finger_id,
                x: (x * w as f32) as i32,
                y: (y * h as f32) as i32,
                dx: (dx * w as f32) as i32,
                dy: (dy * h as f32) as i32,
            }),
        Event::KeyDown {keycode: Some(Keycode::Menu), ..} =>
            Some(RawEvent::GestureDown),
        Event::KeyUp {keycode: Some(Keycode::Menu), ..} =>
            Some(RawEvent::GestureUp),
        Event::KeyDown {keycode: Some(k), keymod, ..} =>
            Some(RawEvent::KeyDown(translate_key(k), Mods::from_sdl(keymod))),
        Event::KeyUp {keycode: Some(k), keymod, ..} =>
            Some(RawEvent::KeyUp(translate_key(k), Mods::from_sdl(keymod))),
        _ => None,
    }
}
