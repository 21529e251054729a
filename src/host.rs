/// The slice of the host application that gesture handling needs to
/// reach: pause state, the main menu, and the system virtual keyboard.
/// The real program embeds the translator next to its engine and GUI;
/// the demo harness and the tests stand in with small implementations.
pub trait Host {
    /// True while the engine is paused; the main menu must stay shut.
    fn is_paused(&self) -> bool;

    /// Open the host's main menu dialog.
    fn open_main_menu(&mut self);

    /// Whether the platform offers a system virtual keyboard.
    fn has_virtual_keyboard(&self) -> bool;

    /// Show or hide the system virtual keyboard.
    fn set_keyboard_visible(&mut self, visible: bool);
}

/// Desktop stand-in: never paused, no virtual keyboard, menu requests
/// just get logged.
pub struct DesktopHost;

impl Host for DesktopHost {
    fn is_paused(&self) -> bool {
        false
    }

    fn open_main_menu(&mut self) {
        println!("host: main menu requested");
    }

    fn has_virtual_keyboard(&self) -> bool {
        false
    }

    fn set_keyboard_visible(&mut self, _visible: bool) {}
}
