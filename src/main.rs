extern crate sdl2;
extern crate carboxyl;
extern crate num;
extern crate rustc_serialize;
extern crate time;

use std::path::Path;
use std::thread;
use std::time::Duration;

use sdl2::event::{Event, WindowEvent};

mod clock;
mod delay;
mod event;
mod host;
mod ratio;
mod touch;
mod tuning;

use clock::Clock;
use event::{translate_event, IOEvent, Key};
use host::DesktopHost;
use touch::Translator;
use tuning::Tuning;

// Native panel resolution of the original tablet hardware.
const SCREEN: (u32, u32) = (1024, 768);

fn main() {
    let sdl_context = sdl2::init().unwrap();
    let video = sdl_context.video().unwrap();

    let _window = video.window("tapdance", SCREEN.0, SCREEN.1)
        .position_centered()
        .build()
        .unwrap();

    let mut screen = SCREEN;
    let tuning = Tuning::load(Path::new("assets/tuning.json"));
    let mut translator = Translator::new(tuning, screen);
    let mut host = DesktopHost;
    let clock = Clock::new();

    // The synthetic stream flows through an FRP sink; the cursor
    // position is a signal folded over it.
    let sink = carboxyl::Sink::new();
    let cursor = sink.stream().fold((0, 0), |pos, ev| match ev {
        IOEvent::MouseMove {x, y} => (x, y),
        _ => pos,
    });

    'mainloop: loop {
        let now = clock.now_ms();

        if let Some(ev) = translator.poll(now) {
            println!("sim: {:?} (cursor {:?})", ev, translator.cursor());
            sink.send(ev);
        }

        for sdl_event in sdl_context.event_pump().unwrap().poll_iter() {
            if let Event::Quit {..} = sdl_event {
                break 'mainloop;
            }
            if let Event::Window {
                    win_event: WindowEvent::Resized(w, h), ..} = sdl_event {
                screen = (w as u32, h as u32);
                translator.resize(screen.0, screen.1);
                continue;
            }
            let raw = match translate_event(sdl_event, screen) {
                Some(raw) => raw,
                None => continue,
            };
            for out in translator.feed(raw, now, &mut host) {
                if let IOEvent::KeyDown(Key::Escape, _) = out {
                    break 'mainloop;
                }
                println!("sim: {:?}", out);
                sink.send(out);
            }
        }

        thread::sleep(Duration::from_millis(10));
    }

    println!("cursor ended at {:?}", cursor.sample());
}
