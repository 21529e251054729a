use std::fs::File;
use std::io::Read;
use std::path::Path;

use rustc_serialize::{Decodable, Decoder};
use rustc_serialize::json;

use ratio::{Ratio, Scalable};

/// The pixel-distance and timing heuristics driving gesture
/// recognition. The defaults are the values tuned to the original
/// device family; a JSON file can override them for other screens.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tuning {
    /// Fingers that travel further than this on either axis are
    /// dragging, not tapping. In pixels.
    pub tap_radius: i32,
    /// How long a motionless finger rests before the delayed
    /// button-down fires. Milliseconds.
    pub hold_delay: u64,
    /// Gap between an emulated key press and its queued release.
    /// Milliseconds.
    pub release_delay: u64,
    /// Fraction of a screen dimension a two-finger swipe must cover,
    /// kept as an integer ratio.
    pub swipe_numer: i32,
    pub swipe_denom: i32,
}

impl Tuning {
    /// The hard-coded device values.
    pub fn device() -> Tuning {
        Tuning {
            tap_radius: 5,
            hold_delay: 500,
            release_delay: 250,
            swipe_numer: 3,
            swipe_denom: 5,
        }
    }

    /// Minimum horizontal travel for an edge swipe on a `w`-pixel
    /// screen. Rounded up, so travel short of the exact fraction
    /// never qualifies.
    pub fn swipe_x(&self, w: u32) -> i32 {
        (w as i32).scale_ceil(Ratio::new(self.swipe_numer, self.swipe_denom))
    }

    /// Minimum vertical travel for an edge swipe on an `h`-pixel
    /// screen. Rounded up like `swipe_x`.
    pub fn swipe_y(&self, h: u32) -> i32 {
        (h as i32).scale_ceil(Ratio::new(self.swipe_numer, self.swipe_denom))
    }

    /// Load overrides from a JSON file. A missing or malformed file
    /// falls back to the device defaults.
    pub fn load(path: &Path) -> Tuning {
        let mut text = String::new();
        let read = File::open(path).ok()
            .and_then(|mut f| f.read_to_string(&mut text).ok());
        match read {
            Some(_) => json::decode(&text).unwrap_or_else(|_| Tuning::device()),
            None => Tuning::device(),
        }
    }
}

impl Decodable for Tuning {
    fn decode<D: Decoder>(d: &mut D) -> Result<Tuning, D::Error> {
        d.read_struct("Tuning", 5, |d| {
            Ok(Tuning {
                tap_radius: try!(d.read_struct_field("tap_radius", 0,
                    |d| Decodable::decode(d))),
                hold_delay: try!(d.read_struct_field("hold_delay", 1,
                    |d| Decodable::decode(d))),
                release_delay: try!(d.read_struct_field("release_delay", 2,
                    |d| Decodable::decode(d))),
                swipe_numer: try!(d.read_struct_field("swipe_numer", 3,
                    |d| Decodable::decode(d))),
                swipe_denom: try!(d.read_struct_field("swipe_denom", 4,
                    |d| Decodable::decode(d))),
            })
        })
    }
}
