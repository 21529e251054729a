pub use num::rational::Ratio;
use num::integer::Integer;

// XXX: should be able to scale signed int by either signed or unsigned ratio
pub trait Scalable: Clone + Integer {
    /// Scale by an exact fraction, truncating toward zero.
    fn scale(&self, scale: Ratio<Self>) -> Self {
        (Ratio::from_integer(self.clone()) * scale).to_integer()
    }

    /// Scale by an exact fraction, rounding up. An integer compared
    /// against this is at least the fractional product, matching a
    /// `>= dim * frac` comparison done in floating point.
    fn scale_ceil(&self, scale: Ratio<Self>) -> Self {
        (Ratio::from_integer(self.clone()) * scale).ceil().to_integer()
    }
}

impl Scalable for u32 {}
impl Scalable for i32 {}
