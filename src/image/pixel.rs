//! RGBA pixel type with saturating color arithmetic.
//!
//! Arithmetic touches only the color channels and keeps the left operand's
//! alpha. Scaling truncates toward zero before clamping, so negative weights
//! clamp a channel to 0.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Largest value of [`Pixel::abs_diff_sum`]: three channels of 255.
pub const MAX_ABS_DIFF_SUM: u32 = 3 * 255;

/// Four-channel 8-bit pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
    pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
    pub const RED: Pixel = Pixel::rgb(255, 0, 0);
    pub const GREEN: Pixel = Pixel::rgb(0, 255, 0);
    pub const BLUE: Pixel = Pixel::rgb(0, 0, 255);

    /// Opaque pixel from color channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pixel with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalized color difference in `[0, 1]`; alpha is ignored.
    ///
    /// Returns the mean absolute per-channel difference divided by 255.
    #[inline]
    pub fn difference(&self, other: &Pixel) -> f32 {
        self.abs_diff_sum(other) as f32 / MAX_ABS_DIFF_SUM as f32
    }

    /// Sum of absolute color channel differences, at most [`MAX_ABS_DIFF_SUM`].
    #[inline]
    pub fn abs_diff_sum(&self, other: &Pixel) -> u32 {
        self.r.abs_diff(other.r) as u32
            + self.g.abs_diff(other.g) as u32
            + self.b.abs_diff(other.b) as u32
    }

    fn map_color(self, f: impl Fn(u8) -> i32) -> Self {
        Self {
            r: clamp_channel(f(self.r)),
            g: clamp_channel(f(self.g)),
            b: clamp_channel(f(self.b)),
            a: self.a,
        }
    }
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl AddAssign for Pixel {
    fn add_assign(&mut self, rhs: Pixel) {
        self.r = clamp_channel(self.r as i32 + rhs.r as i32);
        self.g = clamp_channel(self.g as i32 + rhs.g as i32);
        self.b = clamp_channel(self.b as i32 + rhs.b as i32);
    }
}

impl Add for Pixel {
    type Output = Pixel;

    fn add(mut self, rhs: Pixel) -> Pixel {
        self += rhs;
        self
    }
}

impl SubAssign for Pixel {
    fn sub_assign(&mut self, rhs: Pixel) {
        self.r = clamp_channel(self.r as i32 - rhs.r as i32);
        self.g = clamp_channel(self.g as i32 - rhs.g as i32);
        self.b = clamp_channel(self.b as i32 - rhs.b as i32);
    }
}

impl Sub for Pixel {
    type Output = Pixel;

    fn sub(mut self, rhs: Pixel) -> Pixel {
        self -= rhs;
        self
    }
}

impl MulAssign<f32> for Pixel {
    fn mul_assign(&mut self, scale: f32) {
        // `as i32` saturates and maps NaN to 0.
        *self = self.map_color(|c| (c as f32 * scale) as i32);
    }
}

impl Mul<f32> for Pixel {
    type Output = Pixel;

    fn mul(mut self, scale: f32) -> Pixel {
        self *= scale;
        self
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:>3}, {:>3}, {:>3}, {:>3})",
            self.r, self.g, self.b, self.a
        )
    }
}
