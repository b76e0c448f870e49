use std::ops::{Deref, DerefMut};

/// Channel value type. Decoded images keep channels within `0..=255`, but nothing stops an
/// intermediate value from leaving that range; clamping happens when a transform produces its
/// final output and when encoding.
pub type Channel = i32;

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, derive_more::From, derive_more::Into,
)]
#[repr(transparent)]
pub struct Rgb(pub [Channel; 3]);

impl Rgb {
    pub const CHANNELS: usize = 3;
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    #[inline(always)]
    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Rgb([red, green, blue])
    }

    /// A gray pixel with every channel set to `value`.
    #[inline(always)]
    pub const fn splat(value: Channel) -> Self {
        Rgb([value, value, value])
    }

    #[inline(always)]
    pub const fn red(self) -> Channel {
        self.0[0]
    }

    #[inline(always)]
    pub const fn green(self) -> Channel {
        self.0[1]
    }

    #[inline(always)]
    pub const fn blue(self) -> Channel {
        self.0[2]
    }

    /// Integer mean of the three channels, rounded towards negative infinity.
    #[inline]
    pub fn gray(self) -> i64 {
        (i64::from(self[0]) + i64::from(self[1]) + i64::from(self[2])).div_euclid(3)
    }

    /// Clamp every channel into `0..=255`.
    #[inline]
    pub fn clamped(self) -> Rgb {
        Rgb(self.0.map(|c| num_traits::clamp(c, 0, 255)))
    }
}

impl Deref for Rgb {
    type Target = [Channel];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Rgb {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(rgb: image::Rgb<u8>) -> Self {
        Rgb(rgb.0.map(Channel::from))
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(rgb: Rgb) -> Self {
        image::Rgb(rgb.clamped().0.map(|c| c as u8))
    }
}
