use bitflags::bitflags;
use std::fmt;

/// One of the three lock indicator LEDs found on a keyboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Led {
    /// Scroll Lock
    Scroll,
    /// Num Lock
    Num,
    /// Caps Lock
    Caps,
}

impl Led {
    pub const ALL: [Led; 3] = [Led::Scroll, Led::Num, Led::Caps];

    /// Position of this LED in [`Led::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Led::Scroll => 0,
            Led::Num => 1,
            Led::Caps => 2,
        }
    }
}

impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Led::Scroll => "scroll",
            Led::Num => "num",
            Led::Caps => "caps",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// LED bits in native order, as read and written by the platform primitive.
    ///
    /// The named flags are the positions from `linux/kd.h`, which is also what the default
    /// [`Layout`](crate::Layout) assumes.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LedState: u8 {
        const SCROLL = 0x01;
        const NUM = 0x02;
        const CAPS = 0x04;
    }
}

bitflags! {
    /// LED bits in digital order: the LEDs read as a 3-bit binary number from left to right,
    /// independent of how the hardware numbers them.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Digital: u8 {
        const LEFT = 4;
        const MIDDLE = 2;
        const RIGHT = 1;
    }
}

impl Digital {
    /// Normalizes an arbitrary number into a digital state by reducing it modulo 8.
    ///
    /// ```
    /// use blinkenlights::Digital;
    /// assert_eq!(Digital::from_number(8), Digital::empty());
    /// assert_eq!(Digital::from_number(13), Digital::LEFT | Digital::RIGHT);
    /// ```
    pub fn from_number(number: u32) -> Digital {
        Digital::from_bits_truncate((number % 8) as u8)
    }
}

impl fmt::Display for Digital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03b}", self.bits())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_number_wraps() {
        for n in 0..32u32 {
            assert_eq!(u32::from(Digital::from_number(n).bits()), n % 8);
        }
        assert_eq!(Digital::from_number(u32::MAX), Digital::all());
    }

    #[test]
    fn digital_displays_as_binary() {
        assert_eq!(Digital::empty().to_string(), "000");
        assert_eq!((Digital::LEFT | Digital::RIGHT).to_string(), "101");
        assert_eq!(Digital::all().to_string(), "111");
    }
}
