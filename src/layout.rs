//! Mapping between native LED bits and digital (left-to-right) order.

use crate::error::{Error, Result};
use crate::led::{Digital, Led, LedState};

/// Physical arrangement of the LEDs on a keyboard.
///
/// Two ordered lists describe it:
///
/// - `left_to_right`: the LEDs as they sit on the keyboard, from left to right.
/// - `bit_order`: the LEDs by native bit position, lowest first.
///
/// The default matches the common PC layout (Num, Caps, Scroll from the left) and the bit
/// positions of `linux/kd.h`. Keyboards with unusual LED positions can be described with
/// [`Layout::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLayout"))]
pub struct Layout {
    left_to_right: [Led; 3],
    bit_order: [Led; 3],
    /// Native bit of each LED, indexed by [`Led::index`].
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    masks: [LedState; 3],
}

impl Default for Layout {
    fn default() -> Self {
        Layout::from_orders(
            [Led::Num, Led::Caps, Led::Scroll],
            [Led::Scroll, Led::Num, Led::Caps],
        )
    }
}

impl Layout {
    /// Builds a layout, failing unless both lists name each LED exactly once.
    pub fn new(left_to_right: [Led; 3], bit_order: [Led; 3]) -> Result<Layout> {
        check_permutation("left_to_right", &left_to_right)?;
        check_permutation("bit_order", &bit_order)?;
        Ok(Layout::from_orders(left_to_right, bit_order))
    }

    // Both lists must already be permutations, so every mask gets assigned.
    fn from_orders(left_to_right: [Led; 3], bit_order: [Led; 3]) -> Layout {
        let mut masks = [LedState::empty(); 3];
        for (pos, led) in bit_order.iter().enumerate() {
            masks[led.index()] = LedState::from_bits_retain(1 << pos);
        }
        Layout {
            left_to_right,
            bit_order,
            masks,
        }
    }

    pub fn left_to_right(&self) -> [Led; 3] {
        self.left_to_right
    }

    pub fn bit_order(&self) -> [Led; 3] {
        self.bit_order
    }

    /// Returns the native bit of `led`.
    pub fn mask(&self, led: Led) -> LedState {
        self.masks[led.index()]
    }

    /// Translates a digital state into native bits.
    pub fn to_native(&self, digital: Digital) -> LedState {
        self.left_to_right
            .iter()
            .zip(Self::weights())
            .filter(|&(_, weight)| digital.contains(weight))
            .fold(LedState::empty(), |acc, (&led, _)| acc | self.mask(led))
    }

    /// Translates native bits into a digital state.
    pub fn to_digital(&self, native: LedState) -> Digital {
        self.left_to_right
            .iter()
            .zip(Self::weights())
            .filter(|&(&led, _)| native.contains(self.mask(led)))
            .fold(Digital::empty(), |acc, (_, weight)| acc | weight)
    }

    fn weights() -> [Digital; 3] {
        [Digital::LEFT, Digital::MIDDLE, Digital::RIGHT]
    }
}

fn check_permutation(name: &str, leds: &[Led; 3]) -> Result<()> {
    for led in Led::ALL {
        if !leds.contains(&led) {
            return Err(Error::InvalidLayout(format!(
                "{name} {leds:?} does not contain the {led} LED"
            )));
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLayout {
    left_to_right: [Led; 3],
    bit_order: [Led; 3],
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for Layout {
    type Error = Error;

    fn try_from(raw: RawLayout) -> Result<Layout> {
        Layout::new(raw.left_to_right, raw.bit_order)
    }
}
