//! Raw console ioctls from `linux/kd.h`.
//!
//! These predate the `_IOR`/`_IOW` encoding scheme, so they are declared with nix's `*_bad!`
//! macros using the literal request numbers.

use nix::{ioctl_read_bad, ioctl_write_int_bad};

/// Return current LED state.
pub const KDGETLED: u32 = 0x4B31;
/// Set LED state (lights, not flags).
pub const KDSETLED: u32 = 0x4B32;

ioctl_read_bad!(kdgetled, KDGETLED, u8);
ioctl_write_int_bad!(kdsetled, KDSETLED);
