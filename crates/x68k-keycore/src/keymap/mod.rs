//! Key code translation from USB HID Usage IDs to X68000 keycodes.
//!
//! Every supported keyboard layout is a dense 256-entry table indexed
//! directly by the HID Usage ID (page 0x07).  Each entry is the X68000
//! keycode to send, or `0x00` when the key has no mapping.
//!
//! # Fn keycode
//!
//! The X68000 has no Fn key.  The tables still reserve one keycode,
//! [`FN_KEYCODE`], to mark the physical keys that toggle the alternate table.
//! It defaults to `0x75` and can be changed at build time by setting the
//! `X68K_FN_KEYCODE` environment variable (decimal or `0x`-prefixed hex) when
//! compiling this crate.  Callers that need a different value at runtime
//! build their tables with [`num_fn::table`] instead of using the constants.

use std::fmt;

pub mod hid;
pub mod num_fn;
pub mod x68k;
pub mod zuikey;

pub use hid::HidKeyCode;

/// Fn keycode used when `X68K_FN_KEYCODE` is not set at build time.
pub const DEFAULT_FN_KEYCODE: u8 = 0x75;

/// The keycode the tables use to mark an Fn key.
pub const FN_KEYCODE: u8 = match option_env!("X68K_FN_KEYCODE") {
    Some(value) => parse_keycode(value),
    None => DEFAULT_FN_KEYCODE,
};

/// Number of entries in every [`KeyMap`].
pub const TABLE_LEN: usize = 256;

/// An immutable HID Usage ID to X68000 keycode table.
///
/// Values are fixed when the table is built and never change afterwards, so a
/// `KeyMap` can be read from any context without synchronisation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyMap([u8; TABLE_LEN]);

impl KeyMap {
    /// The X68000 Z bundled keyboard layout.
    pub const ZUIKEY: KeyMap = zuikey::TABLE;

    /// The Fn + NUM layer with the build-time [`FN_KEYCODE`].
    pub const NUM_FN: KeyMap = num_fn::TABLE;

    /// Wraps raw table data.
    pub const fn from_table(table: [u8; TABLE_LEN]) -> Self {
        Self(table)
    }

    /// Returns the keycode for `usage`, `0x00` if unmapped.
    #[inline]
    pub const fn get(&self, usage: u8) -> u8 {
        self.0[usage as usize]
    }

    /// Returns the raw table data.
    pub fn as_bytes(&self) -> &[u8; TABLE_LEN] {
        &self.0
    }

    /// Iterates over the usage IDs that map to `keycode`, in ascending order.
    pub fn positions_of(&self, keycode: u8) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(move |&(_, &code)| code == keycode)
            .map(|(usage, _)| usage as u8)
    }

    /// Returns `true` if `usage` translates to `keycode`.
    #[inline]
    pub fn maps_to(&self, usage: u8, keycode: u8) -> bool {
        self.get(usage) == keycode
    }

    /// Number of usage IDs that have a mapping.
    pub fn mapped_count(&self) -> usize {
        self.0.iter().filter(|&&code| code != 0).count()
    }
}

impl fmt::Debug for KeyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMap")
            .field("mapped", &self.mapped_count())
            .finish_non_exhaustive()
    }
}

/// Translates a HID Usage ID into an X68000 keycode.
///
/// Reads `alt_table` when `modifier_active` is set and `table` otherwise.
/// Returns `0x00` for unmapped keys; an unmapped key and a key deliberately
/// mapped to silence are indistinguishable.
///
/// This is a plain lookup: the Fn key itself is not special-cased, it simply
/// translates to whatever its table entry holds (usually [`FN_KEYCODE`]).
#[inline]
pub const fn translate(usage: u8, modifier_active: bool, table: &KeyMap, alt_table: &KeyMap) -> u8 {
    if modifier_active {
        alt_table.get(usage)
    } else {
        table.get(usage)
    }
}

/// Parses a keycode given as decimal or `0x`-prefixed hexadecimal.
///
/// Used in const context; an invalid value aborts compilation.
const fn parse_keycode(text: &str) -> u8 {
    let bytes = text.as_bytes();
    let (radix, mut i) = if bytes.len() > 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        (16u32, 2usize)
    } else {
        (10u32, 0usize)
    };
    assert!(i < bytes.len(), "X68K_FN_KEYCODE is empty");

    let mut value: u32 = 0;
    while i < bytes.len() {
        let digit = match bytes[i] {
            b'0'..=b'9' => (bytes[i] - b'0') as u32,
            b'a'..=b'f' if radix == 16 => (bytes[i] - b'a' + 10) as u32,
            b'A'..=b'F' if radix == 16 => (bytes[i] - b'A' + 10) as u32,
            _ => panic!("X68K_FN_KEYCODE contains an invalid digit"),
        };
        value = value * radix + digit;
        assert!(value <= 0xFF, "X68K_FN_KEYCODE does not fit in a byte");
        i += 1;
    }
    assert!(value != 0, "X68K_FN_KEYCODE must not be 0x00 (reserved for unmapped keys)");
    value as u8
}
