//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! The translation tables are indexed by raw `u8` Usage IDs; this enum gives
//! the interesting ones a name for tests, logging and report decoding.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a number to every
//! key *position* on a keyboard:
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Enter        | 0x28        |
//! | Yen (¥)      | 0x89        |
//! | Left Ctrl    | 0xE0        |
//!
//! The numbers describe where a key sits, not which character it prints, so
//! a Japanese keyboard reports its `@` key (right of `P`) as `BracketLeft`
//! (0x2F) just like a US keyboard reports `[` there.  The X68000 tables rely
//! on this: they are written against key positions of a JIS layout.
//!
//! # Modifier keys
//!
//! The eight modifiers (0xE0–0xE7) never appear in the key slots of a boot
//! keyboard report.  They are sent as a bitmap instead, bit *n* standing for
//! Usage ID `0xE0 + n`; see [`HidKeyCode::from_modifier_bit`].

use serde::{Deserialize, Serialize};

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID.
/// [`HidKeyCode::Unknown`] represents any value without a named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control and punctuation keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    /// `]` on JIS keyboards.
    NonUsHash = 0x32,
    Semicolon = 0x33,
    Quote = 0x34,
    /// Hankaku/Zenkaku on JIS keyboards.
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63, 0x67, 0x85)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,
    NonUsBackslash = 0x64,
    ContextMenu = 0x65,
    Power = 0x66,
    NumpadEqual = 0x67,

    // Consumer keys some keyboards report on the keyboard page
    Mute = 0x7F,
    VolumeUp = 0x80,
    VolumeDown = 0x81,

    NumpadComma = 0x85,

    // Japanese keys (International1–5)
    /// `\ _` (Ro) key.
    IntlRo = 0x87,
    /// Katakana/Hiragana key.
    KanaMode = 0x88,
    /// `¥ |` key.
    IntlYen = 0x89,
    /// Henkan key.
    Convert = 0x8A,
    /// Muhenkan key.
    NonConvert = 0x8B,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    /// Sentinel for Usage IDs without a named variant (also 0x00, "no key").
    Unknown = 0x00,
}

/// Modifier keys in boot-report bit order (bit 0 = Left Ctrl).
const MODIFIERS: [HidKeyCode; 8] = [
    HidKeyCode::ControlLeft,
    HidKeyCode::ShiftLeft,
    HidKeyCode::AltLeft,
    HidKeyCode::MetaLeft,
    HidKeyCode::ControlRight,
    HidKeyCode::ShiftRight,
    HidKeyCode::AltRight,
    HidKeyCode::MetaRight,
];

impl HidKeyCode {
    /// Converts a raw Usage ID to a [`HidKeyCode`].
    ///
    /// Returns [`HidKeyCode::Unknown`] if the value has no named variant.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x04 => HidKeyCode::KeyA,
            0x05 => HidKeyCode::KeyB,
            0x06 => HidKeyCode::KeyC,
            0x07 => HidKeyCode::KeyD,
            0x08 => HidKeyCode::KeyE,
            0x09 => HidKeyCode::KeyF,
            0x0A => HidKeyCode::KeyG,
            0x0B => HidKeyCode::KeyH,
            0x0C => HidKeyCode::KeyI,
            0x0D => HidKeyCode::KeyJ,
            0x0E => HidKeyCode::KeyK,
            0x0F => HidKeyCode::KeyL,
            0x10 => HidKeyCode::KeyM,
            0x11 => HidKeyCode::KeyN,
            0x12 => HidKeyCode::KeyO,
            0x13 => HidKeyCode::KeyP,
            0x14 => HidKeyCode::KeyQ,
            0x15 => HidKeyCode::KeyR,
            0x16 => HidKeyCode::KeyS,
            0x17 => HidKeyCode::KeyT,
            0x18 => HidKeyCode::KeyU,
            0x19 => HidKeyCode::KeyV,
            0x1A => HidKeyCode::KeyW,
            0x1B => HidKeyCode::KeyX,
            0x1C => HidKeyCode::KeyY,
            0x1D => HidKeyCode::KeyZ,
            0x1E => HidKeyCode::Digit1,
            0x1F => HidKeyCode::Digit2,
            0x20 => HidKeyCode::Digit3,
            0x21 => HidKeyCode::Digit4,
            0x22 => HidKeyCode::Digit5,
            0x23 => HidKeyCode::Digit6,
            0x24 => HidKeyCode::Digit7,
            0x25 => HidKeyCode::Digit8,
            0x26 => HidKeyCode::Digit9,
            0x27 => HidKeyCode::Digit0,
            0x28 => HidKeyCode::Enter,
            0x29 => HidKeyCode::Escape,
            0x2A => HidKeyCode::Backspace,
            0x2B => HidKeyCode::Tab,
            0x2C => HidKeyCode::Space,
            0x2D => HidKeyCode::Minus,
            0x2E => HidKeyCode::Equal,
            0x2F => HidKeyCode::BracketLeft,
            0x30 => HidKeyCode::BracketRight,
            0x31 => HidKeyCode::Backslash,
            0x32 => HidKeyCode::NonUsHash,
            0x33 => HidKeyCode::Semicolon,
            0x34 => HidKeyCode::Quote,
            0x35 => HidKeyCode::Backquote,
            0x36 => HidKeyCode::Comma,
            0x37 => HidKeyCode::Period,
            0x38 => HidKeyCode::Slash,
            0x39 => HidKeyCode::CapsLock,
            0x3A => HidKeyCode::F1,
            0x3B => HidKeyCode::F2,
            0x3C => HidKeyCode::F3,
            0x3D => HidKeyCode::F4,
            0x3E => HidKeyCode::F5,
            0x3F => HidKeyCode::F6,
            0x40 => HidKeyCode::F7,
            0x41 => HidKeyCode::F8,
            0x42 => HidKeyCode::F9,
            0x43 => HidKeyCode::F10,
            0x44 => HidKeyCode::F11,
            0x45 => HidKeyCode::F12,
            0x46 => HidKeyCode::PrintScreen,
            0x47 => HidKeyCode::ScrollLock,
            0x48 => HidKeyCode::Pause,
            0x49 => HidKeyCode::Insert,
            0x4A => HidKeyCode::Home,
            0x4B => HidKeyCode::PageUp,
            0x4C => HidKeyCode::Delete,
            0x4D => HidKeyCode::End,
            0x4E => HidKeyCode::PageDown,
            0x4F => HidKeyCode::ArrowRight,
            0x50 => HidKeyCode::ArrowLeft,
            0x51 => HidKeyCode::ArrowDown,
            0x52 => HidKeyCode::ArrowUp,
            0x53 => HidKeyCode::NumLock,
            0x54 => HidKeyCode::NumpadDivide,
            0x55 => HidKeyCode::NumpadMultiply,
            0x56 => HidKeyCode::NumpadSubtract,
            0x57 => HidKeyCode::NumpadAdd,
            0x58 => HidKeyCode::NumpadEnter,
            0x59 => HidKeyCode::Numpad1,
            0x5A => HidKeyCode::Numpad2,
            0x5B => HidKeyCode::Numpad3,
            0x5C => HidKeyCode::Numpad4,
            0x5D => HidKeyCode::Numpad5,
            0x5E => HidKeyCode::Numpad6,
            0x5F => HidKeyCode::Numpad7,
            0x60 => HidKeyCode::Numpad8,
            0x61 => HidKeyCode::Numpad9,
            0x62 => HidKeyCode::Numpad0,
            0x63 => HidKeyCode::NumpadDecimal,
            0x64 => HidKeyCode::NonUsBackslash,
            0x65 => HidKeyCode::ContextMenu,
            0x66 => HidKeyCode::Power,
            0x67 => HidKeyCode::NumpadEqual,
            0x7F => HidKeyCode::Mute,
            0x80 => HidKeyCode::VolumeUp,
            0x81 => HidKeyCode::VolumeDown,
            0x85 => HidKeyCode::NumpadComma,
            0x87 => HidKeyCode::IntlRo,
            0x88 => HidKeyCode::KanaMode,
            0x89 => HidKeyCode::IntlYen,
            0x8A => HidKeyCode::Convert,
            0x8B => HidKeyCode::NonConvert,
            0xE0 => HidKeyCode::ControlLeft,
            0xE1 => HidKeyCode::ShiftLeft,
            0xE2 => HidKeyCode::AltLeft,
            0xE3 => HidKeyCode::MetaLeft,
            0xE4 => HidKeyCode::ControlRight,
            0xE5 => HidKeyCode::ShiftRight,
            0xE6 => HidKeyCode::AltRight,
            0xE7 => HidKeyCode::MetaRight,
            _ => HidKeyCode::Unknown,
        }
    }

    /// Returns the raw USB HID Usage ID for this key.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is one of the eight modifier keys.
    pub fn is_modifier(self) -> bool {
        (0xE0..=0xE7).contains(&self.as_u8())
    }

    /// Returns the modifier key reported by bit `bit` (0–7) of a boot report's
    /// modifier byte, or `None` for an out-of-range bit.
    pub fn from_modifier_bit(bit: u8) -> Option<Self> {
        MODIFIERS.get(usize::from(bit)).copied()
    }

    /// Returns the boot-report modifier bit for a modifier key.
    pub fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(self.as_u8() - 0xE0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Named keys paired with their raw Usage IDs.
    const STANDARD_KEYS: &[(u8, HidKeyCode)] = &[
        (0x04, HidKeyCode::KeyA),
        (0x1D, HidKeyCode::KeyZ),
        (0x1E, HidKeyCode::Digit1),
        (0x27, HidKeyCode::Digit0),
        (0x28, HidKeyCode::Enter),
        (0x29, HidKeyCode::Escape),
        (0x2C, HidKeyCode::Space),
        (0x32, HidKeyCode::NonUsHash),
        (0x35, HidKeyCode::Backquote),
        (0x39, HidKeyCode::CapsLock),
        (0x3A, HidKeyCode::F1),
        (0x45, HidKeyCode::F12),
        (0x48, HidKeyCode::Pause),
        (0x53, HidKeyCode::NumLock),
        (0x63, HidKeyCode::NumpadDecimal),
        (0x67, HidKeyCode::NumpadEqual),
        (0x85, HidKeyCode::NumpadComma),
        (0x87, HidKeyCode::IntlRo),
        (0x88, HidKeyCode::KanaMode),
        (0x89, HidKeyCode::IntlYen),
        (0x8A, HidKeyCode::Convert),
        (0x8B, HidKeyCode::NonConvert),
        (0xE0, HidKeyCode::ControlLeft),
        (0xE7, HidKeyCode::MetaRight),
    ];

    #[test]
    fn test_from_u8_produces_correct_key_codes() {
        for &(raw, expected) in STANDARD_KEYS {
            assert_eq!(
                HidKeyCode::from_u8(raw),
                expected,
                "from_u8(0x{raw:02X}) should produce {expected:?}"
            );
        }
    }

    #[test]
    fn test_every_named_variant_round_trips_through_u8() {
        for raw in 0..=255u8 {
            let code = HidKeyCode::from_u8(raw);
            if code != HidKeyCode::Unknown {
                assert_eq!(code.as_u8(), raw, "{code:?} should report 0x{raw:02X}");
            }
        }
    }

    #[test]
    fn test_unassigned_values_return_unknown() {
        for unassigned in [0x00u8, 0x01, 0x02, 0x03, 0x68, 0x86, 0xA0, 0xE8, 0xFF] {
            assert_eq!(
                HidKeyCode::from_u8(unassigned),
                HidKeyCode::Unknown,
                "0x{unassigned:02X} should map to Unknown"
            );
        }
    }

    #[test]
    fn test_modifier_bits_cover_e0_to_e7_in_order() {
        for bit in 0..8u8 {
            // Arrange / Act
            let key = HidKeyCode::from_modifier_bit(bit).expect("bits 0-7 are modifiers");

            // Assert
            assert_eq!(key.as_u8(), 0xE0 + bit);
            assert!(key.is_modifier());
            assert_eq!(key.modifier_bit(), Some(bit));
        }
        assert_eq!(HidKeyCode::from_modifier_bit(8), None);
    }

    #[test]
    fn test_non_modifier_keys_are_not_identified_as_modifiers() {
        for k in [
            HidKeyCode::KeyA,
            HidKeyCode::Enter,
            HidKeyCode::NumLock,
            HidKeyCode::KanaMode,
            HidKeyCode::Unknown,
        ] {
            assert!(!k.is_modifier(), "{k:?} should NOT be a modifier key");
            assert_eq!(k.modifier_bit(), None);
        }
    }
}
