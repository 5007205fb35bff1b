//! HID Usage ID to X68000 keycode table used while Fn is held with NUM
//! emulation enabled.
//!
//! Compact USB keyboards have no numeric keypad, so this layer overlays one on
//! the right-hand letter block, in the usual laptop arrangement:
//!
//! ```text
//!  7 8 9 0 -      KP 7  KP 8  KP 9  KP /  KP *
//!  U I O P   ==>  KP 4  KP 5  KP 6  KP -
//!  J K L ;        KP 1  KP 2  KP 3  KP +
//!  M , . /        KP 0  KP .  .     KP =
//! ```
//!
//! Letters outside that block, digits 1–6 and the modifiers keep their usual
//! keycodes.  Left-Ctrl and Right-GUI carry the Fn keycode so that a keyboard
//! model using this table can release the latch from inside the layer.

use super::KeyMap;

/// Builds the Fn + NUM table with `fn_keycode` at the Fn positions (0xE0 and
/// 0xE7).
///
/// Being a `const fn`, the table can be built at compile time for any Fn
/// keycode; [`TABLE`] is the instance for the default [`super::FN_KEYCODE`].
pub const fn table(fn_keycode: u8) -> KeyMap {
    KeyMap::from_table([
        0x00, 0x00, 0x00, 0x00,                          // 0x00..=0x03  unmapped
        0x1e,            // 0x04  KeyA            -> A
        0x2e,            // 0x05  KeyB            -> B
        0x2c,            // 0x06  KeyC            -> C
        0x20,            // 0x07  KeyD            -> D
        0x13,            // 0x08  KeyE            -> E
        0x21,            // 0x09  KeyF            -> F
        0x22,            // 0x0A  KeyG            -> G
        0x23,            // 0x0B  KeyH            -> H
        0x48,            // 0x0C  KeyI            -> KP 5
        0x4b,            // 0x0D  KeyJ            -> KP 1
        0x4c,            // 0x0E  KeyK            -> KP 2
        0x4d,            // 0x0F  KeyL            -> KP 3
        0x4f,            // 0x10  KeyM            -> KP 0
        0x2f,            // 0x11  KeyN            -> N
        0x49,            // 0x12  KeyO            -> KP 6
        0x42,            // 0x13  KeyP            -> KP -
        0x11,            // 0x14  KeyQ            -> Q
        0x14,            // 0x15  KeyR            -> R
        0x1f,            // 0x16  KeyS            -> S
        0x15,            // 0x17  KeyT            -> T
        0x47,            // 0x18  KeyU            -> KP 4
        0x2d,            // 0x19  KeyV            -> V
        0x12,            // 0x1A  KeyW            -> W
        0x2b,            // 0x1B  KeyX            -> X
        0x16,            // 0x1C  KeyY            -> Y
        0x2a,            // 0x1D  KeyZ            -> Z
        0x02,            // 0x1E  Digit1          -> 1
        0x03,            // 0x1F  Digit2          -> 2
        0x04,            // 0x20  Digit3          -> 3
        0x05,            // 0x21  Digit4          -> 4
        0x06,            // 0x22  Digit5          -> 5
        0x07,            // 0x23  Digit6          -> 6
        0x43,            // 0x24  Digit7          -> KP 7
        0x44,            // 0x25  Digit8          -> KP 8
        0x45,            // 0x26  Digit9          -> KP 9
        0x40,            // 0x27  Digit0          -> KP /
        0x1d,            // 0x28  Enter           -> RETURN
        0x01,            // 0x29  Escape          -> ESC
        0x0f,            // 0x2A  Backspace       -> BS
        0x10,            // 0x2B  Tab             -> TAB
        0x35,            // 0x2C  Space           -> SPACE
        0x41,            // 0x2D  Minus           -> KP *
        0x0d,            // 0x2E  Equal           -> ^
        0x1b,            // 0x2F  BracketLeft     -> @
        0x1c,            // 0x30  BracketRight    -> [
        0x00,            // 0x31  Backslash       -> unmapped
        0x29,            // 0x32  NonUsHash       -> ]
        0x46,            // 0x33  Semicolon       -> KP +
        0x28,            // 0x34  Quote           -> :
        0x60,            // 0x35  Backquote       -> ZENKAKU
        0x51,            // 0x36  Comma           -> KP .
        0x32,            // 0x37  Period          -> .
        0x4a,            // 0x38  Slash           -> KP =
        0x5d,            // 0x39  CapsLock        -> CAPS
        0x63,            // 0x3A  F1              -> F1
        0x64,            // 0x3B  F2              -> F2
        0x65,            // 0x3C  F3              -> F3
        0x66,            // 0x3D  F4              -> F4
        0x67,            // 0x3E  F5              -> F5
        0x68,            // 0x3F  F6              -> F6
        0x69,            // 0x40  F7              -> F7
        0x6a,            // 0x41  F8              -> F8
        0x6b,            // 0x42  F9              -> F9
        0x6c,            // 0x43  F10             -> F10
        0x5a,            // 0x44  F11             -> KANA
        0x5b,            // 0x45  F12             -> ROMAJI
        0x62,            // 0x46  PrintScreen     -> COPY
        0x54,            // 0x47  ScrollLock      -> HELP
        0x61,            // 0x48  Pause           -> BREAK
        0x5e,            // 0x49  Insert          -> INS
        0x36,            // 0x4A  Home            -> HOME
        0x39,            // 0x4B  PageUp          -> ROLL DOWN
        0x37,            // 0x4C  Delete          -> DEL
        0x3a,            // 0x4D  End             -> UNDO
        0x38,            // 0x4E  PageDown        -> ROLL UP
        0x3d,            // 0x4F  ArrowRight      -> RIGHT
        0x3b,            // 0x50  ArrowLeft       -> LEFT
        0x3e,            // 0x51  ArrowDown       -> DOWN
        0x3c,            // 0x52  ArrowUp         -> UP
        0x74,            // 0x53  NumLock         -> NUM
        0x5c,            // 0x54  NumpadDivide    -> CODE
        0x52,            // 0x55  NumpadMultiply  -> KIGOU
        0x53,            // 0x56  NumpadSubtract  -> TOUROKU
        0x4a,            // 0x57  NumpadAdd       -> KP =
        0x4e,            // 0x58  NumpadEnter     -> ENTER
        0x4b,            // 0x59  Numpad1         -> KP 1
        0x4c,            // 0x5A  Numpad2         -> KP 2
        0x4d,            // 0x5B  Numpad3         -> KP 3
        0x47,            // 0x5C  Numpad4         -> KP 4
        0x48,            // 0x5D  Numpad5         -> KP 5
        0x49,            // 0x5E  Numpad6         -> KP 6
        0x43,            // 0x5F  Numpad7         -> KP 7
        0x44,            // 0x60  Numpad8         -> KP 8
        0x45,            // 0x61  Numpad9         -> KP 9
        0x4f,            // 0x62  Numpad0         -> KP 0
        0x50,            // 0x63  NumpadDecimal   -> KP ,
        0x00,            // 0x64  NonUsBackslash  -> unmapped
        0x72,            // 0x65  ContextMenu     -> OPT.1
        0x00,            // 0x66  Power           -> unmapped
        0x4a,            // 0x67  NumpadEqual     -> KP =
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x68..=0x6F  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x70..=0x77  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x78..=0x7F  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00,                    // 0x80..=0x84  unmapped
        0x50,            // 0x85  NumpadComma     -> KP ,
        0x00,            // 0x86  unassigned      -> unmapped
        0x4e,            // 0x87  IntlRo          -> ENTER
        0x58,            // 0x88  KanaMode        -> XF4
        0x0e,            // 0x89  IntlYen         -> YEN
        0x57,            // 0x8A  Convert         -> XF3
        0x56,            // 0x8B  NonConvert      -> XF2
        0x00, 0x00, 0x00, 0x00,                          // 0x8C..=0x8F  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x90..=0x97  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x98..=0x9F  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xA0..=0xA7  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xA8..=0xAF  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xB0..=0xB7  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xB8..=0xBF  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xC0..=0xC7  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xC8..=0xCF  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xD0..=0xD7  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xD8..=0xDF  unmapped
        fn_keycode,      // 0xE0  ControlLeft     -> Fn
        0x70,            // 0xE1  ShiftLeft       -> SHIFT
        0x55,            // 0xE2  AltLeft         -> XF1
        0x5f,            // 0xE3  MetaLeft        -> HIRAGANA
        0x73,            // 0xE4  ControlRight    -> OPT.2
        0x70,            // 0xE5  ShiftRight      -> SHIFT
        0x59,            // 0xE6  AltRight        -> XF5
        fn_keycode,      // 0xE7  MetaRight       -> Fn
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xE8..=0xEF  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xF0..=0xF7  unmapped
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xF8..=0xFF  unmapped
    ])
}

/// The Fn + NUM table with the default Fn keycode.
pub const TABLE: KeyMap = table(super::FN_KEYCODE);
