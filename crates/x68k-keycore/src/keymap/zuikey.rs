//! HID Usage ID to X68000 keycode table for the keyboard bundled with the
//! X68000 Z Early Access Kit ("zuikey" layout).
//!
//! Keys the X68000 has but a Japanese 109-key USB keyboard lacks are placed on
//! physical keys that have no X68000 counterpart:
//!
//! | USB key        | X68000 key |
//! |----------------|------------|
//! | F11 / F12      | OPT.1 / OPT.2 |
//! | PrintScreen    | KANA       |
//! | ScrollLock     | ROMAJI     |
//! | Pause          | CODE       |
//! | PageUp/PageDown| ROLL UP / ROLL DOWN |
//! | End            | UNDO       |
//! | NumLock        | CLR        |
//! | ContextMenu    | COPY       |
//!
//! The table carries no Fn entry: with this layout every physical key sends a
//! real X68000 key.

use super::KeyMap;

/// The zuikey layout table.
pub const TABLE: KeyMap = KeyMap::from_table([
    0x00, 0x00, 0x00, 0x00,                          // 0x00..=0x03  unmapped
    0x1e,            // 0x04  KeyA            -> A
    0x2e,            // 0x05  KeyB            -> B
    0x2c,            // 0x06  KeyC            -> C
    0x20,            // 0x07  KeyD            -> D
    0x13,            // 0x08  KeyE            -> E
    0x21,            // 0x09  KeyF            -> F
    0x22,            // 0x0A  KeyG            -> G
    0x23,            // 0x0B  KeyH            -> H
    0x18,            // 0x0C  KeyI            -> I
    0x24,            // 0x0D  KeyJ            -> J
    0x25,            // 0x0E  KeyK            -> K
    0x26,            // 0x0F  KeyL            -> L
    0x30,            // 0x10  KeyM            -> M
    0x2f,            // 0x11  KeyN            -> N
    0x19,            // 0x12  KeyO            -> O
    0x1a,            // 0x13  KeyP            -> P
    0x11,            // 0x14  KeyQ            -> Q
    0x14,            // 0x15  KeyR            -> R
    0x1f,            // 0x16  KeyS            -> S
    0x15,            // 0x17  KeyT            -> T
    0x17,            // 0x18  KeyU            -> U
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
    0x08,            // 0x24  Digit7          -> 7
    0x09,            // 0x25  Digit8          -> 8
    0x0a,            // 0x26  Digit9          -> 9
    0x0b,            // 0x27  Digit0          -> 0
    0x1d,            // 0x28  Enter           -> RETURN
    0x01,            // 0x29  Escape          -> ESC
    0x0f,            // 0x2A  Backspace       -> BS
    0x10,            // 0x2B  Tab             -> TAB
    0x35,            // 0x2C  Space           -> SPACE
    0x0c,            // 0x2D  Minus           -> -
    0x0d,            // 0x2E  Equal           -> ^
    0x1b,            // 0x2F  BracketLeft     -> @
    0x1c,            // 0x30  BracketRight    -> [
    0x00,            // 0x31  Backslash       -> unmapped
    0x29,            // 0x32  NonUsHash       -> ]
    0x27,            // 0x33  Semicolon       -> ;
    0x28,            // 0x34  Quote           -> :
    0x61,            // 0x35  Backquote       -> BREAK
    0x31,            // 0x36  Comma           -> ,
    0x32,            // 0x37  Period          -> .
    0x33,            // 0x38  Slash           -> /
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
    0x72,            // 0x44  F11             -> OPT.1
    0x73,            // 0x45  F12             -> OPT.2
    0x5a,            // 0x46  PrintScreen     -> KANA
    0x5b,            // 0x47  ScrollLock      -> ROMAJI
    0x5c,            // 0x48  Pause           -> CODE
    0x5e,            // 0x49  Insert          -> INS
    0x36,            // 0x4A  Home            -> HOME
    0x38,            // 0x4B  PageUp          -> ROLL UP
    0x37,            // 0x4C  Delete          -> DEL
    0x3a,            // 0x4D  End             -> UNDO
    0x39,            // 0x4E  PageDown        -> ROLL DOWN
    0x3d,            // 0x4F  ArrowRight      -> RIGHT
    0x3b,            // 0x50  ArrowLeft       -> LEFT
    0x3e,            // 0x51  ArrowDown       -> DOWN
    0x3c,            // 0x52  ArrowUp         -> UP
    0x3f,            // 0x53  NumLock         -> CLR
    0x40,            // 0x54  NumpadDivide    -> KP /
    0x41,            // 0x55  NumpadMultiply  -> KP *
    0x42,            // 0x56  NumpadSubtract  -> KP -
    0x46,            // 0x57  NumpadAdd       -> KP +
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
    0x51,            // 0x63  NumpadDecimal   -> KP .
    0x00,            // 0x64  NonUsBackslash  -> unmapped
    0x62,            // 0x65  ContextMenu     -> COPY
    0x00,            // 0x66  Power           -> unmapped
    0x4a,            // 0x67  NumpadEqual     -> KP =
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x68..=0x6F  unmapped
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0x70..=0x77  unmapped
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,        // 0x78..=0x7E  unmapped
    0x52,            // 0x7F  Mute            -> KIGOU
    0x54,            // 0x80  VolumeUp        -> HELP
    0x53,            // 0x81  VolumeDown      -> TOUROKU
    0x00, 0x00, 0x00,                                // 0x82..=0x84  unmapped
    0x50,            // 0x85  NumpadComma     -> KP ,
    0x00,            // 0x86  unassigned      -> unmapped
    0x34,            // 0x87  IntlRo          -> _
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
    0x71,            // 0xE0  ControlLeft     -> CTRL
    0x70,            // 0xE1  ShiftLeft       -> SHIFT
    0x55,            // 0xE2  AltLeft         -> XF1
    0x5f,            // 0xE3  MetaLeft        -> HIRAGANA
    0x71,            // 0xE4  ControlRight    -> CTRL
    0x70,            // 0xE5  ShiftRight      -> SHIFT
    0x59,            // 0xE6  AltRight        -> XF5
    0x60,            // 0xE7  MetaRight       -> ZENKAKU
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xE8..=0xEF  unmapped
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xF0..=0xF7  unmapped
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,  // 0xF8..=0xFF  unmapped
]);
