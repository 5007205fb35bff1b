//! X68000 keyboard keycodes.
//!
//! The X68000 keyboard sends one byte per key transition.  Bits 0–6 carry
//! the keycode (0x01–0x74); bit 7 is clear when the key goes down (*make*)
//! and set when it comes back up (*break*).  The constants below name every
//! keycode the translation tables produce.

pub const ESC: u8 = 0x01;
pub const DIGIT_1: u8 = 0x02;
pub const DIGIT_2: u8 = 0x03;
pub const DIGIT_3: u8 = 0x04;
pub const DIGIT_4: u8 = 0x05;
pub const DIGIT_5: u8 = 0x06;
pub const DIGIT_6: u8 = 0x07;
pub const DIGIT_7: u8 = 0x08;
pub const DIGIT_8: u8 = 0x09;
pub const DIGIT_9: u8 = 0x0a;
pub const DIGIT_0: u8 = 0x0b;
pub const MINUS: u8 = 0x0c;
pub const CARET: u8 = 0x0d;
pub const YEN: u8 = 0x0e;
pub const BS: u8 = 0x0f;
pub const TAB: u8 = 0x10;
pub const Q: u8 = 0x11;
pub const W: u8 = 0x12;
pub const E: u8 = 0x13;
pub const R: u8 = 0x14;
pub const T: u8 = 0x15;
pub const Y: u8 = 0x16;
pub const U: u8 = 0x17;
pub const I: u8 = 0x18;
pub const O: u8 = 0x19;
pub const P: u8 = 0x1a;
pub const AT: u8 = 0x1b;
pub const BRACKET_LEFT: u8 = 0x1c;
pub const RETURN: u8 = 0x1d;
pub const A: u8 = 0x1e;
pub const S: u8 = 0x1f;
pub const D: u8 = 0x20;
pub const F: u8 = 0x21;
pub const G: u8 = 0x22;
pub const H: u8 = 0x23;
pub const J: u8 = 0x24;
pub const K: u8 = 0x25;
pub const L: u8 = 0x26;
pub const SEMICOLON: u8 = 0x27;
pub const COLON: u8 = 0x28;
pub const BRACKET_RIGHT: u8 = 0x29;
pub const Z: u8 = 0x2a;
pub const X: u8 = 0x2b;
pub const C: u8 = 0x2c;
pub const V: u8 = 0x2d;
pub const B: u8 = 0x2e;
pub const N: u8 = 0x2f;
pub const M: u8 = 0x30;
pub const COMMA: u8 = 0x31;
pub const PERIOD: u8 = 0x32;
pub const SLASH: u8 = 0x33;
pub const UNDERSCORE: u8 = 0x34;
pub const SPACE: u8 = 0x35;
pub const HOME: u8 = 0x36;
pub const DEL: u8 = 0x37;
pub const ROLL_UP: u8 = 0x38;
pub const ROLL_DOWN: u8 = 0x39;
pub const UNDO: u8 = 0x3a;
pub const LEFT: u8 = 0x3b;
pub const UP: u8 = 0x3c;
pub const RIGHT: u8 = 0x3d;
pub const DOWN: u8 = 0x3e;
pub const CLR: u8 = 0x3f;
pub const KP_DIVIDE: u8 = 0x40;
pub const KP_MULTIPLY: u8 = 0x41;
pub const KP_SUBTRACT: u8 = 0x42;
pub const KP_7: u8 = 0x43;
pub const KP_8: u8 = 0x44;
pub const KP_9: u8 = 0x45;
pub const KP_ADD: u8 = 0x46;
pub const KP_4: u8 = 0x47;
pub const KP_5: u8 = 0x48;
pub const KP_6: u8 = 0x49;
pub const KP_EQUAL: u8 = 0x4a;
pub const KP_1: u8 = 0x4b;
pub const KP_2: u8 = 0x4c;
pub const KP_3: u8 = 0x4d;
/// Keypad ENTER.
pub const KP_ENTER: u8 = 0x4e;
pub const KP_0: u8 = 0x4f;
pub const KP_COMMA: u8 = 0x50;
pub const KP_DECIMAL: u8 = 0x51;
/// Symbol input (記号入力).
pub const KIGOU: u8 = 0x52;
/// Word registration (登録).
pub const TOUROKU: u8 = 0x53;
pub const HELP: u8 = 0x54;
pub const XF1: u8 = 0x55;
pub const XF2: u8 = 0x56;
pub const XF3: u8 = 0x57;
pub const XF4: u8 = 0x58;
pub const XF5: u8 = 0x59;
pub const KANA: u8 = 0x5a;
pub const ROMAJI: u8 = 0x5b;
/// Code input (コード入力).
pub const CODE: u8 = 0x5c;
pub const CAPS: u8 = 0x5d;
pub const INS: u8 = 0x5e;
pub const HIRAGANA: u8 = 0x5f;
pub const ZENKAKU: u8 = 0x60;
pub const BREAK: u8 = 0x61;
pub const COPY: u8 = 0x62;
pub const F1: u8 = 0x63;
pub const F2: u8 = 0x64;
pub const F3: u8 = 0x65;
pub const F4: u8 = 0x66;
pub const F5: u8 = 0x67;
pub const F6: u8 = 0x68;
pub const F7: u8 = 0x69;
pub const F8: u8 = 0x6a;
pub const F9: u8 = 0x6b;
pub const F10: u8 = 0x6c;
pub const SHIFT: u8 = 0x70;
pub const CTRL: u8 = 0x71;
pub const OPT1: u8 = 0x72;
pub const OPT2: u8 = 0x73;
/// Present on some models only.
pub const NUM: u8 = 0x74;

/// Bit set on a keycode to report a key release.
pub const BREAK_BIT: u8 = 0x80;

/// Returns the byte that reports `code` being pressed.
#[inline]
pub const fn make_code(code: u8) -> u8 {
    code & !BREAK_BIT
}

/// Returns the byte that reports `code` being released.
#[inline]
pub const fn break_code(code: u8) -> u8 {
    code | BREAK_BIT
}

/// Returns `true` if `byte` reports a key release.
#[inline]
pub const fn is_break(byte: u8) -> bool {
    byte & BREAK_BIT != 0
}

/// Returns the legend printed on the X68000 key for `code`.
///
/// The break bit is ignored.  Returns `None` for codes no key produces.
pub fn key_name(code: u8) -> Option<&'static str> {
    match make_code(code) {
        ESC => Some("ESC"),
        DIGIT_1 => Some("1"),
        DIGIT_2 => Some("2"),
        DIGIT_3 => Some("3"),
        DIGIT_4 => Some("4"),
        DIGIT_5 => Some("5"),
        DIGIT_6 => Some("6"),
        DIGIT_7 => Some("7"),
        DIGIT_8 => Some("8"),
        DIGIT_9 => Some("9"),
        DIGIT_0 => Some("0"),
        MINUS => Some("-"),
        CARET => Some("^"),
        YEN => Some("YEN"),
        BS => Some("BS"),
        TAB => Some("TAB"),
        Q => Some("Q"),
        W => Some("W"),
        E => Some("E"),
        R => Some("R"),
        T => Some("T"),
        Y => Some("Y"),
        U => Some("U"),
        I => Some("I"),
        O => Some("O"),
        P => Some("P"),
        AT => Some("@"),
        BRACKET_LEFT => Some("["),
        RETURN => Some("RETURN"),
        A => Some("A"),
        S => Some("S"),
        D => Some("D"),
        F => Some("F"),
        G => Some("G"),
        H => Some("H"),
        J => Some("J"),
        K => Some("K"),
        L => Some("L"),
        SEMICOLON => Some(";"),
        COLON => Some(":"),
        BRACKET_RIGHT => Some("]"),
        Z => Some("Z"),
        X => Some("X"),
        C => Some("C"),
        V => Some("V"),
        B => Some("B"),
        N => Some("N"),
        M => Some("M"),
        COMMA => Some(","),
        PERIOD => Some("."),
        SLASH => Some("/"),
        UNDERSCORE => Some("_"),
        SPACE => Some("SPACE"),
        HOME => Some("HOME"),
        DEL => Some("DEL"),
        ROLL_UP => Some("ROLL UP"),
        ROLL_DOWN => Some("ROLL DOWN"),
        UNDO => Some("UNDO"),
        LEFT => Some("LEFT"),
        UP => Some("UP"),
        RIGHT => Some("RIGHT"),
        DOWN => Some("DOWN"),
        CLR => Some("CLR"),
        KP_DIVIDE => Some("KP /"),
        KP_MULTIPLY => Some("KP *"),
        KP_SUBTRACT => Some("KP -"),
        KP_7 => Some("KP 7"),
        KP_8 => Some("KP 8"),
        KP_9 => Some("KP 9"),
        KP_ADD => Some("KP +"),
        KP_4 => Some("KP 4"),
        KP_5 => Some("KP 5"),
        KP_6 => Some("KP 6"),
        KP_EQUAL => Some("KP ="),
        KP_1 => Some("KP 1"),
        KP_2 => Some("KP 2"),
        KP_3 => Some("KP 3"),
        KP_ENTER => Some("ENTER"),
        KP_0 => Some("KP 0"),
        KP_COMMA => Some("KP ,"),
        KP_DECIMAL => Some("KP ."),
        KIGOU => Some("KIGOU"),
        TOUROKU => Some("TOUROKU"),
        HELP => Some("HELP"),
        XF1 => Some("XF1"),
        XF2 => Some("XF2"),
        XF3 => Some("XF3"),
        XF4 => Some("XF4"),
        XF5 => Some("XF5"),
        KANA => Some("KANA"),
        ROMAJI => Some("ROMAJI"),
        CODE => Some("CODE"),
        CAPS => Some("CAPS"),
        INS => Some("INS"),
        HIRAGANA => Some("HIRAGANA"),
        ZENKAKU => Some("ZENKAKU"),
        BREAK => Some("BREAK"),
        COPY => Some("COPY"),
        F1 => Some("F1"),
        F2 => Some("F2"),
        F3 => Some("F3"),
        F4 => Some("F4"),
        F5 => Some("F5"),
        F6 => Some("F6"),
        F7 => Some("F7"),
        F8 => Some("F8"),
        F9 => Some("F9"),
        F10 => Some("F10"),
        SHIFT => Some("SHIFT"),
        CTRL => Some("CTRL"),
        OPT1 => Some("OPT.1"),
        OPT2 => Some("OPT.2"),
        NUM => Some("NUM"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_code_sets_high_bit_and_make_code_clears_it() {
        assert_eq!(break_code(A), 0x9e);
        assert_eq!(make_code(break_code(A)), A);
        assert!(is_break(break_code(CTRL)));
        assert!(!is_break(CTRL));
    }

    #[test]
    fn test_key_name_ignores_break_bit() {
        assert_eq!(key_name(RETURN), Some("RETURN"));
        assert_eq!(key_name(break_code(RETURN)), Some("RETURN"));
    }

    #[test]
    fn test_key_name_covers_every_code_from_esc_to_num() {
        let named = (0x01..=0x74u8).filter(|&c| key_name(c).is_some()).count();
        // 0x6d..=0x6f are not assigned to any key.
        assert_eq!(named, 0x74 - 3);
        assert_eq!(key_name(0x6d), None);
        assert_eq!(key_name(0x00), None);
    }
}
