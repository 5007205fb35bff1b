//! Keyboard models and the table pair each one uses.
//!
//! A model is chosen once at startup (from the configuration file) and
//! decides which [`KeyMap`] is read normally and which one is read while the
//! Fn latch is active.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keymap::{num_fn, KeyMap};

/// Errors raised when resolving a keyboard model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The name does not match any supported model.
    #[error("unknown keyboard model: {0:?} (expected one of: zui_key, zui_key_num_fn, num_fn)")]
    UnknownModel(String),
}

/// Supported physical keyboard layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardModel {
    /// The X68000 Z bundled keyboard, no Fn layer.
    #[default]
    ZuiKey,
    /// Zuikey layout with the Fn + NUM layer on Left-Ctrl / Right-GUI.
    ZuiKeyNumFn,
    /// Compact keyboards that use the Fn + NUM table for both layers.
    NumFn,
}

/// The two tables a model translates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TablePair {
    /// Read while the Fn latch is released.
    pub primary: KeyMap,
    /// Read while the Fn latch is held.
    pub alternate: KeyMap,
}

impl TablePair {
    /// Returns `true` if either table maps `usage` to `fn_keycode`.
    ///
    /// Such a key drives the Fn latch instead of being sent to the host.
    pub fn is_fn_key(&self, usage: u8, fn_keycode: u8) -> bool {
        self.primary.maps_to(usage, fn_keycode) || self.alternate.maps_to(usage, fn_keycode)
    }

    /// Returns `true` if the pair has a reachable alternate layer.
    pub fn has_fn_layer(&self, fn_keycode: u8) -> bool {
        (0..=255u8).any(|usage| self.is_fn_key(usage, fn_keycode))
    }
}

impl KeyboardModel {
    /// Every supported model, in declaration order.
    pub const ALL: [KeyboardModel; 3] = [
        KeyboardModel::ZuiKey,
        KeyboardModel::ZuiKeyNumFn,
        KeyboardModel::NumFn,
    ];

    /// Builds the table pair for this model with `fn_keycode` at the Fn
    /// positions.
    pub fn tables(self, fn_keycode: u8) -> TablePair {
        match self {
            KeyboardModel::ZuiKey => TablePair {
                primary: KeyMap::ZUIKEY,
                alternate: KeyMap::ZUIKEY,
            },
            KeyboardModel::ZuiKeyNumFn => TablePair {
                primary: KeyMap::ZUIKEY,
                alternate: num_fn::table(fn_keycode),
            },
            KeyboardModel::NumFn => {
                let table = num_fn::table(fn_keycode);
                TablePair {
                    primary: table,
                    alternate: table,
                }
            }
        }
    }

    /// The name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyboardModel::ZuiKey => "zui_key",
            KeyboardModel::ZuiKeyNumFn => "zui_key_num_fn",
            KeyboardModel::NumFn => "num_fn",
        }
    }
}

impl fmt::Display for KeyboardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyboardModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyboardModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}
