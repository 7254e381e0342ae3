//! Translation result model.
//!
//! A localization lookup yields either plain text or a sequence of styled
//! runs. Rendering applies only the style attributes modeled here; anything
//! else a future host ships is ignored, not an error.

use crate::host::TranslationSource;
use bitflags::bitflags;

/// A packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Resolves one of the host's 16 classic formatting color codes.
    pub fn from_code(code: u8) -> Option<Rgb> {
        let rgb = match code {
            0 => 0x000000,  // black
            1 => 0x0000AA,  // dark blue
            2 => 0x00AA00,  // dark green
            3 => 0x00AAAA,  // dark aqua
            4 => 0xAA0000,  // dark red
            5 => 0xAA00AA,  // dark purple
            6 => 0xFFAA00,  // gold
            7 => 0xAAAAAA,  // gray
            8 => 0x555555,  // dark gray
            9 => 0x5555FF,  // blue
            10 => 0x55FF55, // green
            11 => 0x55FFFF, // aqua
            12 => 0xFF5555, // red
            13 => 0xFF55FF, // light purple
            14 => 0xFFFF55, // yellow
            15 => 0xFFFFFF, // white
            _ => return None,
        };
        Some(Rgb(rgb))
    }
}

bitflags! {
    /// Recognized text style attributes.
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0001;
        const ITALIC        = 0b0010;
        const UNDERLINE     = 0b0100;
        const STRIKETHROUGH = 0b1000;
    }
}

/// Style attributes attached to a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStyle {
    pub color: Option<Rgb>,
    pub flags: StyleFlags,
}

impl RunStyle {
    pub const PLAIN: RunStyle = RunStyle { color: None, flags: StyleFlags::empty() };

    /// Builds a style from host-provided attribute bits. Unrecognized bits
    /// are dropped.
    pub fn from_host(color: Option<Rgb>, style_bits: u8) -> Self {
        Self {
            color,
            flags: StyleFlags::from_bits_truncate(style_bits),
        }
    }
}

/// One contiguous run of identically-styled text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub style: RunStyle,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: RunStyle::PLAIN }
    }

    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self { text: text.into(), style }
    }
}

/// Substitution arguments for a translation lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateArg {
    Text(String),
    Styled(StyledRun),
    Number(f64),
}

/// The result of a localization lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Translated {
    Plain(String),
    Rich(Vec<StyledRun>),
}

impl Translated {
    /// Flattens this result into styled runs; plain text becomes one
    /// unstyled run.
    pub fn into_runs(self) -> Vec<StyledRun> {
        match self {
            Translated::Plain(text) => vec![StyledRun::plain(text)],
            Translated::Rich(runs) => runs,
        }
    }

    /// The concatenated text content, styling stripped.
    pub fn to_plain(&self) -> String {
        match self {
            Translated::Plain(text) => text.clone(),
            Translated::Rich(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}

/// Resolves `key` with `args`, falling back to the key itself when no
/// translation exists.
pub fn translate(source: &dyn TranslationSource, key: &str, args: &[TranslateArg]) -> Translated {
    source
        .lookup(key, args)
        .unwrap_or_else(|| Translated::Plain(key.to_string()))
}

/// Resolves `key` with `args`, or `None` when no translation exists.
pub fn translate_or_none(
    source: &dyn TranslationSource,
    key: &str,
    args: &[TranslateArg],
) -> Option<Translated> {
    source.lookup(key, args)
}
