//! Chinese name romanization.
//!
//! # Responsibility
//! - Apply the surname override dictionary before generic romanization.
//! - Convert Chinese characters to tone-marked pinyin, passing other text
//!   through verbatim.
//!
//! # Invariants
//! - `transliterate("") == ""`.
//! - Text without Chinese characters is returned unchanged.
//! - A romanizer failure returns the original input, never an error.

use log::debug;
use once_cell::sync::Lazy;
use pinyin::ToPinyin;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Characters whose default reading is wrong or uncommon as a surname.
const NAME_OVERRIDE_ENTRIES: &[(&str, &str)] = &[
    ("曾", "zēng"),
    ("单", "shàn"),
    ("朴", "piáo"),
    ("区", "ōu"),
];

static NAME_OVERRIDES: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| NAME_OVERRIDE_ENTRIES.iter().copied().collect());

/// Returns the immutable override dictionary.
pub fn name_overrides() -> &'static BTreeMap<&'static str, &'static str> {
    &NAME_OVERRIDES
}

/// Romanization failure for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanizeError {
    /// A CJK ideograph has no known reading.
    UnknownReading(char),
}

impl Display for RomanizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownReading(ch) => {
                write!(f, "no pinyin reading for `{ch}` (U+{:04X})", u32::from(*ch))
            }
        }
    }
}

impl Error for RomanizeError {}

/// Generic Chinese-to-Latin transform.
pub trait Romanizer {
    fn romanize(&self, text: &str) -> Result<String, RomanizeError>;
}

/// Tone-marked pinyin romanizer.
///
/// Each syllable it produces is preceded by one space when the text before
/// it ends in a letter or digit; punctuation and whitespace are kept as-is.
/// Override syllables substituted earlier are plain Latin text to it, so
/// they are joined to neighbouring Latin text without a space
/// (`"曾曾"` -> `"zēngzēng"`, `"A曾"` -> `"Azēng"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn romanize(&self, text: &str) -> Result<String, RomanizeError> {
        let mut output = String::with_capacity(text.len() * 2);
        let mut after_syllable = false;

        for ch in text.chars() {
            if let Some(reading) = ch.to_pinyin() {
                if output.chars().next_back().is_some_and(char::is_alphanumeric) {
                    output.push(' ');
                }
                output.push_str(reading.with_tone());
                after_syllable = true;
                continue;
            }

            if is_cjk_ideograph(ch) {
                return Err(RomanizeError::UnknownReading(ch));
            }
            if after_syllable && ch.is_alphanumeric() {
                output.push(' ');
            }
            output.push(ch);
            after_syllable = false;
        }

        Ok(output)
    }
}

fn is_cjk_ideograph(ch: char) -> bool {
    matches!(
        ch as u32,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2EBEF
    )
}

/// Name transliterator: override dictionary, then a [`Romanizer`].
#[derive(Debug, Clone, Default)]
pub struct NameTransliterator<R: Romanizer = PinyinRomanizer> {
    romanizer: R,
}

impl NameTransliterator<PinyinRomanizer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Romanizer> NameTransliterator<R> {
    /// Uses a caller-provided romanizer for the generic step.
    pub fn with_romanizer(romanizer: R) -> Self {
        Self { romanizer }
    }

    /// Returns the romanized phonetic form of `name`.
    ///
    /// Falls back to `name` unchanged when the romanizer fails.
    pub fn transliterate(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        let mut substituted = name.to_string();
        for (key, syllable) in name_overrides() {
            if substituted.contains(key) {
                substituted = substituted.replace(key, syllable);
            }
        }

        match self.romanizer.romanize(&substituted) {
            Ok(romanized) => romanized,
            Err(err) => {
                debug!("event=transliterate module=service status=fallback error={err}");
                name.to_string()
            }
        }
    }
}
