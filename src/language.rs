//! The fixed set of selectable languages.

use std::fmt::{Debug, Display, Formatter};

/// A selectable interface language. The set is closed and defined at
/// compile time; variants are never created or destroyed at runtime.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Sinhala,
    Tamil,
    English,
}

impl Language {
    /// All selectable languages, in presentation order.
    pub const ALL: [Language; 3] = [Language::Sinhala, Language::Tamil, Language::English];

    /// English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Sinhala => "Sinhala",
            Language::Tamil => "Tamil",
            Language::English => "English",
        }
    }

    /// The language's name written in its own script.
    pub fn local_name(&self) -> &'static str {
        match self {
            Language::Sinhala => "සිංහල",
            Language::Tamil => "தமிழ்",
            Language::English => "English",
        }
    }

    /// Logical key an asset provider resolves to a flag icon. The UI
    /// only carries the reference and never loads the asset.
    pub fn icon_key(&self) -> &'static str {
        match self {
            Language::Sinhala => "flag_sri_lanka",
            Language::Tamil => "flag_india",
            Language::English => "flag_uk",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Debug for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Language::{}", self.display_name())
    }
}

/// Receives the confirmed language choice.
///
/// A persistence layer can implement this to store the selection; the
/// notification is best-effort and the caller makes no durability
/// guarantee on its behalf.
pub trait LanguageConfirmedSink {
    fn on_language_confirmed(&mut self, language: Language);
}

/// Default sink: the choice is not stored anywhere yet.
#[derive(Debug, Default)]
pub struct NoopSink;

impl LanguageConfirmedSink for NoopSink {
    fn on_language_confirmed(&mut self, _language: Language) {}
}
