use crate::i18n::{Translated, TranslateArg};

/// The host's text-localization lookup.
///
/// `None` means the key has no translation in the active language; the
/// bridge then shows the key verbatim.
pub trait TranslationSource: Send + Sync {
    fn lookup(&self, key: &str, args: &[TranslateArg]) -> Option<Translated>;
}
