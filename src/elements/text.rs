//! Localized text element.

use crate::host::TranslationSource;
use crate::i18n::{self, StyledRun, TranslateArg};

/// A text element bound to a translation key.
///
/// Resolution happens eagerly and again on demand (language switches).
/// A missing key shows the key itself, unstyled. The resolved runs carry
/// only the style attributes the scene's text renderer understands; the
/// lookup layer already dropped anything unrecognized.
pub struct TranslatedLabel {
    key: String,
    args: Vec<TranslateArg>,
    runs: Vec<StyledRun>,
}

impl TranslatedLabel {
    pub fn new(
        source: &dyn TranslationSource,
        key: impl Into<String>,
        args: Vec<TranslateArg>,
    ) -> Self {
        let mut label = Self {
            key: key.into(),
            args,
            runs: Vec::new(),
        };
        label.resolve(source);
        label
    }

    /// Re-resolves the key, e.g. after the host language changed.
    pub fn resolve(&mut self, source: &dyn TranslationSource) {
        self.runs = i18n::translate(source, &self.key, &self.args).into_runs();
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The styled runs the scene's text renderer should draw.
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// The label's text with styling stripped.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Rgb, RunStyle, StyleFlags, Translated};
    use crate::testutil::EmptyTranslations;

    struct RichSource;

    impl TranslationSource for RichSource {
        fn lookup(&self, key: &str, args: &[TranslateArg]) -> Option<Translated> {
            if key != "death.by" {
                return None;
            }
            let name = match args.first() {
                Some(TranslateArg::Text(name)) => name.clone(),
                _ => "?".to_string(),
            };
            Some(Translated::Rich(vec![
                StyledRun::plain("slain by "),
                StyledRun::styled(name, RunStyle::from_host(Some(Rgb(0xFF5555)), 0b0001)),
            ]))
        }
    }

    #[test]
    fn unknown_key_shows_key_verbatim_unstyled() {
        let label = TranslatedLabel::new(&EmptyTranslations, "gui.missing", vec![]);
        assert_eq!(label.runs(), &[StyledRun::plain("gui.missing")]);
        assert_eq!(label.text(), "gui.missing");
    }

    #[test]
    fn rich_translation_keeps_recognized_styles() {
        let label = TranslatedLabel::new(
            &RichSource,
            "death.by",
            vec![TranslateArg::Text("Steve".into())],
        );
        assert_eq!(label.text(), "slain by Steve");
        let styled = &label.runs()[1];
        assert_eq!(styled.style.color, Some(Rgb(0xFF5555)));
        assert_eq!(styled.style.flags, StyleFlags::BOLD);
    }

    #[test]
    fn resolve_picks_up_new_source() {
        let mut label = TranslatedLabel::new(&EmptyTranslations, "death.by", vec![]);
        assert_eq!(label.text(), "death.by");
        label.resolve(&RichSource);
        assert_eq!(label.text(), "slain by ?");
    }
}
