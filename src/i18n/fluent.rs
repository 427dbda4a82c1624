// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles for the embedded translations.

use crate::config::{Config, ALTERNATE_LOCALE, DEFAULT_LOCALE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    default_locale: LanguageIdentifier,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            if let Some(bundle) = build_bundle(&locale, content.data.as_ref()) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale = default_locale();
        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(|| default_locale.clone());
        tracing::debug!(locale = %current_locale, "resolved UI locale");

        Self {
            bundles,
            available_locales,
            default_locale,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches between the default and the alternate locale and returns the
    /// newly active one.
    pub fn toggle_language(&mut self) -> &LanguageIdentifier {
        let target = if self.current_locale == self.default_locale {
            ALTERNATE_LOCALE.parse().ok()
        } else {
            Some(self.default_locale.clone())
        };
        if let Some(locale) = target {
            self.set_locale(locale);
        }
        &self.current_locale
    }

    /// Looks `key` up in the current locale, then the default locale. A key
    /// missing from both renders as itself.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(&self.current_locale, key)
            .or_else(|| self.lookup(&self.default_locale, key))
            .unwrap_or_else(|| key.to_string())
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn build_bundle(locale: &LanguageIdentifier, data: &[u8]) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).to_string();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            tracing::warn!(%locale, errors = errors.len(), "failed to parse translation file");
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Bidi isolation marks would show up as stray glyphs around arguments.
    bundle.set_use_isolating(false);
    if bundle.add_resource(resource).is_err() {
        tracing::warn!(%locale, "translation file has duplicate messages");
        return None;
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    system_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.general.language.clone(), system_locale];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "zh-CN".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("zh-CN".to_string()), &config, None, &available());
        assert_eq!(lang, Some("zh-CN".parse().unwrap()));
    }

    #[test]
    fn config_language_beats_system() {
        let mut config = Config::default();
        config.general.language = Some("zh-CN".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("zh-CN".parse().unwrap()));
    }

    #[test]
    fn unavailable_candidates_are_skipped() {
        let lang = resolve_locale(
            Some("fr".to_string()),
            &Config::default(),
            Some("zh-CN".to_string()),
            &available(),
        );
        assert_eq!(lang, Some("zh-CN".parse().unwrap()));
    }

    #[test]
    fn nothing_matches_returns_none() {
        let lang = resolve_locale(None, &Config::default(), Some("de-DE".to_string()), &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"zh-CN".parse().unwrap()));
        assert_eq!(i18n.tr("lightbox-link-to-artist"), "Link to Artist");
    }

    #[test]
    fn toggle_language_alternates() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.toggle_language().to_string(), "zh-CN");
        assert_eq!(i18n.tr("lightbox-link-to-artist"), "艺术家链接");
        assert_eq!(i18n.toggle_language().to_string(), "en-US");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let i18n = I18n::new(Some("zh-CN".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-message"), "no-such-message");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        i18n.set_locale("fr".parse().unwrap());
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }
}
