//! Locale name handling for translated key lookups.
//!
//! Translated values are stored as `Key[locale]=Value`. A lookup walks the
//! caller's language list from most to least preferred; each language is
//! expanded into its less specific variants so that `de_DE.UTF-8` still
//! finds a `Name[de]` entry.

/// Environment variables consulted for the message locale, in priority order.
const LOCALE_VARIABLES: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

const ENCODING: u8 = 1;
const TERRITORY: u8 = 2;
const MODIFIER: u8 = 4;

/// Expands a locale name into its variants, most specific first.
///
/// `lang_TERRITORY.CODESET@modifier` produces every combination of the
/// optional parts that are present, dropping the modifier last.
///
/// ```
/// use marquee_keyfile::locale_variants;
///
/// assert_eq!(locale_variants("pt_BR"), vec!["pt_BR", "pt"]);
/// ```
pub fn locale_variants(locale: &str) -> Vec<String> {
    let (rest, modifier) = split_off(locale, '@');
    let (rest, encoding) = split_off(rest, '.');
    let (language, territory) = split_off(rest, '_');

    let mut mask = 0;
    if territory.is_some() {
        mask |= TERRITORY;
    }
    if encoding.is_some() {
        mask |= ENCODING;
    }
    if modifier.is_some() {
        mask |= MODIFIER;
    }

    let mut variants = Vec::new();
    for j in 0..=mask {
        let i = mask - j;
        if i & !mask != 0 {
            continue;
        }
        let mut variant = language.to_string();
        if i & TERRITORY != 0 {
            if let Some(territory) = territory {
                variant.push('_');
                variant.push_str(territory);
            }
        }
        if i & ENCODING != 0 {
            if let Some(encoding) = encoding {
                variant.push('.');
                variant.push_str(encoding);
            }
        }
        if i & MODIFIER != 0 {
            if let Some(modifier) = modifier {
                variant.push('@');
                variant.push_str(modifier);
            }
        }
        variants.push(variant);
    }
    variants
}

/// Builds the ordered list of languages used for translated lookups.
///
/// `lookup` resolves environment variable names. `LANGUAGE` is a
/// colon-separated preference list and is only honoured when the message
/// locale (the first non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG`) is not
/// the `C` locale. The `C` and `POSIX` locales never appear in the result.
pub fn language_names<F>(lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let locale = LOCALE_VARIABLES
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.is_empty()));

    let mut sources = Vec::new();
    if locale.as_deref().is_some_and(|l| !is_c_locale(l)) {
        if let Some(language) = lookup("LANGUAGE") {
            sources.extend(
                language
                    .split(':')
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string),
            );
        }
    }
    sources.extend(locale);

    let mut names: Vec<String> = Vec::new();
    for source in sources.iter().filter(|s| !is_c_locale(s)) {
        for variant in locale_variants(source) {
            if !names.contains(&variant) {
                names.push(variant);
            }
        }
    }
    names
}

fn is_c_locale(locale: &str) -> bool {
    locale == "C" || locale == "POSIX" || locale.starts_with("C.")
}

fn split_off(value: &str, delimiter: char) -> (&str, Option<&str>) {
    match value.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (value, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn variants_of_plain_language() {
        assert_eq!(locale_variants("de"), vec!["de"]);
    }

    #[test]
    fn variants_of_full_locale() {
        assert_eq!(
            locale_variants("de_DE.UTF-8@euro"),
            vec![
                "de_DE.UTF-8@euro",
                "de_DE@euro",
                "de.UTF-8@euro",
                "de@euro",
                "de_DE.UTF-8",
                "de_DE",
                "de.UTF-8",
                "de",
            ]
        );
    }

    #[test]
    fn variants_without_modifier() {
        assert_eq!(
            locale_variants("fr_CA.UTF-8"),
            vec!["fr_CA.UTF-8", "fr_CA", "fr.UTF-8", "fr"]
        );
    }

    #[test]
    fn language_names_prefers_lc_all() {
        let names = language_names(env(&[("LC_ALL", "fr_FR"), ("LANG", "de_DE")]));
        assert_eq!(names, vec!["fr_FR", "fr"]);
    }

    #[test]
    fn language_names_skips_empty_variables() {
        let names = language_names(env(&[("LC_ALL", ""), ("LANG", "nl_NL")]));
        assert_eq!(names, vec!["nl_NL", "nl"]);
    }

    #[test]
    fn language_list_comes_first() {
        let names = language_names(env(&[("LANGUAGE", "sv:de"), ("LANG", "en_US.UTF-8")]));
        assert_eq!(
            names,
            vec!["sv", "de", "en_US.UTF-8", "en_US", "en.UTF-8", "en"]
        );
    }

    #[test]
    fn language_list_ignored_in_c_locale() {
        let names = language_names(env(&[("LANGUAGE", "sv"), ("LANG", "C.UTF-8")]));
        assert!(names.is_empty());
    }

    #[test]
    fn no_environment_yields_no_languages() {
        assert!(language_names(env(&[])).is_empty());
    }
}
