use serde::Serialize;

/// Separator information for one number-formatting locale.
///
/// Representa uma localidade de formatação numérica: normalmente as entradas
/// vêm de tags BCP-47 como:
/// - es-ES (decimal `,`, milhar `.`)
/// - en-US (decimal `.`, milhar `,`)
/// - de-CH (decimal `.`, milhar `'`)
///
/// This is a static table, not a full locale database: it only carries the two
/// separator characters the input field needs. Every entry upholds
/// `decimal_separator != group_separator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberLocale {
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
}

pub static ES_ES: NumberLocale = NumberLocale {
    tag: "es-ES",
    decimal_separator: ',',
    group_separator: '.',
};

pub static EN_US: NumberLocale = NumberLocale {
    tag: "en-US",
    decimal_separator: '.',
    group_separator: ',',
};

/// British English uses the same separators as `en-US`.
pub static EN_GB: NumberLocale = NumberLocale {
    tag: "en-GB",
    decimal_separator: '.',
    group_separator: ',',
};

pub static DE_DE: NumberLocale = NumberLocale {
    tag: "de-DE",
    decimal_separator: ',',
    group_separator: '.',
};

/// French grouping uses U+00A0 NO-BREAK SPACE. Some environments prefer
/// U+202F NARROW NO-BREAK SPACE; U+00A0 is the more widely supported choice.
pub static FR_FR: NumberLocale = NumberLocale {
    tag: "fr-FR",
    decimal_separator: ',',
    group_separator: '\u{a0}',
};

pub static PT_BR: NumberLocale = NumberLocale {
    tag: "pt-BR",
    decimal_separator: ',',
    group_separator: '.',
};

pub static IT_IT: NumberLocale = NumberLocale {
    tag: "it-IT",
    decimal_separator: ',',
    group_separator: '.',
};

/// Swiss-style separators (`'` grouping, `.` decimal), shared by de-CH/fr-CH/it-CH.
pub static DE_CH: NumberLocale = NumberLocale {
    tag: "de-CH",
    decimal_separator: '.',
    group_separator: '\'',
};

impl Default for NumberLocale {
    fn default() -> Self {
        ES_ES
    }
}

impl NumberLocale {
    /// Resolve a locale tag against the built-in table.
    ///
    /// Tag spellings are normalized before lookup (`-`/`_` equivalence,
    /// case-insensitive, POSIX and BCP-47 suffixes dropped). Unknown tags
    /// return `None`; deciding whether that is an error belongs to the caller.
    pub fn lookup(tag: &str) -> Option<NumberLocale> {
        match normalize_tag(tag)?.as_str() {
            "es-es" | "es" | "es-ar" | "es-cl" | "es-co" => Some(ES_ES),
            "en-us" | "en" => Some(EN_US),
            "en-gb" | "en-uk" => Some(EN_GB),
            "de-de" | "de" | "de-at" => Some(DE_DE),
            "fr-fr" | "fr" => Some(FR_FR),
            "pt-br" | "pt" | "pt-pt" => Some(PT_BR),
            "it-it" | "it" => Some(IT_IT),
            "de-ch" | "fr-ch" | "it-ch" => Some(DE_CH),
            key => {
                // Region variants we don't list fall back to the language entry
                // (en-AU, fr-CA, de-LU, ...).
                match key.split('-').next().unwrap_or("") {
                    "es" => Some(ES_ES),
                    "en" => Some(EN_US),
                    "de" => Some(DE_DE),
                    "fr" => Some(FR_FR),
                    "pt" => Some(PT_BR),
                    "it" => Some(IT_IT),
                    _ => None,
                }
            }
        }
    }
}

/// Normaliza grafias comuns de tags de locale antes da busca na tabela.
fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut key = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        let ch = match ch {
            '_' => '-',
            other => other,
        };
        key.push(ch.to_ascii_lowercase());
    }

    // POSIX tags carry encoding/modifier suffixes (`es_ES.UTF-8`, `de_DE@euro`);
    // browser tags carry BCP-47 extensions (`en-US-u-nu-latn`). Only the
    // language/region portion matters here.
    if let Some(idx) = key.find('.') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find('@') {
        key.truncate(idx);
    }
    if let Some(idx) = key.find("-u-") {
        key.truncate(idx);
    }
    if let Some(idx) = key.find("-x-") {
        key.truncate(idx);
    }

    Some(key)
}

// -----------------------------------------------------------------------------
// Testes
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("es-ES", "es-ES")]
    #[case("es", "es-ES")]
    #[case("es_ES.UTF-8", "es-ES")]
    #[case("ES-AR", "es-ES")]
    #[case("en-US", "en-US")]
    #[case("en_us", "en-US")]
    #[case("en", "en-US")]
    #[case("en-AU", "en-US")]
    #[case("en-GB", "en-GB")]
    #[case("en_uk", "en-GB")]
    #[case("de_DE@euro", "de-DE")]
    #[case("de-AT", "de-DE")]
    #[case("de-CH", "de-CH")]
    #[case("fr-CH", "de-CH")]
    #[case("fr-FR-u-nu-latn", "fr-FR")]
    #[case("fr-CA", "fr-FR")]
    #[case("pt-BR", "pt-BR")]
    #[case("pt_PT", "pt-BR")]
    #[case("it-IT", "it-IT")]
    fn test_lookup_known_tags(#[case] input: &str, #[case] expected_tag: &str) {
        let locale = NumberLocale::lookup(input);
        assert!(locale.is_some());
        assert_eq!(locale.unwrap().tag, expected_tag);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("zz-ZZ")]
    #[case("ja-JP")]
    #[case("klingon")]
    fn test_lookup_unknown_tags(#[case] input: &str) {
        assert!(NumberLocale::lookup(input).is_none());
    }

    #[test]
    fn test_default_is_es_es() {
        let locale = NumberLocale::default();
        assert_eq!(locale.tag, "es-ES");
        assert_eq!(locale.decimal_separator, ',');
        assert_eq!(locale.group_separator, '.');
    }

    #[test]
    fn test_separators_never_collide() {
        for locale in [ES_ES, EN_US, EN_GB, DE_DE, FR_FR, PT_BR, IT_IT, DE_CH] {
            assert_ne!(
                locale.decimal_separator, locale.group_separator,
                "locale {} has colliding separators",
                locale.tag
            );
        }
    }

    #[test]
    fn test_locale_serialization() {
        let json = serde_json::to_string(&ES_ES).unwrap();
        assert!(json.contains("es-ES"));
        assert!(json.contains(","));
    }
}
