use crate::errors::CurrencyInputError;
use crate::input::CurrencyInput;
use crate::locale::NumberLocale;
use rust_decimal::Decimal;

#[derive(Default)]
pub struct CurrencyInputBuilder {
    locale_tag: Option<String>,
    locale: Option<NumberLocale>,
    initial_value: Option<Decimal>,
}

impl CurrencyInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale by tag, resolved against the built-in table at `build` time.
    pub fn locale_tag(mut self, tag: &str) -> Self {
        self.locale_tag = Some(tag.to_string());
        self
    }

    /// Locale by entry, skipping tag resolution. Takes precedence over
    /// `locale_tag`.
    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn initial_value(mut self, value: Decimal) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// With neither a locale nor a tag the field defaults to es-ES. An
    /// explicitly supplied tag that the table does not know is an error
    /// rather than a silent fallback.
    pub fn build(self) -> Result<CurrencyInput, CurrencyInputError> {
        let locale = match (self.locale, self.locale_tag) {
            (Some(locale), _) => locale,
            (None, Some(tag)) => NumberLocale::lookup(&tag)
                .ok_or(CurrencyInputError::UnknownLocale(tag))?,
            (None, None) => NumberLocale::default(),
        };

        Ok(CurrencyInput::new(locale, self.initial_value))
    }
}
