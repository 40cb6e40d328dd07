use crate::amount::{parse_amount, sanitize};
use crate::format::{self, format_display, format_edit};
use crate::locale::NumberLocale;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Events an owning form feeds into the field.
///
/// `Change`, `Focus` and `Blur` are the raw control events; `ValueSync`
/// reflects an external change to the form's own numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Change(String),
    Focus,
    Blur,
    ValueSync(Option<Decimal>),
}

/// A numeric value the field hands back to the owning form.
///
/// `value: None` means "no amount" — the field never distinguishes an empty
/// field from an explicit zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    pub value: Option<Decimal>,
}

/// Campo de texto para valores monetários com normalização por locale.
///
/// Two states only. Unfocused, the display mirrors the external numeric
/// value (formatted, or blank for none/zero). Focused, the display mirrors
/// the user's sanitized keystrokes and external updates are ignored until
/// blur, so the text is never rewritten under an actively typing user.
///
/// ```rust,ignore
/// use currency_input_rs::CurrencyInputBuilder;
///
/// let mut field = CurrencyInputBuilder::new().locale_tag("es-ES").build()?;
/// field.handle_focus();
/// let value = field.handle_change("1234,5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyInput {
    locale: NumberLocale,
    text: String,
    focused: bool,
}

impl CurrencyInput {
    pub fn new(locale: NumberLocale, initial_value: Option<Decimal>) -> Self {
        let mut input = Self {
            locale,
            text: String::new(),
            focused: false,
        };
        input.text = input.render_unfocused(initial_value);
        input
    }

    /// The literal text the control is currently showing.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn locale(&self) -> &NumberLocale {
        &self.locale
    }

    /// The numeric value implied by the current display text.
    pub fn value(&self) -> Option<Decimal> {
        parse_amount(&self.text, &self.locale)
    }

    /// Placeholder for the empty field: the locale rendering of zero.
    pub fn placeholder(&self) -> String {
        format::placeholder(&self.locale)
    }

    /// A keystroke changed the raw text. Sanitizes it, shows the sanitized
    /// text verbatim (including mid-edit states like a trailing separator)
    /// and returns the value to hand to the owning form. Returns on every
    /// keystroke, `None` meaning "no amount".
    pub fn handle_change(&mut self, raw: &str) -> Option<Decimal> {
        self.text = sanitize(raw, &self.locale);
        parse_amount(&self.text, &self.locale)
    }

    /// The control gained focus. None/zero clears the field so the user
    /// types into a blank, anything else is rewritten without grouping so
    /// edits are not fighting grouping punctuation.
    pub fn handle_focus(&mut self) {
        self.focused = true;
        match parse_amount(&self.text, &self.locale) {
            Some(v) if v != Decimal::ZERO => self.text = format_edit(v, &self.locale),
            _ => self.text.clear(),
        }
    }

    /// The control lost focus. Commits the final value to the owning form:
    /// none/zero blanks the field and commits `None` (zero is never kept as
    /// a literal zero), anything else is shown fully formatted.
    pub fn handle_blur(&mut self) -> Option<Decimal> {
        self.focused = false;
        let value = parse_amount(&self.text, &self.locale).filter(|v| *v != Decimal::ZERO);
        self.text = self.render_unfocused(value);
        value
    }

    /// The form's numeric value changed from outside. Ignored while focused;
    /// unfocused it re-renders the display without committing anything back
    /// (the value is already authoritative).
    pub fn sync_value(&mut self, value: Option<Decimal>) {
        if self.focused {
            return;
        }
        self.text = self.render_unfocused(value);
    }

    /// Event-stream rendition of the same machine. `Some` exactly for the
    /// two committing transitions, `Change` and `Blur`.
    pub fn apply(&mut self, event: InputEvent) -> Option<ValueChange> {
        match event {
            InputEvent::Change(raw) => Some(ValueChange {
                value: self.handle_change(&raw),
            }),
            InputEvent::Focus => {
                self.handle_focus();
                None
            }
            InputEvent::Blur => Some(ValueChange {
                value: self.handle_blur(),
            }),
            InputEvent::ValueSync(value) => {
                self.sync_value(value);
                None
            }
        }
    }

    fn render_unfocused(&self, value: Option<Decimal>) -> String {
        match value {
            Some(v) if v != Decimal::ZERO => format_display(v, &self.locale),
            _ => String::new(),
        }
    }
}
