//! Locale-aware currency text input for finance forms.
//!
//! ```rust,ignore
//! use currency_input_rs::CurrencyInputBuilder;
//!
//! let mut field = CurrencyInputBuilder::new()
//!     .locale_tag("es-ES")
//!     .build()?;
//!
//! field.handle_focus();
//! let value = field.handle_change("1234,5");
//! let committed = field.handle_blur(); // display becomes "1.234,50"
//! ```

mod builder;
mod input;

pub mod amount;
pub mod errors;
pub mod format;
pub mod locale;

pub use builder::CurrencyInputBuilder;
pub use input::{CurrencyInput, InputEvent, ValueChange};
pub use locale::NumberLocale;
