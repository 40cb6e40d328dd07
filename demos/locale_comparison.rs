use currency_input_rs::CurrencyInput;
use currency_input_rs::locale::{DE_CH, EN_US, ES_ES, FR_FR, PT_BR};
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let amount = Decimal::from_str("1234567.89")?;

    println!("Rendering {amount} per locale:\n");

    for locale in [ES_ES, EN_US, FR_FR, PT_BR, DE_CH] {
        let mut field = CurrencyInput::new(locale, Some(amount));
        let formatted = field.text().to_string();

        field.handle_focus();
        let editable = field.text().to_string();
        field.handle_blur();

        println!(
            "  {:6} display={formatted:14} edit={editable:12} placeholder={}",
            locale.tag,
            field.placeholder()
        );
    }

    Ok(())
}
