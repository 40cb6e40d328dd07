use currency_input_rs::{CurrencyInputBuilder, InputEvent};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let tag = if args.len() > 1 {
        args[1].as_str()
    } else {
        println!("Using default locale es-ES (pass a tag like en-US to change)\n");
        "es-ES"
    };

    let mut field = CurrencyInputBuilder::new().locale_tag(tag).build()?;

    println!("Placeholder: {:?}\n", field.placeholder());

    let decimal = field.locale().decimal_separator;
    let keystrokes = [
        "1".to_string(),
        "12".to_string(),
        format!("12{decimal}"),
        format!("12{decimal}3"),
        format!("12{decimal}3{decimal}45"),
        format!("1234{decimal}56"),
    ];

    let mut events = vec![InputEvent::Focus];
    events.extend(keystrokes.into_iter().map(InputEvent::Change));
    events.push(InputEvent::Blur);

    for event in events {
        let label = format!("{:?}", event);
        match field.apply(event) {
            Some(change) => println!(
                "{label:30} display={:?} value={:?}",
                field.text(),
                change.value
            ),
            None => println!("{label:30} display={:?}", field.text()),
        }
    }

    Ok(())
}
