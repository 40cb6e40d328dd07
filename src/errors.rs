use thiserror::Error;

/// Erros possíveis ao construir um campo de entrada de moeda
#[derive(Error, Debug)]
pub enum CurrencyInputError {
    /// A tag de locale fornecida não existe na tabela embutida
    #[error("Unknown locale tag: {0}")]
    UnknownLocale(String),

    // Exemplos de erros que você pode adicionar no futuro:
    // #[error("Unsupported fraction digits: {0}")]
    // UnsupportedFractionDigits(u32),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type CurrencyInputResult<T> = Result<T, CurrencyInputError>;
