#[derive(Debug, Eq, PartialEq)]
pub enum ProviderError {
    ScriptTooLarge { size: usize, max: usize },
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::ScriptTooLarge { size, max } => {
                write!(f, "redeem script of {size} bytes exceeds {max} byte limit")
            }
        }
    }
}

impl std::error::Error for ProviderError {}
