use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid color name '{name}': names may only contain [A-Za-z0-9_]")]
    InvalidName { name: String },
    #[error("Color '{name}' has an empty control code")]
    EmptyCode { name: String },
    #[error("Color '{name}' is defined more than once")]
    Duplicate { name: String },
    #[error("Color table has no RESET entry")]
    MissingReset,
}

impl RegistryError {
    pub fn name(&self) -> Option<&str> {
        match self {
            RegistryError::InvalidName { name }
            | RegistryError::EmptyCode { name }
            | RegistryError::Duplicate { name } => Some(name),
            RegistryError::MissingReset => None,
        }
    }
}
