use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Cannot open input file {path}: {source}")]
    MissingInputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ValidatorError {
    /// Message shown to the user on stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ValidatorError::MissingInputFile { path, source } => match source.kind() {
                ErrorKind::NotFound => format!("Erro: o arquivo '{}' não foi encontrado.", path),
                ErrorKind::PermissionDenied => {
                    format!("Erro: sem permissão para abrir o arquivo '{}'.", path)
                }
                ErrorKind::InvalidInput => format!("Erro: '{}' não é um arquivo.", path),
                _ => format!("Erro: não foi possível abrir o arquivo '{}': {}", path, source),
            },
            ValidatorError::IoError(e) => format!("Erro ao ler a entrada: {}", e),
            ValidatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Erro: argumento '{}' inválido: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ValidatorError::MissingInputFile { .. } | ValidatorError::IoError(_) => 1,
            ValidatorError::InvalidConfigValueError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
