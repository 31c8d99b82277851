//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// The `Display` text of each variant is the user-facing message placed in the
/// `error` field of the response body. Variants map to HTTP status codes:
/// - [`ServiceError::MissingDirectory`] → 400
/// - [`ServiceError::InvalidDirectory`] → 400
/// - [`ServiceError::NoFiles`] → 404
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::ReadFailure`] → 500
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request carried no usable `directory` value.
    #[error("Informe um caminho de diretório.")]
    MissingDirectory,

    /// The path does not exist, is not a directory, or cannot be inspected.
    #[error("Diretório inválido ou inacessível.")]
    InvalidDirectory,

    /// Listing the directory failed part-way through.
    #[error("Falha ao ler o diretório: {0}")]
    ReadFailure(String),

    /// The directory was readable but held no files.
    #[error("Nenhum arquivo válido foi encontrado no diretório.")]
    NoFiles,

    /// No route matches the request.
    #[error("Recurso não encontrado.")]
    NotFound,

    /// An unexpected internal error occurred.
    #[error("Erro interno: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::MissingDirectory => 400,
            ServiceError::InvalidDirectory => 400,
            ServiceError::NoFiles => 404,
            ServiceError::NotFound => 404,
            ServiceError::ReadFailure(_) => 500,
            ServiceError::Internal(_) => 500,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::ReadFailure(err.to_string())
    }
}
