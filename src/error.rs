use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaltantesError {
    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Archivo no encontrado: {0}")]
    FileNotFound(String),

    #[error("No se pudo leer el libro {path}: {message}")]
    WorkbookRead { path: String, message: String },

    #[error("No existe la hoja \"{sheet}\" en {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("El libro no tiene hojas: {0}")]
    EmptyWorkbook(String),

    #[error("Error al generar Excel: {0}")]
    ExcelGeneration(String),

    #[error("Error JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] faltantes_common::Error),
}

pub type Result<T> = std::result::Result<T, FaltantesError>;
