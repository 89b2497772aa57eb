use clap::{Parser, Subcommand};
use faltantes_common::{CecosLayout, SourceKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faltantes")]
#[command(about = "Validación: Tiendas y CEDIS faltantes en Interfaces", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Muestra el detalle de la extracción (equivale a RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calcula los faltantes y genera el Excel con la hoja Faltantes_Total
    Run {
        /// Consolidado de Interfaces
        #[arg(short, long)]
        interfaces: Option<PathBuf>,

        /// Archivo Cecos (hoja "JMC Cost Center Strucutre")
        #[arg(short, long)]
        cecos: Option<PathBuf>,

        /// MD mes anterior
        #[arg(short, long)]
        md: Option<PathBuf>,

        /// Dash de tiendas
        #[arg(short, long)]
        dash: Option<PathBuf>,

        /// Archivo o directorio de salida (por defecto: directorio actual)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// No escribir el Excel, solo mostrar el resultado
        #[arg(long)]
        no_export: bool,
    },

    /// Procesa un solo archivo y muestra cuántos identificadores obtiene
    Check {
        /// Tipo de archivo (interfaces/cecos/md/dash)
        #[arg(required = true)]
        kind: SourceKind,

        /// Archivo Excel
        #[arg(required = true)]
        file: PathBuf,
    },

    /// Muestra o edita la configuración
    Config {
        /// Nombre de la hoja a leer en el archivo Cecos
        #[arg(long)]
        set_cecos_sheet: Option<String>,

        /// Resolución de columnas en Cecos (by_name/positional)
        #[arg(long)]
        set_cecos_layout: Option<CecosLayout>,

        /// Mostrar la configuración
        #[arg(long)]
        show: bool,
    },
}
