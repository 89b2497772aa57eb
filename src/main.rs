use anyhow::Context;
use clap::Parser;
use faltantes_common::{build_report, ReconStatus};
use faltantes_interfaces::{cli, config, export, pipeline, summary};
use cli::{Cli, Commands};
use config::Config;
use pipeline::SourcePaths;

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let config = Config::load().context("No se pudo cargar la configuración")?;

    match cli.command {
        Commands::Run { interfaces, cecos, md, dash, output, no_export } => {
            println!("📋 faltantes - Tiendas y CEDIS faltantes en Interfaces\n");

            // 1. 各ファイルを独立に処理
            println!("[1/3] Procesando archivos...");
            let paths = SourcePaths { interfaces, cecos, md, dash };
            let session = pipeline::process_sources(&paths, &config);

            if !session.failures().is_empty() {
                println!("\n⚠ Se detectaron errores:");
                for failure in session.failures() {
                    println!("- {}", failure);
                }
            }
            println!();

            // 2. 照合
            println!("[2/3] Resultado: faltantes en Interfaces");
            let result = match session.status() {
                ReconStatus::Ready(result) => result,
                status => {
                    if let Some(prompt) = status.prompt() {
                        println!("ℹ {}", prompt);
                    }
                    return Ok(());
                }
            };

            println!("TOTAL faltantes (Tiendas ∪ CEDIS) vs Interfaces: {}", result.len());
            let diffs = session.partial_differences();
            if let Some(tiendas) = &diffs.tiendas {
                println!("  Tiendas (Cecos) faltantes: {}", tiendas.len());
            }
            if let Some(cedis) = &diffs.cedis {
                println!("  CEDIS (MD) faltantes: {}", cedis.len());
            }
            if session.dash().is_some() {
                println!("  Con datos del Dash: {}/{}", result.enriched_count(), result.len());
            }

            if !result.is_empty() {
                println!("\nTabla para correo (Faltantes_Total):");
                println!("{}", summary::format_faltantes_table(&result));
            }
            println!();

            // 3. Excel出力
            if no_export {
                println!("[3/3] Exportación omitida (--no-export)");
            } else {
                println!("[3/3] Generando Excel...");
                let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
                let output_path = export::output_path(&output_dir, &config.output_file_name());
                let sheets = build_report(&session, &result);
                export::excel::generate_excel(&sheets, &output_path)
                    .with_context(|| format!("No se pudo escribir {}", output_path.display()))?;
                println!("✔ Excel: {}", output_path.display());
            }

            println!("\n✅ Listo");
        }

        Commands::Check { kind, file } => {
            let data = pipeline::load_source(kind, &file, &config)
                .with_context(|| format!("{}: {}", kind, file.display()))?;
            println!("✔ {}", data.summary());
        }

        Commands::Config { set_cecos_sheet, set_cecos_layout, show } => {
            let mut config = config;

            if let Some(name) = set_cecos_sheet {
                config.set_cecos_sheet_name(name)?;
                println!("✔ Hoja de Cecos actualizada");
            }

            if let Some(layout) = set_cecos_layout {
                config.set_cecos_layout(layout)?;
                println!("✔ Resolución de columnas Cecos: {}", layout);
            }

            if show {
                println!("Configuración:");
                println!("  Hoja Cecos: {}", config.cecos_sheet_name);
                println!("  Columnas Cecos: {}", config.cecos_layout);
                println!("  Archivo de salida: {}", config.output_file_name());
                if let Ok(path) = Config::config_path() {
                    println!("  Ruta: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
