//! CLI command for exporting a forecast
//!
//! Without `--output` the export is written to stdout so it can be piped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::{ExportFormat, Settings};
use crate::error::{CashflowError, CashflowResult};
use crate::export::{export_full_json, export_full_yaml, export_projections_csv, FullExport};
use crate::services::ForecastService;
use crate::storage::Storage;

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> CashflowResult<()> {
    let format = format.unwrap_or(settings.default_export_format);
    let configuration = ForecastService::new(storage).configuration()?;
    let export = FullExport::from_configuration(configuration);

    match &output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_export(&export, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| CashflowError::Export(e.to_string()))?;
            println!("Exported {} forecast to {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&export, format, &mut writer)?;
            if format == ExportFormat::Json {
                writeln!(writer).map_err(|e| CashflowError::Export(e.to_string()))?;
            }
        }
    }

    tracing::info!(%format, projections = export.projections.len(), "Exported forecast");
    Ok(())
}

fn write_export<W: Write>(
    export: &FullExport,
    format: ExportFormat,
    writer: &mut W,
) -> CashflowResult<()> {
    match format {
        ExportFormat::Csv => export_projections_csv(&export.projections, writer),
        ExportFormat::Json => export_full_json(export, writer, true),
        ExportFormat::Yaml => export_full_yaml(export, writer),
    }
}
