//! Data export command for backup and external analysis.
//!
//! Supports CSV, JSON, and Excel output. A single collection can be
//! exported on its own, or everything at once; see `libs::export` for the
//! file layout each combination produces.

use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        rollover,
        store::Store,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Collection to export
    #[arg(value_enum, default_value = "all")]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let mut store = Store::open()?;
    rollover::check_and_reset(&mut store)?;

    msg_info!(Message::ExportingData(format!("{:?}", args.data), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&store, args.data)?;

    Ok(())
}
