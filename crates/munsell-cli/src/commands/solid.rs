//! Solid export command

use super::Context;
use crate::SolidArgs;
use anyhow::{Context as _, Result};
use munsell_solid::build_solid;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: SolidArgs, ctx: &Context) -> Result<()> {
    let table = ctx.load_table()?;
    let instances = build_solid(&table, &ctx.config.placement).context("Failed to build solid")?;
    info!(instances = instances.len(), "Exporting solid");

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, &instances)?;
    } else {
        serde_json::to_writer(&mut writer, &instances)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Wrote {} instances to {}", instances.len(), path.display());
    }
    Ok(())
}
