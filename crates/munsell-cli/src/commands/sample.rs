//! Continuous sampling command

use super::{format_rgb, Context};
use crate::SampleArgs;
use anyhow::{Context as _, Result};
use munsell_interp::sample;
use munsell_math::hex_rgb8;
use tracing::debug;

pub fn run(args: SampleArgs, ctx: &Context) -> Result<()> {
    let table = ctx.load_table()?;
    let (i, j, k) = (args.hue, args.value, args.chroma);
    debug!(i, j, k, "Sampling");

    let color = sample(&table, i, j, k)
        .with_context(|| format!("Cannot sample ({}, {}, {})", i, j, k))?;

    match color {
        Some(rgb) if args.hex => println!("{} {}", format_rgb(rgb), hex_rgb8(rgb)),
        Some(rgb) => println!("{}", format_rgb(rgb)),
        None => println!("none"),
    }
    Ok(())
}
