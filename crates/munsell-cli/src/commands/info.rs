//! Table information command

use super::Context;
use crate::InfoArgs;
use anyhow::Result;
use munsell_core::{HUE_STEPS, VALUE_STEPS};

pub fn run(args: InfoArgs, ctx: &Context) -> Result<()> {
    let table = ctx.load_table()?;
    let (h, v, c) = table.dims();
    let cells = h * v * c;
    let defined = table.defined_count();

    if let Some(path) = &ctx.config.table {
        println!("Table:    {}", path.display());
    }
    println!("Grid:     {} x {} x {} (hue x value x chroma)", h, v, c);
    println!(
        "Defined:  {} of {} cells ({:.1}%)",
        defined,
        cells,
        100.0 * defined as f64 / cells as f64
    );

    let mut widest = (0, 0, 0);
    for i in 0..HUE_STEPS {
        for j in 0..VALUE_STEPS {
            let edge = table.gamut_edge(i as i64, j as i64)?;
            if edge > widest.2 {
                widest = (i, j, edge);
            }
        }
    }
    println!(
        "Widest:   hue {} value {} reaches chroma index {}",
        widest.0,
        widest.1,
        widest.2.saturating_sub(1)
    );

    if args.slices {
        println!();
        println!("Gamut edge per slice (first undefined chroma index):");
        print!("hue\\val");
        for j in 0..VALUE_STEPS {
            print!("{:>4}", j);
        }
        println!();
        for i in 0..HUE_STEPS {
            print!("{:>7}", i);
            for j in 0..VALUE_STEPS {
                print!("{:>4}", table.gamut_edge(i as i64, j as i64)?);
            }
            println!();
        }
    }

    Ok(())
}
