//! Placement command

use super::Context;
use crate::PlaceArgs;
use anyhow::Result;

pub fn run(args: PlaceArgs, ctx: &Context) -> Result<()> {
    let p = ctx.config.placement.place(args.hue, args.value, args.chroma);
    let [px, py, pz] = p.position.to_array();
    let [rx, ry, rz] = p.rotation.to_array();
    let [sx, sy, sz] = p.scale.to_array();

    println!("position: {:.6} {:.6} {:.6}", px, py, pz);
    println!("rotation: {:.6} {:.6} {:.6}", rx, ry, rz);
    println!("scale:    {:.6} {:.6} {:.6}", sx, sy, sz);

    if args.matrix {
        println!("matrix:");
        for col in p.matrix().to_cols_array_2d() {
            println!("  {:>10.6} {:>10.6} {:>10.6} {:>10.6}", col[0], col[1], col[2], col[3]);
        }
    }
    Ok(())
}
