//! Mesh inspection utility.
//!
//! Loads an OBJ file and reports what the renderer would see: vertex and
//! triangle counts after deduplication, plus the model-space bounds.

use anyhow::{bail, Result};

use rastty::core::Vector3;
use rastty::obj;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("invalid number of arguments: expected exactly one mesh path");
    }

    let mesh = obj::load(&args[1])?;

    let mut min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    let mut max = Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
    for vertex in &mesh.vertex_buffer {
        let p = vertex.position;
        min = Vector3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
        max = Vector3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
    }

    println!("mesh:      {}", args[1]);
    println!("vertices:  {}", mesh.vertex_buffer.len());
    println!("triangles: {}", mesh.triangle_count());
    println!(
        "bounds:    ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
        min.x, min.y, min.z, max.x, max.y, max.z
    );

    Ok(())
}
