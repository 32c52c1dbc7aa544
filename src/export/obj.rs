//! Wavefront OBJ export.
//!
//! The file is a single group: every vertex, then every atlas texcoord
//! (four per atlas entry, ascending by index base), then every face.
//! Floats are written in shortest round-trip form with a fractional part.
//! Very small or very large values use an exponent with a sign and at least
//! two digits (`1e-05`, `2.5e+16`).

use crate::atlas::AtlasIndex;
use crate::error::Result;
use crate::mesher::Mesh;
use std::fmt::{self, Write};

/// OBJ float formatting.
struct ObjFloat(f64);

impl fmt::Display for ObjFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = format!("{:?}", self.0);
        match repr.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&repr),
        }
    }
}

/// Export a mesh to OBJ text.
///
/// All atlas texcoords are written even if no face references them, so
/// face texcoord indices line up with atlas index bases.
pub fn export_obj(name: &str, mesh: &Mesh, atlas: &AtlasIndex) -> Result<String> {
    // ~40 bytes per v/vt line, ~30 per face
    let capacity = 64 + mesh.vertex_count() * 40 + atlas.texcoord_count() * 40 + mesh.triangle_count() * 30;
    let mut obj = String::with_capacity(capacity);

    writeln!(obj, "g {}", name)?;

    for [x, y, z] in &mesh.vertices {
        writeln!(obj, "v {} {} {}", ObjFloat(*x), ObjFloat(*y), ObjFloat(*z))?;
    }

    for entry in atlas.sorted_entries() {
        for [u, v] in &entry.uv {
            writeln!(obj, "vt {} {}", ObjFloat(*u), ObjFloat(*v))?;
        }
    }

    for [a, b, c] in &mesh.faces {
        writeln!(
            obj,
            "f {}/{} {}/{} {}/{}",
            a.vertex, a.texcoord, b.vertex, b.texcoord, c.vertex, c.texcoord
        )?;
    }

    Ok(obj)
}
