//! Frame export (OBJ and JSON)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use koi_appendage::MeshArena;
use koi_appendage::blueprint::Species;
use serde::Serialize;

/// Write the arena as a Wavefront OBJ on the Z = 0 plane
pub fn write_obj(arena: &MeshArena, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj_to(arena, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn write_obj_to<W: Write>(arena: &MeshArena, out: &mut W) -> Result<()> {
    writeln!(out, "# koi frame: {} vertices", arena.vertices().len())?;
    for vertex in arena.vertices() {
        writeln!(out, "v {} {} 0", vertex.position[0], vertex.position[1])?;
    }
    for vertex in arena.vertices() {
        writeln!(out, "vt {} {}", vertex.uv[0], vertex.uv[1])?;
    }
    // OBJ indices are 1-based
    for [a, b, c] in arena.triangles() {
        writeln!(out, "f {0}/{0} {1}/{1} {2}/{2}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Serializable snapshot of one rendered frame
#[derive(Debug, Serialize)]
pub struct FrameDump {
    pub species: Species,
    pub ticks: u32,
    pub interpolation: f32,
    /// Interleaved `[x, y, u, v]`
    pub vertices: Vec<[f32; 4]>,
    pub triangles: Vec<[u32; 3]>,
}

impl FrameDump {
    pub fn new(species: Species, ticks: u32, interpolation: f32, arena: &MeshArena) -> Self {
        Self {
            species,
            ticks,
            interpolation,
            vertices: arena
                .vertices()
                .iter()
                .map(|v| [v.position[0], v.position[1], v.uv[0], v.uv[1]])
                .collect(),
            triangles: arena.triangles().collect(),
        }
    }
}

pub fn write_json(dump: &FrameDump, path: &Path) -> Result<()> {
    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, dump)?;
    Ok(())
}
