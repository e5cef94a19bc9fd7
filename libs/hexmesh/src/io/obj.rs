//! # OBJ Surface Reader
//!
//! Reads the quad subset of Wavefront OBJ:
//!
//! ```text
//! v x y z          vertex, indexed in file order
//! f a b c d        quad, 1-based vertex indices (a/b/c tokens allowed)
//! ```
//!
//! Every other line is ignored. Unreadable files produce an empty surface
//! and a warning instead of an error, so callers decide whether to go on.

use std::path::Path;

use glam::DVec3;
use log::{debug, warn};

use crate::mesh::SurfaceMesh;

/// Loads a quad surface from an OBJ file.
///
/// A missing or unreadable file logs a warning and yields an empty surface.
pub fn load_surface_obj(path: impl AsRef<Path>) -> SurfaceMesh {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => parse_obj(&text),
        Err(err) => {
            warn!("Failed to open file: {}: {err}", path.display());
            SurfaceMesh::new()
        }
    }
}

/// Parses OBJ text into a quad surface.
///
/// Lines whose numbers do not parse are skipped, as are faces referencing
/// vertices that do not exist.
///
/// # Example
///
/// ```rust
/// use hexmesh::io::parse_obj;
///
/// let surface = parse_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
/// assert_eq!(surface.vertex_count(), 4);
/// assert_eq!(surface.quads(), &[[0, 1, 2, 3]]);
/// ```
pub fn parse_obj(text: &str) -> SurfaceMesh {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => match parse_vertex(tokens) {
                Some(v) => vertices.push(v),
                None => debug!("obj line {}: malformed vertex '{line}'", line_no + 1),
            },
            Some("f") => match parse_quad(tokens) {
                Some(q) => faces.push(q),
                None => debug!("obj line {}: malformed quad '{line}'", line_no + 1),
            },
            _ => {}
        }
    }

    let vertex_count = vertices.len();
    let mut surface = SurfaceMesh::from_parts(vertices, Vec::with_capacity(faces.len()));
    let mut dropped = 0usize;
    for quad in faces {
        if quad.iter().all(|&i| (i as usize) < vertex_count) {
            surface.add_quad(quad);
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!("obj: dropped {dropped} quads referencing missing vertices");
    }

    surface
}

fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<DVec3> {
    let mut coord = || tokens.next()?.parse::<f64>().ok();
    Some(DVec3::new(coord()?, coord()?, coord()?))
}

fn parse_quad<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Option<[u32; 4]> {
    let mut index = || {
        let token = tokens.next()?;
        let one_based: u32 = token.split('/').next()?.parse().ok()?;
        one_based.checked_sub(1)
    };
    Some([index()?, index()?, index()?, index()?])
}
