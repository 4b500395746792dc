//! Wavefront OBJ mesh loading.
//!
//! Supports the subset of the format this renderer consumes: `v` position
//! lines, `vn` normal lines, and triangular `f` faces whose tokens carry a
//! position and a normal (`v//vn`). Anything else (comments, `o`, `s`,
//! `usemtl`, texture coordinates) is skipped.
//!
//! A vertex is identified by its position and normal index pair, so
//! vertices shared between faces are stored once and faces index into the
//! deduplicated buffer.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use rastty_core::{Mesh, Vector3, Vertex};

pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur when loading an OBJ mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid vertex on line {line}: expected three coordinates")]
    InvalidVertex { line: usize },

    #[error("invalid normal on line {line}: expected three coordinates")]
    InvalidNormal { line: usize },

    #[error("invalid face on line {line}: expected three `v//vn` tokens")]
    InvalidFace { line: usize },

    #[error("face index out of range on line {line}")]
    FaceIndexOutOfRange { line: usize },

    #[error("unsupported mesh format: no vertices or no faces")]
    UnsupportedFormat,
}

/// Load a mesh from an OBJ file on disk.
pub fn load(path: impl AsRef<Path>) -> Result<Mesh> {
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parse OBJ text into a mesh.
///
/// Faces may list more than three tokens; only the first three are used.
/// Indices are one-based in the file and bounds-checked against the
/// `v`/`vn` lines seen so far.
pub fn parse_str(text: &str) -> Result<Mesh> {
    let mut positions: Vec<Vector3> = Vec::new();
    let mut normals: Vec<Vector3> = Vec::new();

    let mut vertex_buffer: Vec<Vertex> = Vec::new();
    let mut index_buffer: Vec<[usize; 3]> = Vec::new();

    let mut unique_vertices: HashMap<(usize, usize), usize> = HashMap::new();

    for (number, line) in text.lines().enumerate() {
        let number = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let position =
                    parse_vec3(&mut tokens).ok_or(LoadError::InvalidVertex { line: number })?;
                positions.push(position);
            }
            Some("vn") => {
                let normal =
                    parse_vec3(&mut tokens).ok_or(LoadError::InvalidNormal { line: number })?;
                normals.push(normal);
            }
            Some("f") => {
                let mut tri = [0usize; 3];

                for slot in &mut tri {
                    let token = tokens.next().ok_or(LoadError::InvalidFace { line: number })?;
                    let (v_index, vn_index) =
                        parse_face_token(token).ok_or(LoadError::InvalidFace { line: number })?;

                    let position = *positions
                        .get(v_index)
                        .ok_or(LoadError::FaceIndexOutOfRange { line: number })?;
                    let normal = *normals
                        .get(vn_index)
                        .ok_or(LoadError::FaceIndexOutOfRange { line: number })?;

                    *slot = match unique_vertices.entry((v_index, vn_index)) {
                        Entry::Occupied(entry) => *entry.get(),
                        Entry::Vacant(entry) => {
                            vertex_buffer.push(Vertex::new(position, normal));
                            *entry.insert(vertex_buffer.len() - 1)
                        }
                    };
                }

                index_buffer.push(tri);
            }
            // Comments and unsupported prefixes are skipped.
            _ => {}
        }
    }

    if vertex_buffer.is_empty() || index_buffer.is_empty() {
        return Err(LoadError::UnsupportedFormat);
    }

    Ok(Mesh::new(vertex_buffer, index_buffer))
}

fn parse_vec3<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<Vector3> {
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    let z = tokens.next()?.parse().ok()?;
    Some(Vector3::new(x, y, z))
}

/// Split a one-based `v//vn` token into zero-based indices.
fn parse_face_token(token: &str) -> Option<(usize, usize)> {
    let (v, vn) = token.split_once("//")?;
    let v_index = v.parse::<usize>().ok()?.checked_sub(1)?;
    let vn_index = vn.parse::<usize>().ok()?.checked_sub(1)?;
    Some((v_index, vn_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vn 0 0 -1
f 1//1 3//1 2//1
f 2//1 3//1 4//1
";

    #[test]
    fn shared_vertices_are_deduplicated() {
        let mesh = parse_str(QUAD).unwrap();

        // Two triangles over four corners, not six vertices.
        assert_eq!(mesh.vertex_buffer.len(), 4);
        assert_eq!(mesh.index_buffer, vec![[0, 1, 2], [2, 1, 3]]);

        assert_eq!(mesh.vertex_buffer[0].position, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(mesh.vertex_buffer[1].position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(mesh.vertex_buffer[0].normal, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn same_position_with_different_normal_stays_distinct() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vn 0 0 -1
vn 0 0 1
f 1//1 3//1 2//1
f 1//2 3//2 2//2
";
        let mesh = parse_str(text).unwrap();
        assert_eq!(mesh.vertex_buffer.len(), 6);
    }

    #[test]
    fn face_tokens_beyond_the_third_are_ignored() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vn 0 0 -1
f 1//1 3//1 2//1 4//1
";
        let mesh = parse_str(text).unwrap();
        assert_eq!(mesh.index_buffer, vec![[0, 1, 2]]);
        assert_eq!(mesh.vertex_buffer.len(), 3);
    }

    #[test]
    fn unknown_prefixes_are_skipped() {
        let text = "\
# exported mesh
o triangle
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 1
vn 0 0 -1
s off
usemtl none
f 1//1 3//1 2//1
";
        let mesh = parse_str(text).unwrap();
        assert_eq!(mesh.index_buffer.len(), 1);
    }

    #[test]
    fn short_vertex_line_is_an_error() {
        let err = parse_str("v 1 2\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidVertex { line: 1 }));

        let err = parse_str("v a b c\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidVertex { line: 1 }));
    }

    #[test]
    fn short_normal_line_is_an_error() {
        let err = parse_str("v 0 0 0\nvn 1\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidNormal { line: 2 }));
    }

    #[test]
    fn face_without_double_slash_is_an_error() {
        let text = "v 0 0 0\nvn 0 0 1\nf 1/1/1 1//1 1//1\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFace { line: 3 }));
    }

    #[test]
    fn face_with_too_few_tokens_is_an_error() {
        let text = "v 0 0 0\nvn 0 0 1\nf 1//1 1//1\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFace { line: 3 }));
    }

    #[test]
    fn zero_face_index_is_an_error() {
        // Indices are one-based; zero cannot name a vertex.
        let text = "v 0 0 0\nvn 0 0 1\nf 0//1 1//1 1//1\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFace { line: 3 }));
    }

    #[test]
    fn out_of_range_face_index_is_an_error() {
        let text = "v 0 0 0\nvn 0 0 1\nf 2//1 1//1 1//1\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, LoadError::FaceIndexOutOfRange { line: 3 }));

        let text = "v 0 0 0\nvn 0 0 1\nf 1//2 1//1 1//1\n";
        let err = parse_str(text).unwrap_err();
        assert!(matches!(err, LoadError::FaceIndexOutOfRange { line: 3 }));
    }

    #[test]
    fn meshes_without_vertices_or_faces_are_unsupported() {
        assert!(matches!(parse_str(""), Err(LoadError::UnsupportedFormat)));
        assert!(matches!(
            parse_str("# nothing but comments\n"),
            Err(LoadError::UnsupportedFormat)
        ));
        assert!(matches!(
            parse_str("v 0 0 0\nvn 0 0 1\n"),
            Err(LoadError::UnsupportedFormat)
        ));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load("/definitely/not/a/mesh.obj").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
