//! STL (Stereolithography) triangle import.
//!
//! Loads the triangle soup the conversion pipeline consumes. Both binary
//! and ASCII STL are supported; the loader detects the variant
//! automatically. Only vertex positions are read — the per-facet normals
//! and attribute bytes carry nothing the pipeline needs.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    - Header (ignored, often contains file info)
//! UINT32       - Number of triangles
//! foreach triangle
//!     REAL32[3] - Normal vector (ignored)
//!     REAL32[3] - Vertex 1
//!     REAL32[3] - Vertex 2
//!     REAL32[3] - Vertex 3
//!     UINT16    - Attribute byte count (ignored)
//! end
//! ```

use std::fs;
use std::io::BufRead;
use std::path::Path;

use wedge_types::{Point3, Triangle};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Load a triangle soup from an STL file.
///
/// Automatically detects ASCII vs binary format.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content is not valid STL
///
/// # Example
///
/// ```no_run
/// use wedge_io::load_stl;
///
/// let triangles = load_stl("model.stl").unwrap();
/// println!("Loaded {} triangles", triangles.len());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<Vec<Triangle>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    parse_stl(&data)
}

/// Parse STL bytes, detecting the ASCII or binary variant.
///
/// ASCII files start with "solid"; binary files that happen to share that
/// prefix are told apart by the null bytes in their 80-byte header.
///
/// # Errors
///
/// Returns an error if the content is valid in neither variant.
pub fn parse_stl(data: &[u8]) -> IoResult<Vec<Triangle>> {
    if data.len() < 6 {
        return Err(IoError::invalid_content("file too small to be valid STL"));
    }

    let prefix = String::from_utf8_lossy(&data[..data.len().min(HEADER_SIZE)]);
    if prefix.trim_start().starts_with("solid") && !has_binary_header(data) {
        parse_stl_ascii(data)
    } else {
        parse_stl_binary(data)
    }
}

/// Check whether the header suggests binary STL despite starting with
/// "solid". Binary headers often contain null padding.
fn has_binary_header(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE + 4 && data[..HEADER_SIZE].contains(&0)
}

/// Parse a binary STL buffer.
fn parse_stl_binary(data: &[u8]) -> IoResult<Vec<Triangle>> {
    if data.len() < HEADER_SIZE + 4 {
        return Err(IoError::UnexpectedEof {
            needed: HEADER_SIZE + 4,
            got: data.len(),
        });
    }

    let count = u32::from_le_bytes([
        data[HEADER_SIZE],
        data[HEADER_SIZE + 1],
        data[HEADER_SIZE + 2],
        data[HEADER_SIZE + 3],
    ]) as usize;

    let needed = HEADER_SIZE + 4 + TRIANGLE_SIZE * count;
    if data.len() < needed {
        return Err(IoError::UnexpectedEof {
            needed,
            got: data.len(),
        });
    }

    let mut triangles = Vec::with_capacity(count);
    for i in 0..count {
        let record = &data[HEADER_SIZE + 4 + TRIANGLE_SIZE * i..];
        // Skip the 12-byte normal, read the three vertices.
        let v0 = read_point(&record[12..24]);
        let v1 = read_point(&record[24..36]);
        let v2 = read_point(&record[36..48]);
        triangles.push(Triangle::new(v0, v1, v2));
    }

    Ok(triangles)
}

/// Read a point from 12 bytes (3 f32s).
fn read_point(buf: &[u8]) -> Point3<f32> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(x, y, z)
}

/// Parse an ASCII STL buffer.
fn parse_stl_ascii(data: &[u8]) -> IoResult<Vec<Triangle>> {
    let mut triangles = Vec::new();
    let mut in_facet = false;
    let mut in_loop = false;
    let mut vertices: Vec<Point3<f32>> = Vec::with_capacity(3);

    for line in data.lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        match parts[0].to_lowercase().as_str() {
            "facet" => {
                in_facet = true;
                // A normal follows; the pipeline recomputes its own.
            }
            "outer" => {
                if parts.len() >= 2 && parts[1].eq_ignore_ascii_case("loop") {
                    in_loop = true;
                    vertices.clear();
                }
            }
            "vertex" => {
                if in_loop && parts.len() >= 4 {
                    let x: f32 = parts[1].parse()?;
                    let y: f32 = parts[2].parse()?;
                    let z: f32 = parts[3].parse()?;
                    vertices.push(Point3::new(x, y, z));
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if in_facet && vertices.len() == 3 {
                    triangles.push(Triangle::new(vertices[0], vertices[1], vertices[2]));
                }
                in_facet = false;
            }
            "endsolid" => {
                break;
            }
            _ => {
                // Ignore unknown lines
            }
        }
    }

    Ok(triangles)
}
