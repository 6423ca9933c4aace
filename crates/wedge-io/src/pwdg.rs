//! PWDG wedge file format support.
//!
//! A wedge file is a fixed-layout little-endian byte stream:
//!
//! ```text
//! UINT8[4]     - Signature, ASCII "PWDG"
//! INT32        - Format version (currently 1)
//! INT32        - Wedge count N (>= 0)
//! INT64        - Unix timestamp in seconds, UTC, informational only
//! foreach wedge
//!     REAL32[3] - Position x, y, z
//!     REAL32[3] - Rotation x, y, z (Euler degrees)
//!     REAL32[3] - Scale x, y, z
//! end
//! ```
//!
//! Total size is exactly `20 + 36 * N` bytes. Every field is written and
//! read explicitly in the documented order; nothing relies on struct
//! memory layout, so the stream is stable across platforms and compiler
//! versions. Decoding is the bit-exact inverse of encoding: no value is
//! transformed on either side.

use std::fs;
use std::path::Path;

use wedge_types::{Point3, Vector3, Wedge};

use crate::error::{IoError, IoResult};

/// The four-byte magic marker identifying a wedge file.
pub const SIGNATURE: [u8; 4] = *b"PWDG";

/// The format version this codec reads and writes.
pub const VERSION: i32 = 1;

/// Header size in bytes: signature + version + count + timestamp.
pub const HEADER_SIZE: usize = 20;

/// Size of one wedge record in bytes (9 little-endian f32 values).
pub const RECORD_SIZE: usize = 36;

/// Encode wedges into a PWDG byte stream.
///
/// The header timestamp is captured at encode time (Unix seconds, UTC).
/// Use [`encode_with_timestamp`] when the output must be reproducible.
///
/// # Example
///
/// ```
/// use wedge_io::{encode, HEADER_SIZE, RECORD_SIZE};
/// use wedge_types::{Point3, Vector3, Wedge};
///
/// let wedges = vec![Wedge::new(
///     Point3::new(1.0, 2.0, 3.0),
///     Vector3::new(90.0, 0.0, 0.0),
///     Vector3::new(0.0, 0.5, 1.0),
/// )];
///
/// let bytes = encode(&wedges);
/// assert_eq!(bytes.len(), HEADER_SIZE + RECORD_SIZE);
/// ```
#[must_use]
pub fn encode(wedges: &[Wedge]) -> Vec<u8> {
    encode_with_timestamp(wedges, chrono::Utc::now().timestamp())
}

/// Encode wedges into a PWDG byte stream with an explicit timestamp.
#[must_use]
pub fn encode_with_timestamp(wedges: &[Wedge], timestamp: i64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + RECORD_SIZE * wedges.len());

    bytes.extend_from_slice(&SIGNATURE);
    bytes.extend_from_slice(&VERSION.to_le_bytes());
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    // Truncation: the format caps counts at i32, batches beyond 2B wedges
    // are unsupported
    let count = wedges.len() as i32;
    bytes.extend_from_slice(&count.to_le_bytes());
    bytes.extend_from_slice(&timestamp.to_le_bytes());

    for wedge in wedges {
        write_vector(&mut bytes, wedge.pos.x, wedge.pos.y, wedge.pos.z);
        write_vector(&mut bytes, wedge.rot.x, wedge.rot.y, wedge.rot.z);
        write_vector(&mut bytes, wedge.scale.x, wedge.scale.y, wedge.scale.z);
    }

    bytes
}

/// Append three little-endian f32 values.
fn write_vector(bytes: &mut Vec<u8>, x: f32, y: f32, z: f32) {
    bytes.extend_from_slice(&x.to_le_bytes());
    bytes.extend_from_slice(&y.to_le_bytes());
    bytes.extend_from_slice(&z.to_le_bytes());
}

/// Decode a PWDG byte stream into wedges.
///
/// The header timestamp is read past and ignored. Trailing bytes after the
/// declared records are ignored.
///
/// # Errors
///
/// - [`IoError::InvalidSignature`] if the stream does not start with
///   `"PWDG"`
/// - [`IoError::UnsupportedVersion`] if the version field is not `1`
/// - [`IoError::InvalidCount`] if the count field is negative
/// - [`IoError::UnexpectedEof`] if the buffer is shorter than the header
///   plus the declared records
///
/// # Example
///
/// ```
/// use wedge_io::{decode, encode};
/// use wedge_types::{Point3, Vector3, Wedge};
///
/// let wedges = vec![Wedge::new(
///     Point3::new(1.0, 2.0, 3.0),
///     Vector3::new(0.0, 0.5, 1.0),
///     Vector3::new(0.0, 1.0, 1.0),
/// )];
///
/// let decoded = decode(&encode(&wedges)).unwrap();
/// assert_eq!(decoded, wedges);
/// ```
pub fn decode(bytes: &[u8]) -> IoResult<Vec<Wedge>> {
    if bytes.len() < HEADER_SIZE {
        return Err(IoError::UnexpectedEof {
            needed: HEADER_SIZE,
            got: bytes.len(),
        });
    }

    let found = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if found != SIGNATURE {
        return Err(IoError::InvalidSignature { found });
    }

    let version = i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != VERSION {
        return Err(IoError::UnsupportedVersion { version });
    }

    let count = i32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    if count < 0 {
        return Err(IoError::InvalidCount { count });
    }
    #[allow(clippy::cast_sign_loss)]
    // Sign loss: count is validated non-negative above
    let count = count as usize;

    // Bytes 12..20 hold the informational timestamp; skip it.

    let needed = HEADER_SIZE + RECORD_SIZE * count;
    if bytes.len() < needed {
        return Err(IoError::UnexpectedEof {
            needed,
            got: bytes.len(),
        });
    }

    let mut wedges = Vec::with_capacity(count);
    for i in 0..count {
        let record = &bytes[HEADER_SIZE + RECORD_SIZE * i..HEADER_SIZE + RECORD_SIZE * (i + 1)];
        let pos = read_vector(&record[0..12]);
        let rot = read_vector(&record[12..24]);
        let scale = read_vector(&record[24..36]);
        wedges.push(Wedge::new(Point3::from(pos), rot, scale));
    }

    Ok(wedges)
}

/// Read three little-endian f32 values from 12 bytes.
fn read_vector(buf: &[u8]) -> Vector3<f32> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vector3::new(x, y, z)
}

/// Save wedges to a PWDG file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
///
/// # Example
///
/// ```no_run
/// use wedge_io::save_wedges;
///
/// save_wedges(&[], "empty.pwdg").unwrap();
/// ```
pub fn save_wedges<P: AsRef<Path>>(wedges: &[Wedge], path: P) -> IoResult<()> {
    fs::write(path, encode(wedges))?;
    Ok(())
}

/// Load wedges from a PWDG file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not a
/// valid version-1 wedge stream.
///
/// # Example
///
/// ```no_run
/// use wedge_io::load_wedges;
///
/// let wedges = load_wedges("model.pwdg").unwrap();
/// println!("Loaded {} wedges", wedges.len());
/// ```
pub fn load_wedges<P: AsRef<Path>>(path: P) -> IoResult<Vec<Wedge>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    decode(&bytes)
}
