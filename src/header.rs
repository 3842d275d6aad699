use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::PlyError;

const END_HEADER: &str = "end_header";

type DirectiveSetter = fn(&mut MeshHeader, &str) -> Result<(), PlyError>;

/// Declaration lines recognised in the header, matched by substring in order.
/// The first match wins and the rest of the table is skipped for that line.
const DIRECTIVES: &[(&str, DirectiveSetter)] = &[
    ("element vertex ", set_vertex_count),
    ("property float x", mark_vertices),
    ("property float nx", mark_normals),
    ("element face ", set_face_count),
    ("property list uchar int vertex_indices", mark_faces),
    ("property list uchar float texcoord", mark_uv_mapping),
];

/// What the header says is in the binary body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshHeader {
    pub has_vertices: bool,
    pub has_normals: bool,
    pub has_faces: bool,
    pub has_uv_mapping: bool,
    pub vertex_count: usize,
    pub face_count: usize,
}

impl MeshHeader {
    /// Scan header lines up to and including `end_header`.
    ///
    /// Leaves `reader` positioned at the first byte of the binary body. Lines
    /// that match no directive are ignored, so `ply`, `format` and `comment`
    /// lines pass through untouched.
    pub fn parse<R: BufRead>(reader: &mut R) -> Result<Self, PlyError> {
        let mut header = MeshHeader::default();
        let mut raw = Vec::new();

        loop {
            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(PlyError::MissingEndHeader);
            }
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end();

            if let Some((_, setter)) = DIRECTIVES
                .iter()
                .find(|(pattern, _)| line.contains(pattern))
            {
                setter(&mut header, line)?;
                continue;
            }

            if line.contains(END_HEADER) {
                break;
            }
        }

        tracing::debug!(
            "PLY header: {} vertices (positions: {}, normals: {}), {} faces (indices: {}, uv: {})",
            header.vertex_count,
            header.has_vertices,
            header.has_normals,
            header.face_count,
            header.has_faces,
            header.has_uv_mapping,
        );

        Ok(header)
    }

    /// Reject headers whose sections cannot be laid out in the body.
    pub fn validate(&self) -> Result<(), PlyError> {
        if self.has_normals && !self.has_vertices {
            return Err(PlyError::NormalsWithoutVertices);
        }
        if self.has_uv_mapping && !self.has_faces {
            return Err(PlyError::UvWithoutFaces);
        }
        Ok(())
    }

    /// Floats per vertex record: positions then normals.
    pub fn floats_per_vertex(&self) -> usize {
        (if self.has_vertices { 3 } else { 0 }) + (if self.has_normals { 3 } else { 0 })
    }

    pub fn has_vertex_section(&self) -> bool {
        self.has_vertices || self.has_normals
    }

    pub fn has_face_section(&self) -> bool {
        self.has_faces || self.has_uv_mapping
    }
}

fn parse_count(line: &str) -> Result<usize, PlyError> {
    let token = line.split_whitespace().last().unwrap_or_default();
    token
        .parse::<usize>()
        .map_err(|_| PlyError::InvalidHeader(format!("Invalid element count: {line}")))
}

fn set_vertex_count(header: &mut MeshHeader, line: &str) -> Result<(), PlyError> {
    header.vertex_count = parse_count(line)?;
    Ok(())
}

fn set_face_count(header: &mut MeshHeader, line: &str) -> Result<(), PlyError> {
    header.face_count = parse_count(line)?;
    Ok(())
}

fn mark_vertices(header: &mut MeshHeader, _line: &str) -> Result<(), PlyError> {
    header.has_vertices = true;
    Ok(())
}

fn mark_normals(header: &mut MeshHeader, _line: &str) -> Result<(), PlyError> {
    header.has_normals = true;
    Ok(())
}

fn mark_faces(header: &mut MeshHeader, _line: &str) -> Result<(), PlyError> {
    header.has_faces = true;
    Ok(())
}

fn mark_uv_mapping(header: &mut MeshHeader, _line: &str) -> Result<(), PlyError> {
    header.has_uv_mapping = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_parse_full_header() {
        let header_text = "ply
format binary_little_endian 1.0
comment generated by avatar pipeline
element vertex 4
property float x
property float y
property float z
property float nx
property float ny
property float nz
element face 2
property list uchar int vertex_indices
property list uchar float texcoord
end_header
";
        let mut cursor = Cursor::new(header_text);
        let header = MeshHeader::parse(&mut cursor).unwrap();

        assert_eq!(
            header,
            MeshHeader {
                has_vertices: true,
                has_normals: true,
                has_faces: true,
                has_uv_mapping: true,
                vertex_count: 4,
                face_count: 2,
            }
        );
        assert_eq!(header.floats_per_vertex(), 6);
    }

    #[test]
    fn test_reader_left_at_body() {
        let mut data = b"ply\nelement vertex 1\nproperty float x\nend_header\n".to_vec();
        data.extend_from_slice(&[0xAB, 0xCD]);
        let mut cursor = Cursor::new(data);
        MeshHeader::parse(&mut cursor).unwrap();

        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![0xAB, 0xCD]);
    }

    #[test]
    fn test_crlf_and_order_independence() {
        let header_text =
            "ply\r\nproperty list uchar int vertex_indices\r\nelement face 7\r\nproperty float x\r\nelement vertex 12\r\nend_header\r\n";
        let header = MeshHeader::parse(&mut Cursor::new(header_text)).unwrap();
        assert_eq!(header.vertex_count, 12);
        assert_eq!(header.face_count, 7);
        assert!(header.has_vertices);
        assert!(header.has_faces);
        assert!(!header.has_normals);
        assert!(!header.has_uv_mapping);
    }

    #[test]
    fn test_unknown_lines_ignored() {
        let header_text = "ply\nobj_info scanner v2\nproperty uchar red\nelement vertex 3\nend_header\n";
        let header = MeshHeader::parse(&mut Cursor::new(header_text)).unwrap();
        assert_eq!(header.vertex_count, 3);
        assert!(!header.has_vertices);
    }

    #[test]
    fn test_missing_end_header() {
        let header_text = "ply\nelement vertex 3\nproperty float x\n";
        let result = MeshHeader::parse(&mut Cursor::new(header_text));
        assert!(matches!(result, Err(PlyError::MissingEndHeader)));
    }

    #[test]
    fn test_bad_count() {
        let header_text = "ply\nelement vertex lots\nend_header\n";
        let result = MeshHeader::parse(&mut Cursor::new(header_text));
        assert!(matches!(result, Err(PlyError::InvalidHeader(_))));
    }

    #[test]
    fn test_validate_rejects_orphan_sections() {
        let normals_only = MeshHeader {
            has_normals: true,
            ..Default::default()
        };
        assert!(matches!(
            normals_only.validate(),
            Err(PlyError::NormalsWithoutVertices)
        ));

        let uv_only = MeshHeader {
            has_uv_mapping: true,
            ..Default::default()
        };
        assert!(matches!(uv_only.validate(), Err(PlyError::UvWithoutFaces)));
    }
}
