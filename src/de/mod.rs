mod body;
pub(crate) mod val_reader;

use std::fmt;
use std::io::{BufRead, Cursor};

use serde::{Deserialize, Serialize};

use crate::de::val_reader::BinValReader;
use crate::{MeshHeader, PlyError, Uv, Vec3};

/// Record kinds in the binary body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Vertex,
    Face,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Vertex => write!(f, "vertex"),
            Element::Face => write!(f, "face"),
        }
    }
}

/// Optional outputs of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Vertices,
    Normals,
    Faces,
    UvMapping,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Vertices => write!(f, "vertices"),
            Section::Normals => write!(f, "normals"),
            Section::Faces => write!(f, "faces"),
            Section::UvMapping => write!(f, "uv mapping"),
        }
    }
}

/// Which sections the caller wants loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub vertices: bool,
    pub normals: bool,
    pub faces: bool,
    pub uv_mapping: bool,
}

impl Sections {
    pub const ALL: Sections = Sections {
        vertices: true,
        normals: true,
        faces: true,
        uv_mapping: true,
    };

    /// Positions only, as for a point cloud.
    pub const POSITIONS: Sections = Sections {
        vertices: true,
        normals: false,
        faces: false,
        uv_mapping: false,
    };

    /// Positions, faces and per-corner UVs: everything `reindex` needs.
    pub const TEXTURED: Sections = Sections {
        vertices: true,
        normals: false,
        faces: true,
        uv_mapping: true,
    };

    /// Drop requests the header cannot satisfy and list what was dropped.
    fn restrict_to(&mut self, header: &MeshHeader) -> Vec<Section> {
        let mut missing = Vec::new();
        let checks = [
            (&mut self.vertices, header.has_vertices, Section::Vertices),
            (&mut self.normals, header.has_normals, Section::Normals),
            (&mut self.faces, header.has_faces, Section::Faces),
            (&mut self.uv_mapping, header.has_uv_mapping, Section::UvMapping),
        ];
        for (wanted, present, section) in checks {
            if *wanted && !present {
                tracing::warn!("{section} requested but not present in mesh file, skipping");
                *wanted = false;
                missing.push(section);
            }
        }
        missing
    }
}

/// Result of parsing a binary PLY stream.
///
/// A section is `Some` only if it was requested and the header declared it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlyMesh {
    pub header: MeshHeader,
    pub vertices: Option<Vec<Vec3>>,
    pub normals: Option<Vec<Vec3>>,
    /// Flat triangle list, three vertex indices per face.
    pub faces: Option<Vec<u32>>,
    /// One UV per face corner, in the same order as `faces`. V is flipped on load.
    pub uv_mapping: Option<Vec<[Uv; 3]>>,
    /// Requested sections the header did not declare.
    pub missing: Vec<Section>,
}

impl PlyMesh {
    /// Replace vertex positions with a separately loaded set.
    ///
    /// Normals are dropped since they no longer describe the new positions.
    pub fn with_positions(mut self, positions: Vec<Vec3>) -> Self {
        self.vertices = Some(positions);
        self.normals = None;
        self
    }
}

/// Parse a binary little-endian PLY mesh, loading only the requested sections.
pub fn from_reader<R: BufRead>(mut reader: R, wanted: Sections) -> Result<PlyMesh, PlyError> {
    let header = MeshHeader::parse(&mut reader)?;
    header.validate()?;

    let mut load = wanted;
    let missing = load.restrict_to(&header);

    let mut val_reader = BinValReader::new(reader);
    let mut mesh = PlyMesh {
        header,
        missing,
        ..Default::default()
    };

    if header.has_vertex_section() {
        let (vertices, normals) = body::read_vertices(&mut val_reader, &header, load)?;
        mesh.vertices = vertices;
        mesh.normals = normals;
    }

    if header.has_face_section() && (load.faces || load.uv_mapping) {
        let (faces, uv_mapping) = body::read_faces(&mut val_reader, &header, load)?;
        mesh.faces = faces;
        mesh.uv_mapping = uv_mapping;
    }

    Ok(mesh)
}

pub fn from_bytes(bytes: &[u8], wanted: Sections) -> Result<PlyMesh, PlyError> {
    from_reader(Cursor::new(bytes), wanted)
}

/// Load only vertex positions, e.g. from a point cloud file.
pub fn load_points<R: BufRead>(reader: R) -> Result<Vec<Vec3>, PlyError> {
    let mesh = from_reader(reader, Sections::POSITIONS)?;
    mesh.vertices.ok_or(PlyError::MissingSection(Section::Vertices))
}
