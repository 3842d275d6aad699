use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::de::{from_reader, PlyMesh, Section, Sections};
use crate::mesh::{flip_normals, reindex, remap_attribute, scale_vertices, DEFAULT_UNIT_SCALE};
use crate::{PlyError, Uv, Vec3};

/// How a loaded mesh is turned into a [`RenderMesh`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Reverse triangle winding before reindexing.
    pub flip_winding: bool,
    /// Applied to positions after reindexing.
    pub unit_scale: f32,
    /// Load vertex normals and remap them onto the reindexed slots.
    pub load_normals: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            flip_winding: true,
            unit_scale: DEFAULT_UNIT_SCALE,
            load_normals: false,
        }
    }
}

impl ConvertOptions {
    /// Sections to request from the reader.
    pub fn sections(&self) -> Sections {
        Sections {
            normals: self.load_normals,
            ..Sections::TEXTURED
        }
    }
}

/// Mesh with one UV per vertex, ready for a renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderMesh {
    pub vertices: Vec<Vec3>,
    /// Triangle list into `vertices`.
    pub faces: Vec<u32>,
    pub uv: Vec<Uv>,
    /// Slot each vertex was copied from; identity for original vertices.
    pub index_map: Vec<u32>,
    pub normals: Option<Vec<Vec3>>,
}

impl RenderMesh {
    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 3
    }
}

/// Flip, reindex and rescale a parsed mesh.
///
/// The mesh must carry vertices, faces and uv mapping. Normals, if present,
/// are expanded along with the positions.
pub fn convert(mesh: PlyMesh, options: &ConvertOptions) -> Result<RenderMesh, PlyError> {
    let vertices = mesh
        .vertices
        .ok_or(PlyError::MissingSection(Section::Vertices))?;
    let mut faces = mesh.faces.ok_or(PlyError::MissingSection(Section::Faces))?;
    let mut face_uv = mesh
        .uv_mapping
        .ok_or(PlyError::MissingSection(Section::UvMapping))?;

    if options.flip_winding {
        flip_normals(&mut faces, &mut face_uv)?;
    }

    let mut reindexed = reindex(&vertices, &face_uv, &mut faces)?;
    let normals = mesh
        .normals
        .map(|normals| remap_attribute(&normals, &reindexed.index_map))
        .transpose()?;

    scale_vertices(&mut reindexed.vertices, options.unit_scale);

    Ok(RenderMesh {
        vertices: reindexed.vertices,
        faces,
        uv: reindexed.uv,
        index_map: reindexed.index_map,
        normals,
    })
}

/// Parse a binary PLY stream and convert it in one go.
pub fn load_render_mesh<R: BufRead>(
    reader: R,
    options: &ConvertOptions,
) -> Result<RenderMesh, PlyError> {
    let mesh = from_reader(reader, options.sections())?;
    convert(mesh, options)
}
