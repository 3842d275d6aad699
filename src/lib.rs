//! Loader for triangle meshes stored as binary little-endian PLY, with
//! per-corner texture coordinates unwelded into per-vertex ones.
//!
//! Mesh formats often attach UVs to face corners while renderers want one UV
//! per vertex. This crate reads the fixed PLY dialect produced by the avatar
//! pipeline (positions, optional normals, triangle indices and a `texcoord`
//! list per face) and splits every vertex whose corners disagree on UV.
//!
//! # Example
//!
//! ```rust
//! use ply_unweld::{from_bytes, reindex, Sections};
//!
//! let mut ply = b"ply
//! format binary_little_endian 1.0
//! element vertex 3
//! property float x
//! property float y
//! property float z
//! element face 1
//! property list uchar int vertex_indices
//! property list uchar float texcoord
//! end_header
//! ".to_vec();
//! for v in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
//!     for c in v {
//!         ply.extend_from_slice(&c.to_le_bytes());
//!     }
//! }
//! ply.push(3);
//! for i in [0i32, 1, 2] {
//!     ply.extend_from_slice(&i.to_le_bytes());
//! }
//! ply.push(6);
//! for t in [0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0] {
//!     ply.extend_from_slice(&t.to_le_bytes());
//! }
//!
//! let mesh = from_bytes(&ply, Sections::TEXTURED).unwrap();
//! let vertices = mesh.vertices.unwrap();
//! let mut faces = mesh.faces.unwrap();
//! let out = reindex(&vertices, &mesh.uv_mapping.unwrap(), &mut faces).unwrap();
//! assert_eq!(out.uv.len(), out.vertices.len());
//! ```

mod convert;
pub mod de;
mod error;
mod header;
pub mod mesh;

pub use convert::{convert, load_render_mesh, ConvertOptions, RenderMesh};
pub use de::{from_bytes, from_reader, load_points, Element, PlyMesh, Section, Sections};
pub use error::PlyError;
pub use header::MeshHeader;
pub use mesh::{
    flip_normals, reindex, remap_attribute, scale_vertices, Reindexed, DEFAULT_UNIT_SCALE,
    UNASSIGNED_UV,
};

/// Position or normal.
pub type Vec3 = [f32; 3];

/// Texture coordinate pair.
pub type Uv = [f32; 2];
