use thiserror::Error;

use crate::de::{Element, Section};

#[derive(Error, Debug)]
pub enum PlyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PLY header: {0}")]
    InvalidHeader(String),

    #[error("Stream ended before end_header")]
    MissingEndHeader,

    #[error("Unexpected end of stream in {element} record {index}")]
    UnexpectedEof { element: Element, index: usize },

    #[error("Face {face} has {found} corners, only triangles are supported")]
    CornerCount { face: usize, found: u8 },

    #[error("Face {face} has {found} texture coordinates, expected 6")]
    UvCornerCount { face: usize, found: u8 },

    #[error("Header declares normals without vertex positions")]
    NormalsWithoutVertices,

    #[error("Header declares uv mapping without faces")]
    UvWithoutFaces,

    #[error("Face {face} references negative vertex index {index}")]
    NegativeVertexIndex { face: usize, index: i32 },

    #[error("Vertex index {index} out of range for {vertex_count} vertices")]
    VertexIndexOutOfRange { index: u32, vertex_count: usize },

    #[error("Face array length {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    #[error("{triangles} triangles but {uv_entries} uv entries")]
    FaceUvMismatch { triangles: usize, uv_entries: usize },

    #[error("Attribute count mismatch: expected {expected}, found {found}")]
    AttributeCount { expected: usize, found: usize },

    #[error("Index map slot {slot} points forward to {target}")]
    InvalidIndexMap { slot: usize, target: u32 },

    #[error("Mesh was loaded without {0}")]
    MissingSection(Section),
}
