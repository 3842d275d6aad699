//! In-memory binary PLY fixtures.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};

/// Builds a binary little-endian PLY in the avatar pipeline's layout.
#[derive(Default)]
pub struct PlyBuilder {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub faces: Vec<[i32; 3]>,
    /// Raw (u, v) per corner as stored in the file, before the V flip.
    pub uv: Option<Vec<[f32; 6]>>,
    pub write_positions: bool,
    pub write_faces: bool,
}

impl PlyBuilder {
    pub fn new() -> Self {
        Self {
            write_positions: true,
            write_faces: true,
            ..Default::default()
        }
    }

    pub fn vertices(mut self, vertices: &[[f32; 3]]) -> Self {
        self.vertices = vertices.to_vec();
        self
    }

    pub fn normals(mut self, normals: &[[f32; 3]]) -> Self {
        self.normals = Some(normals.to_vec());
        self
    }

    pub fn faces(mut self, faces: &[[i32; 3]]) -> Self {
        self.faces = faces.to_vec();
        self
    }

    pub fn uv(mut self, uv: &[[f32; 6]]) -> Self {
        self.uv = Some(uv.to_vec());
        self
    }

    pub fn header(&self) -> String {
        let mut header = String::from("ply\nformat binary_little_endian 1.0\ncomment fixture\n");
        header += &format!("element vertex {}\n", self.vertices.len());
        if self.write_positions {
            header += "property float x\nproperty float y\nproperty float z\n";
        }
        if self.normals.is_some() {
            header += "property float nx\nproperty float ny\nproperty float nz\n";
        }
        header += &format!("element face {}\n", self.faces.len());
        if self.write_faces {
            header += "property list uchar int vertex_indices\n";
        }
        if self.uv.is_some() {
            header += "property list uchar float texcoord\n";
        }
        header += "end_header\n";
        header
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.header().into_bytes();
        for (i, v) in self.vertices.iter().enumerate() {
            for c in v {
                out.write_f32::<LittleEndian>(*c).unwrap();
            }
            if let Some(normals) = &self.normals {
                for c in normals[i] {
                    out.write_f32::<LittleEndian>(c).unwrap();
                }
            }
        }
        for (i, face) in self.faces.iter().enumerate() {
            out.write_u8(3).unwrap();
            for index in face {
                out.write_i32::<LittleEndian>(*index).unwrap();
            }
            if let Some(uv) = &self.uv {
                out.write_u8(6).unwrap();
                for t in uv[i] {
                    out.write_f32::<LittleEndian>(t).unwrap();
                }
            }
        }
        out
    }
}

/// Unit square as two triangles sharing the 1-2 edge.
pub const SQUARE: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
];

pub const SQUARE_FACES: [[i32; 3]; 2] = [[0, 1, 2], [2, 1, 3]];

/// File-space UVs matching the square's positions, so shared corners agree.
pub const SQUARE_UV: [[f32; 6]; 2] = [
    [0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 0.0, 1.0, 1.0],
];
