use crate::de::val_reader::ScalarReader;
use crate::de::{Element, Sections};
use crate::{MeshHeader, PlyError, Uv, Vec3};

/// Only triangles are supported.
const CORNERS: u8 = 3;
const UV_FLOATS: u8 = CORNERS * 2;

// Counts come from an untrusted header; grow past this only as records arrive.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Read `vertex_count` records of interleaved positions and normals.
pub(crate) fn read_vertices<S: ScalarReader>(
    reader: &mut S,
    header: &MeshHeader,
    load: Sections,
) -> Result<(Option<Vec<Vec3>>, Option<Vec<Vec3>>), PlyError> {
    let capacity = header.vertex_count.min(MAX_PREALLOCATED);
    let mut vertices = load.vertices.then(|| Vec::with_capacity(capacity));
    let mut normals = load.normals.then(|| Vec::with_capacity(capacity));

    let floats = header.floats_per_vertex();
    let mut record = [0.0f32; 6];
    for i in 0..header.vertex_count {
        reader.at(Element::Vertex, i);
        reader.read_f32_into(&mut record[..floats])?;

        if let Some(vertices) = vertices.as_mut() {
            vertices.push([record[0], record[1], record[2]]);
        }
        if let Some(normals) = normals.as_mut() {
            normals.push([record[3], record[4], record[5]]);
        }
    }

    Ok((vertices, normals))
}

/// Read `face_count` triangle records.
///
/// Every record is consumed in full according to the header, whatever was
/// requested, so the stream stays aligned.
pub(crate) fn read_faces<S: ScalarReader>(
    reader: &mut S,
    header: &MeshHeader,
    load: Sections,
) -> Result<(Option<Vec<u32>>, Option<Vec<[Uv; 3]>>), PlyError> {
    let capacity = header.face_count.min(MAX_PREALLOCATED);
    let mut faces = load.faces.then(|| Vec::with_capacity(capacity * 3));
    let mut uv_mapping = load.uv_mapping.then(|| Vec::with_capacity(capacity));

    for face in 0..header.face_count {
        reader.at(Element::Face, face);

        let found = reader.read_u8()?;
        if found != CORNERS {
            return Err(PlyError::CornerCount { face, found });
        }

        let mut indices = [0i32; 3];
        for index in indices.iter_mut() {
            *index = reader.read_i32()?;
        }
        if let Some(faces) = faces.as_mut() {
            for index in indices {
                let index =
                    u32::try_from(index).map_err(|_| PlyError::NegativeVertexIndex { face, index })?;
                faces.push(index);
            }
        }

        if header.has_uv_mapping {
            let found = reader.read_u8()?;
            if found != UV_FLOATS {
                return Err(PlyError::UvCornerCount { face, found });
            }

            let mut values = [0.0f32; UV_FLOATS as usize];
            reader.read_f32_into(&mut values)?;
            if let Some(uv_mapping) = uv_mapping.as_mut() {
                uv_mapping.push([
                    [values[0], 1.0 - values[1]],
                    [values[2], 1.0 - values[3]],
                    [values[4], 1.0 - values[5]],
                ]);
            }
        }
    }

    Ok((faces, uv_mapping))
}
