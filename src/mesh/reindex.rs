use serde::{Deserialize, Serialize};

use crate::mesh::winding::check_triangles;
use crate::{PlyError, Uv, Vec3};

/// UV reported for vertex slots no face corner references.
pub const UNASSIGNED_UV: Uv = [-1.0, -1.0];

/// Vertex layout with exactly one UV per vertex slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reindexed {
    pub vertices: Vec<Vec3>,
    pub uv: Vec<Uv>,
    /// For each slot, the slot it was copied from. Identity for original slots.
    pub index_map: Vec<u32>,
}

impl Reindexed {
    /// Number of slots appended past the original vertices.
    pub fn duplicate_count(&self, original_count: usize) -> usize {
        self.vertices.len().saturating_sub(original_count)
    }
}

/// Split vertices whose face corners disagree on UV so that every slot
/// carries a single UV pair.
///
/// Original vertices keep their slots; each extra UV seen on a vertex appends
/// one duplicate slot, chained from the slot that spawned it. Corners are
/// visited in face order (0, 1, 2 within a face), which fixes which duplicate
/// gets which UV. `faces` is rewritten to point at the resolved slots.
///
/// All indices are checked before `faces` is modified.
pub fn reindex(
    original_vertices: &[Vec3],
    face_uv: &[[Uv; 3]],
    faces: &mut [u32],
) -> Result<Reindexed, PlyError> {
    check_triangles(faces, face_uv)?;
    let original_count = original_vertices.len();
    if let Some(&index) = faces.iter().find(|&&i| i as usize >= original_count) {
        return Err(PlyError::VertexIndexOutOfRange {
            index,
            vertex_count: original_count,
        });
    }

    // Per slot: assigned UV, next duplicate in the chain, and the slot it came from.
    let mut slot_uv: Vec<Option<Uv>> = vec![None; original_count];
    let mut next_duplicate: Vec<Option<u32>> = vec![None; original_count];
    let mut index_map: Vec<u32> = (0..original_count as u32).collect();

    for (face, corner_uv) in faces.chunks_exact_mut(3).zip(face_uv) {
        for (corner, &uv) in face.iter_mut().zip(corner_uv) {
            let mut slot = *corner as usize;
            loop {
                let assigned = slot_uv[slot];
                match assigned {
                    None => {
                        slot_uv[slot] = Some(uv);
                        break;
                    }
                    Some(existing) if existing == uv => break,
                    Some(_) => {
                        slot = match next_duplicate[slot] {
                            Some(duplicate) => duplicate as usize,
                            None => {
                                let duplicate = slot_uv.len();
                                slot_uv.push(None);
                                next_duplicate.push(None);
                                index_map.push(slot as u32);
                                next_duplicate[slot] = Some(duplicate as u32);
                                duplicate
                            }
                        };
                    }
                }
            }
            *corner = slot as u32;
        }
    }

    // Duplicates always sit after the slot that spawned them.
    let mut vertices = Vec::with_capacity(index_map.len());
    vertices.extend_from_slice(original_vertices);
    for &source in &index_map[original_count..] {
        let position = vertices[source as usize];
        vertices.push(position);
    }

    let uv = slot_uv
        .into_iter()
        .map(|uv| uv.unwrap_or(UNASSIGNED_UV))
        .collect();

    tracing::debug!(
        "Reindexed mesh: {} vertices before, {} after",
        original_count,
        vertices.len()
    );

    Ok(Reindexed {
        vertices,
        uv,
        index_map,
    })
}

/// Expand a per-original-vertex attribute (normals, colors, ...) to the
/// slot layout produced by [`reindex`].
pub fn remap_attribute<T: Copy>(values: &[T], index_map: &[u32]) -> Result<Vec<T>, PlyError> {
    // Identity prefix covers the original vertices.
    let original_count = index_map
        .iter()
        .enumerate()
        .take_while(|&(i, &source)| i == source as usize)
        .count();
    if values.len() < original_count {
        return Err(PlyError::AttributeCount {
            expected: original_count,
            found: values.len(),
        });
    }

    let mut remapped = Vec::with_capacity(index_map.len());
    remapped.extend_from_slice(&values[..original_count]);
    for (slot, &source) in index_map.iter().enumerate().skip(original_count) {
        // Chains only point backwards, so the source slot is already filled.
        let value = remapped
            .get(source as usize)
            .copied()
            .ok_or(PlyError::InvalidIndexMap {
                slot,
                target: source,
            })?;
        remapped.push(value);
    }
    Ok(remapped)
}
