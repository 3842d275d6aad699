use crate::{PlyError, Uv};

/// Check that `faces` is a triangle list with one UV entry per triangle.
pub(crate) fn check_triangles(faces: &[u32], face_uv: &[[Uv; 3]]) -> Result<(), PlyError> {
    if faces.len() % 3 != 0 {
        return Err(PlyError::IncompleteTriangle { len: faces.len() });
    }
    if faces.len() / 3 != face_uv.len() {
        return Err(PlyError::FaceUvMismatch {
            triangles: faces.len() / 3,
            uv_entries: face_uv.len(),
        });
    }
    Ok(())
}

/// Reverse the winding of every triangle by swapping its second and third
/// corners, together with their UVs.
///
/// Converts between left- and right-handed conventions. Applying it twice is
/// a no-op. Nothing is touched if the arrays do not line up.
pub fn flip_normals(faces: &mut [u32], face_uv: &mut [[Uv; 3]]) -> Result<(), PlyError> {
    check_triangles(faces, face_uv)?;

    for (face, uv) in faces.chunks_exact_mut(3).zip(face_uv.iter_mut()) {
        face.swap(1, 2);
        uv.swap(1, 2);
    }
    Ok(())
}
