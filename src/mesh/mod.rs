mod reindex;
mod units;
mod winding;

pub use reindex::{reindex, remap_attribute, Reindexed, UNASSIGNED_UV};
pub use units::{scale_vertices, DEFAULT_UNIT_SCALE};
pub use winding::flip_normals;
