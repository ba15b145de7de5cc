use crate::core::bit_coder::ByteWriter;
use crate::core::mesh::{Ele, Node};
use crate::core::shared::ConfigType;
use thiserror::Error;

/// Number of corners of a linear tetrahedron. The binary layout has no field
/// for the element order, so this is the only primitive it can describe.
pub(crate) const TETRA_CORNERS: u32 = 4;

#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// The node attribute channel exported as the per-point scalar. Index 0
    /// is accepted even when the node carries no attributes; the scalar
    /// channel is zero-filled in that case.
    pub attribute_idx: u32,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self { attribute_idx: 0 }
    }
}

#[remain::sorted]
#[derive(Error, Debug)]
pub enum Err {
    #[error("attribute index for this node file must be less than {0}")]
    AttributeIndexOutOfRange(u32),

    #[error("node dimension needs to be 3, got {0}")]
    UnsupportedDimension(u32),

    #[error("nodes per tetrahedron needs to be 4, got {0}")]
    UnsupportedTetrahedronOrder(u32),

    #[error("Validation error: {0}")]
    ValidationError(#[from] crate::core::mesh::Err),
}

/// Encodes a node/ele pair into the binary mesh layout using the provided
/// byte stream. The node must be 3D and the elements linear tetrahedra; the
/// scalar channel is taken from the attribute selected by `cfg`.
pub fn encode<W>(node: &Node, ele: &Ele, writer: &mut W, cfg: Config) -> Result<(), Err>
where
    W: ByteWriter,
{
    node.validate()?;
    ele.validate()?;

    if cfg.attribute_idx != 0 && cfg.attribute_idx >= node.num_attributes {
        return Err(Err::AttributeIndexOutOfRange(node.num_attributes));
    }
    if node.dimension != 3 {
        return Err(Err::UnsupportedDimension(node.dimension));
    }
    if ele.nodes_per_tetrahedron != TETRA_CORNERS {
        return Err(Err::UnsupportedTetrahedronOrder(ele.nodes_per_tetrahedron));
    }

    let num_points = node.num_points as usize;
    let num_indices = ele.num_tetrahedra as usize * TETRA_CORNERS as usize;

    // Header
    writer.write_u32(TETRA_CORNERS);
    writer.write_u32(node.num_points);
    writer.write_u32(num_indices as u32);

    // Point data, copied verbatim. The reader may have appended rows past the
    // declared count; only the declared rows are exported.
    for value in &node.points[..num_points * 3] {
        writer.write_f32(*value);
    }

    // Scalar data, one value per point from the selected attribute channel.
    let num_attributes = node.num_attributes as usize;
    for i in 0..num_points {
        let scalar = if num_attributes > 0 {
            node.attributes[i * num_attributes + cfg.attribute_idx as usize]
        } else {
            0.0
        };
        writer.write_f32(scalar);
    }

    // Indices are already 0-based in memory.
    for index in &ele.nodes[..num_indices] {
        writer.write_u32(*index);
    }

    Ok(())
}

/// Encodes raw point/scalar/index arrays into the binary mesh layout, with no
/// validation beyond what the sequence lengths imply. The point count is
/// derived as `points.len() / 3`, truncating; the caller is responsible for
/// supplying a multiple of three.
pub fn encode_raw<W>(
    points: &[f32],
    scalars: &[f32],
    indices: &[u32],
    points_per_primitive: u32,
    writer: &mut W,
) where
    W: ByteWriter,
{
    writer.write_u32(points_per_primitive);
    writer.write_u32((points.len() / 3) as u32);
    writer.write_u32(indices.len() as u32);

    for value in points {
        writer.write_f32(*value);
    }
    for value in scalars {
        writer.write_f32(*value);
    }
    for index in indices {
        writer.write_u32(*index);
    }
}
