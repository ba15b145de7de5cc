use std::fs;
use std::path::Path;

use super::{ele, node, Err};
use crate::core::mesh::BinaryMesh;
use crate::{decode, encode};

/// Converts a node/ele file pair into the binary mesh format.
///
/// `attribute_idx` selects the node attribute channel exported as the
/// per-point scalar; 0 is accepted even when the node file carries no
/// attributes, in which case the scalar channel is zero-filled. The node must
/// be 3D and the elements linear tetrahedra.
pub fn write_node_ele_as_binary(
    node_path: impl AsRef<Path>,
    ele_path: impl AsRef<Path>,
    attribute_idx: u32,
    binary_path: impl AsRef<Path>,
) -> Result<(), Err> {
    let ele = ele::read_ele(ele_path)?;
    let node = node::read_node(node_path)?;

    let mut buffer = Vec::new();
    encode::encode(&node, &ele, &mut buffer, encode::Config { attribute_idx })?;

    let binary_path = binary_path.as_ref();
    fs::write(binary_path, buffer).map_err(|source| Err::io(binary_path, source))
}

/// Writes raw point/scalar/index data to a binary mesh file without going
/// through the text formats, e.g. for procedurally generated geometry.
pub fn write_to_binary(
    points: &[f32],
    scalars: &[f32],
    indices: &[u32],
    points_per_primitive: u32,
    binary_path: impl AsRef<Path>,
) -> Result<(), Err> {
    let mut buffer = Vec::new();
    encode::encode_raw(points, scalars, indices, points_per_primitive, &mut buffer);

    let binary_path = binary_path.as_ref();
    fs::write(binary_path, buffer).map_err(|source| Err::io(binary_path, source))
}

/// Reads a binary mesh file in full. A file shorter than its header promises
/// fails with a decode error rather than yielding zero-padded buffers.
pub fn read_binary(path: impl AsRef<Path>) -> Result<BinaryMesh, Err> {
    let path = path.as_ref();
    super::check_exists(path)?;

    let bytes = fs::read(path).map_err(|source| Err::io(path, source))?;
    let mut reader = bytes.into_iter();
    Ok(decode::decode(&mut reader)?)
}
