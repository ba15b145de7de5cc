use thiserror::Error;

/// A point cloud read from (or written to) a `.node` file. Coordinates are
/// stored interleaved, `dimension` values per point, with `num_attributes`
/// scalars and `num_boundary_markers` marker values per point alongside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub num_points: u32,
    // Must be 2 or 3
    pub dimension: u32,
    pub num_attributes: u32,
    // Must be 0 or 1
    pub num_boundary_markers: u32,
    pub points: Vec<f32>,
    pub attributes: Vec<f32>,
    pub boundary_markers: Vec<f32>,
}

impl Node {
    /// Checks the header ranges and that the data vectors can supply
    /// `num_points` rows. The reader is lenient about row counts, so the
    /// vectors may legitimately hold more than the declared number of rows;
    /// holding fewer is an error.
    pub fn validate(&self) -> Result<(), Err> {
        if self.num_points == 0 {
            return Err(Err::NoPoints);
        }
        if !(self.dimension == 2 || self.dimension == 3) {
            return Err(Err::InvalidDimension(self.dimension));
        }
        if !(self.num_boundary_markers == 0 || self.num_boundary_markers == 1) {
            return Err(Err::InvalidBoundaryMarkers(self.num_boundary_markers));
        }

        let num_points = self.num_points as usize;
        let needed = num_points * self.dimension as usize;
        if self.points.len() < needed {
            return Err(Err::PointDataTooShort(self.points.len(), needed));
        }
        let needed = num_points * self.num_attributes as usize;
        if self.attributes.len() < needed {
            return Err(Err::PointAttributeDataTooShort(self.attributes.len(), needed));
        }
        let needed = num_points * self.num_boundary_markers as usize;
        if self.boundary_markers.len() < needed {
            return Err(Err::PointBoundaryMarkerDataTooShort(
                self.boundary_markers.len(),
                needed,
            ));
        }
        Ok(())
    }
}

/// A set of tetrahedra read from (or written to) a `.ele` file. Vertex
/// indices are stored flattened, `nodes_per_tetrahedron` per element, and are
/// 0-based in memory (the text format is 1-based on disk).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ele {
    pub num_tetrahedra: u32,
    // Must be 4 (corners only) or 10 (corners and edges)
    pub nodes_per_tetrahedron: u32,
    pub num_attributes: u32,
    pub nodes: Vec<u32>,
    pub attributes: Vec<f32>,
}

impl Ele {
    /// Checks the header ranges and that the data vectors can supply
    /// `num_tetrahedra` rows.
    pub fn validate(&self) -> Result<(), Err> {
        if self.num_tetrahedra == 0 {
            return Err(Err::NoTetrahedra);
        }
        if !(self.nodes_per_tetrahedron == 4 || self.nodes_per_tetrahedron == 10) {
            return Err(Err::InvalidNodesPerTetrahedron(self.nodes_per_tetrahedron));
        }

        let num_tetrahedra = self.num_tetrahedra as usize;
        let needed = num_tetrahedra * self.nodes_per_tetrahedron as usize;
        if self.nodes.len() < needed {
            return Err(Err::EleNodeDataTooShort(self.nodes.len(), needed));
        }
        let needed = num_tetrahedra * self.num_attributes as usize;
        if self.attributes.len() < needed {
            return Err(Err::EleAttributeDataTooShort(self.attributes.len(), needed));
        }
        Ok(())
    }
}

/// The decoded form of the binary mesh layout: 3D points, one scalar per
/// point, and a flattened 0-based index buffer. The on-disk layout has no
/// version tag, no checksum, and no padding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryMesh {
    pub points_per_primitive: u32,
    pub points: Vec<f32>,
    pub scalars: Vec<f32>,
    pub indices: Vec<u32>,
}

impl BinaryMesh {
    pub fn num_points(&self) -> usize {
        self.points.len() / 3
    }

    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }
}

#[remain::sorted]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("ele.attributes must hold at least num_tetrahedra * num_attributes values; got {0}, need {1}")]
    EleAttributeDataTooShort(usize, usize),

    #[error("ele.nodes must hold at least num_tetrahedra * nodes_per_tetrahedron values; got {0}, need {1}")]
    EleNodeDataTooShort(usize, usize),

    #[error("node.num_boundary_markers must be 0 or 1, got {0}")]
    InvalidBoundaryMarkers(u32),

    #[error("node.dimension must be 2 or 3, got {0}")]
    InvalidDimension(u32),

    #[error("ele.nodes_per_tetrahedron must be 4 or 10, got {0}")]
    InvalidNodesPerTetrahedron(u32),

    #[error("node.num_points must be greater than 0")]
    NoPoints,

    #[error("ele.num_tetrahedra must be greater than 0")]
    NoTetrahedra,

    #[error("node.attributes must hold at least num_points * num_attributes values; got {0}, need {1}")]
    PointAttributeDataTooShort(usize, usize),

    #[error("node.boundary_markers must hold at least num_points * num_boundary_markers values; got {0}, need {1}")]
    PointBoundaryMarkerDataTooShort(usize, usize),

    #[error("node.points must hold at least num_points * dimension values; got {0}, need {1}")]
    PointDataTooShort(usize, usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_tetra_node() -> Node {
        Node {
            num_points: 4,
            dimension: 3,
            num_attributes: 1,
            num_boundary_markers: 0,
            points: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
            attributes: vec![5.0, 6.0, 7.0, 8.0],
            boundary_markers: vec![],
        }
    }

    #[test]
    fn valid_node_passes() {
        unit_tetra_node().validate().unwrap();
    }

    #[test]
    fn node_header_ranges() {
        let mut node = unit_tetra_node();
        node.num_points = 0;
        assert_eq!(node.validate(), Err(Err::NoPoints));

        let mut node = unit_tetra_node();
        node.dimension = 4;
        assert_eq!(node.validate(), Err(Err::InvalidDimension(4)));

        let mut node = unit_tetra_node();
        node.num_boundary_markers = 2;
        assert_eq!(node.validate(), Err(Err::InvalidBoundaryMarkers(2)));
    }

    #[test]
    fn node_data_lengths() {
        let mut node = unit_tetra_node();
        node.points.pop();
        assert_eq!(node.validate(), Err(Err::PointDataTooShort(11, 12)));

        let mut node = unit_tetra_node();
        node.attributes.clear();
        assert_eq!(
            node.validate(),
            Err(Err::PointAttributeDataTooShort(0, 4))
        );

        let mut node = unit_tetra_node();
        node.num_boundary_markers = 1;
        assert_eq!(
            node.validate(),
            Err(Err::PointBoundaryMarkerDataTooShort(0, 4))
        );
    }

    #[test]
    fn extra_rows_are_allowed() {
        let mut node = unit_tetra_node();
        node.points.extend_from_slice(&[2.0, 2.0, 2.0]);
        node.attributes.push(9.0);
        node.validate().unwrap();
    }

    #[test]
    fn ele_validation() {
        let ele = Ele {
            num_tetrahedra: 1,
            nodes_per_tetrahedron: 4,
            num_attributes: 0,
            nodes: vec![0, 1, 2, 3],
            attributes: vec![],
        };
        ele.validate().unwrap();

        let mut bad = ele.clone();
        bad.num_tetrahedra = 0;
        assert_eq!(bad.validate(), Err(Err::NoTetrahedra));

        let mut bad = ele.clone();
        bad.nodes_per_tetrahedron = 5;
        assert_eq!(
            bad.validate(),
            Err(Err::InvalidNodesPerTetrahedron(5))
        );

        let mut bad = ele.clone();
        bad.nodes.pop();
        assert_eq!(bad.validate(), Err(Err::EleNodeDataTooShort(3, 4)));

        let mut bad = ele;
        bad.num_attributes = 2;
        assert_eq!(
            bad.validate(),
            Err(Err::EleAttributeDataTooShort(0, 2))
        );
    }
}
