use crate::core::bit_coder::ByteReader;
use crate::core::mesh::BinaryMesh;

#[remain::sorted]
#[derive(thiserror::Error, Debug)]
pub enum Err {
    #[error("Reader error: {0}")]
    ReaderError(#[from] crate::core::bit_coder::ReaderErr),
}

/// Decodes the binary mesh layout from the provided byte stream: the
/// three-word header, then `num_points * 3` coordinates, `num_points`
/// scalars, and `num_indices` indices. A truncated stream fails with a
/// reader error; the output buffers are never zero-padded.
pub fn decode<R>(reader: &mut R) -> Result<BinaryMesh, Err>
where
    R: ByteReader,
{
    let points_per_primitive = reader.read_u32()?;
    let num_points = reader.read_u32()? as usize;
    let num_indices = reader.read_u32()? as usize;

    let mut points = Vec::new();
    for _ in 0..num_points * 3 {
        points.push(reader.read_f32()?);
    }

    let mut scalars = Vec::new();
    for _ in 0..num_points {
        scalars.push(reader.read_f32()?);
    }

    let mut indices = Vec::new();
    for _ in 0..num_indices {
        indices.push(reader.read_u32()?);
    }

    Ok(BinaryMesh {
        points_per_primitive,
        points,
        scalars,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bit_coder::{ByteWriter, ReaderErr};
    use crate::encode::encode_raw;

    #[test]
    fn raw_round_trip_is_exact() {
        let points = vec![0.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let scalars = vec![0.5_f32, 1.5, 2.5];
        let indices = vec![0_u32, 1, 2];

        let mut buffer = Vec::new();
        encode_raw(&points, &scalars, &indices, 3, &mut buffer);

        let mut reader = buffer.into_iter();
        let mesh = decode(&mut reader).unwrap();
        assert_eq!(mesh.points_per_primitive, 3);
        assert_eq!(mesh.points, points);
        assert_eq!(mesh.scalars, scalars);
        assert_eq!(mesh.indices, indices);
        assert!(reader.next().is_none());
    }

    #[test]
    fn truncated_stream_fails() {
        let mut buffer = Vec::new();
        encode_raw(&[0.0, 0.0, 0.0], &[1.0], &[0], 1, &mut buffer);
        buffer.truncate(buffer.len() - 2);

        let mut reader = buffer.into_iter();
        let err = decode(&mut reader).unwrap_err();
        assert!(matches!(err, Err::ReaderError(ReaderErr::NotEnoughData)));
    }

    #[test]
    fn empty_body_decodes() {
        let mut buffer = Vec::new();
        buffer.write_u32(4);
        buffer.write_u32(0);
        buffer.write_u32(0);

        let mut reader = buffer.into_iter();
        let mesh = decode(&mut reader).unwrap();
        assert_eq!(mesh.points_per_primitive, 4);
        assert_eq!(mesh.num_points(), 0);
        assert_eq!(mesh.num_indices(), 0);
    }
}
