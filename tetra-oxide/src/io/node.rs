use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::{text, Err};
use crate::core::mesh::Node;

/// Reads an ASCII node file.
///
/// The first non-comment line is the header, exactly four integers:
/// `num_points dimension num_attributes num_boundary_markers`. Every further
/// non-comment line is one point row whose leading token is an ignored label.
/// Rows past the declared `num_points` are parsed and appended all the same;
/// callers that need an exact count must check the vector lengths.
pub fn read_node(path: impl AsRef<Path>) -> Result<Node, Err> {
    let path = path.as_ref();
    super::check_exists(path)?;

    let file = File::open(path).map_err(|source| Err::io(path, source))?;
    let reader = BufReader::new(file);

    let mut node = Node::default();
    let mut header_read = false;
    let mut line_number = 0_u64;

    for line in reader.lines() {
        let line = line.map_err(|source| Err::io(path, source))?;
        line_number += 1;

        let Some(line) = text::clean(&line) else {
            continue;
        };

        if !header_read {
            let integers = text::number_prefix::<i64>(line);
            if integers.len() != 4 {
                return Err(Err::format(path, line_number, "must contain 4 integers"));
            }
            if integers[0] <= 0 {
                return Err(Err::format(
                    path,
                    line_number,
                    "number of points must be greater than 0",
                ));
            }
            if !(integers[1] == 2 || integers[1] == 3) {
                return Err(Err::format(path, line_number, "dimension must be 2 or 3"));
            }
            if integers[2] < 0 {
                return Err(Err::format(
                    path,
                    line_number,
                    "number of attributes must be greater than or equal to 0",
                ));
            }
            if !(integers[3] == 0 || integers[3] == 1) {
                return Err(Err::format(
                    path,
                    line_number,
                    "number of boundary markers must be 0 or 1",
                ));
            }

            node.num_points = integers[0] as u32;
            node.dimension = integers[1] as u32;
            node.num_attributes = integers[2] as u32;
            node.num_boundary_markers = integers[3] as u32;
            header_read = true;
        } else {
            let floats = text::number_prefix::<f32>(line);
            let dimension = node.dimension as usize;
            let num_attributes = node.num_attributes as usize;
            let num_markers = node.num_boundary_markers as usize;
            let expected = 1 + dimension + num_attributes + num_markers;
            if floats.len() != expected {
                return Err(Err::format(
                    path,
                    line_number,
                    format!("must contain {expected} numbers"),
                ));
            }

            // The leading token is the row label; skipped.
            let mut offset = 1;
            node.points.extend_from_slice(&floats[offset..offset + dimension]);
            offset += dimension;
            node.attributes
                .extend_from_slice(&floats[offset..offset + num_attributes]);
            offset += num_attributes;
            node.boundary_markers
                .extend_from_slice(&floats[offset..offset + num_markers]);
        }
    }

    Ok(node)
}

/// Writes an ASCII node file: the header line, then one row per declared
/// point with its index as the leading label. Extra data past `num_points`
/// rows is not emitted.
pub fn write_node(path: impl AsRef<Path>, node: &Node) -> Result<(), Err> {
    let path = path.as_ref();
    node.validate()?;

    let file = File::create(path).map_err(|source| Err::io(path, source))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "{} {} {} {}",
        node.num_points, node.dimension, node.num_attributes, node.num_boundary_markers
    )
    .map_err(|source| Err::io(path, source))?;

    let dimension = node.dimension as usize;
    let num_attributes = node.num_attributes as usize;
    let num_markers = node.num_boundary_markers as usize;

    for i in 0..node.num_points as usize {
        let mut row = i.to_string();
        for value in &node.points[i * dimension..(i + 1) * dimension] {
            row.push(' ');
            row.push_str(&value.to_string());
        }
        for value in &node.attributes[i * num_attributes..(i + 1) * num_attributes] {
            row.push(' ');
            row.push_str(&value.to_string());
        }
        for value in &node.boundary_markers[i * num_markers..(i + 1) * num_markers] {
            row.push(' ');
            row.push_str(&value.to_string());
        }
        writeln!(writer, "{row}").map_err(|source| Err::io(path, source))?;
    }

    Ok(())
}
