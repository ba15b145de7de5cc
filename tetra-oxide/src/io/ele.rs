use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::{text, Err};
use crate::core::mesh::Ele;

/// Reads an ASCII ele file.
///
/// The first non-comment line is the header, exactly three integers:
/// `num_tetrahedra nodes_per_tetrahedron num_attributes`. Every further
/// non-comment line is one element row: an ignored label, the vertex indices,
/// then the attributes. Indices are 1-based on disk and 0-based in memory.
/// Rows past the declared `num_tetrahedra` are parsed and appended all the
/// same, mirroring the node reader's leniency.
pub fn read_ele(path: impl AsRef<Path>) -> Result<Ele, Err> {
    let path = path.as_ref();
    super::check_exists(path)?;

    let file = File::open(path).map_err(|source| Err::io(path, source))?;
    let reader = BufReader::new(file);

    let mut ele = Ele::default();
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
            if integers.len() != 3 {
                return Err(Err::format(path, line_number, "must contain 3 integers"));
            }
            if integers[0] <= 0 {
                return Err(Err::format(
                    path,
                    line_number,
                    "number of tetrahedra must be greater than 0",
                ));
            }
            if !(integers[1] == 4 || integers[1] == 10) {
                return Err(Err::format(
                    path,
                    line_number,
                    "nodes per tetrahedron must be 4 (corners only) or 10 (corners and edges)",
                ));
            }
            if integers[2] < 0 {
                return Err(Err::format(
                    path,
                    line_number,
                    "number of attributes must be greater than or equal to 0",
                ));
            }

            ele.num_tetrahedra = integers[0] as u32;
            ele.nodes_per_tetrahedron = integers[1] as u32;
            ele.num_attributes = integers[2] as u32;
            header_read = true;
        } else {
            let floats = text::number_prefix::<f32>(line);
            let nodes_per = ele.nodes_per_tetrahedron as usize;
            let expected = 1 + nodes_per + ele.num_attributes as usize;
            if floats.len() != expected {
                return Err(Err::format(
                    path,
                    line_number,
                    format!("must contain {expected} numbers"),
                ));
            }

            // Indices come in as floats and are truncated to unsigned;
            // precision tops out at 2^24.
            for value in &floats[1..1 + nodes_per] {
                ele.nodes.push((*value as u32).wrapping_sub(1));
            }
            for value in &floats[1 + nodes_per..] {
                ele.attributes.push(*value);
            }
        }
    }

    Ok(ele)
}

/// Writes an ASCII ele file: the header line, then one row per declared
/// element with its index as the leading label. Vertex indices are
/// re-incremented to the on-disk 1-based convention.
pub fn write_ele(path: impl AsRef<Path>, ele: &Ele) -> Result<(), Err> {
    let path = path.as_ref();
    ele.validate()?;

    let file = File::create(path).map_err(|source| Err::io(path, source))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "{} {} {}",
        ele.num_tetrahedra, ele.nodes_per_tetrahedron, ele.num_attributes
    )
    .map_err(|source| Err::io(path, source))?;

    let nodes_per = ele.nodes_per_tetrahedron as usize;
    let num_attributes = ele.num_attributes as usize;

    for i in 0..ele.num_tetrahedra as usize {
        let mut row = i.to_string();
        for index in &ele.nodes[i * nodes_per..(i + 1) * nodes_per] {
            row.push(' ');
            row.push_str(&index.wrapping_add(1).to_string());
        }
        for value in &ele.attributes[i * num_attributes..(i + 1) * num_attributes] {
            row.push(' ');
            row.push_str(&value.to_string());
        }
        writeln!(writer, "{row}").map_err(|source| Err::io(path, source))?;
    }

    Ok(())
}
