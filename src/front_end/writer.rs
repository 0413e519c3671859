use super::LabelDictionary;
use crate::{data::LabeledGraph, types::VId};
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Write `graphs` in the line-graph format.
///
/// Vertices are renumbered from 0 in ascending id order and labels are written
/// through `labels`.
pub fn write<W: Write>(
    writer: &mut W,
    graphs: &[LabeledGraph],
    labels: &LabelDictionary,
) -> io::Result<()> {
    for graph in graphs {
        writeln!(writer, "t # {}", graph.id())?;
        let mut index = HashMap::<VId, usize>::with_capacity(graph.num_vertices());
        for (i, (vid, vlabel)) in graph.vertices().enumerate() {
            index.insert(vid, i);
            writeln!(writer, "v {} {}", i, labels.render(vlabel))?;
        }
        for (u1, u2, elabel) in graph.edges() {
            writeln!(
                writer,
                "e {} {} {}",
                index[&u1],
                index[&u2],
                labels.render(elabel)
            )?;
        }
    }
    Ok(())
}

pub fn write_file<P: AsRef<Path>>(
    path: P,
    graphs: &[LabeledGraph],
    labels: &LabelDictionary,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write(&mut writer, graphs, labels)?;
    writer.flush()
}
