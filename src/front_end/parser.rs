use super::{
    error::{Error, Result},
    labels::normalize_label,
    GraphDatabase, LabelDictionary,
};
use crate::{
    data::LabeledGraph,
    types::{GraphId, VId},
};
use itertools::Itertools;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::{fs, path::Path};

pub type LineGraphRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct LineGraphParser;

enum Record {
    Header(Option<GraphId>),
    Vertex(VId, String),
    Edge(VId, VId, String),
}

impl Record {
    fn label(&self) -> Option<&str> {
        match self {
            Record::Header(_) => None,
            Record::Vertex(_, text) | Record::Edge(_, _, text) => Some(text),
        }
    }
}

/// Parse a line-graph database.
///
/// Graphs without an id in their header are numbered by position.
pub fn parse(input: &str) -> Result<GraphDatabase> {
    let records = parse_records(input)?;
    let labels = LabelDictionary::from_texts(records.iter().filter_map(|(_, r)| r.label()));
    let label = |text: &str| {
        labels
            .label(text)
            .unwrap_or_else(|| unreachable!("label {:?} was not collected", text))
    };
    let mut graphs: Vec<LabeledGraph> = vec![];
    for (line, record) in &records {
        let line = *line;
        if let Record::Header(id) = record {
            graphs.push(LabeledGraph::new(id.unwrap_or(graphs.len() as GraphId)));
            continue;
        }
        let graph = graphs.last_mut().ok_or(Error::MissingHeader { line })?;
        match record {
            Record::Vertex(vid, text) => {
                if !graph.add_vertex(*vid, label(text)) {
                    return Err(Error::DuplicateVertex { line, vid: *vid });
                }
            }
            Record::Edge(src, dst, text) => {
                if let Some(&vid) = [src, dst].into_iter().find(|&&v| !graph.contains(v)) {
                    return Err(Error::UndeclaredVertex { line, vid });
                }
                if !graph.add_edge(*src, *dst, label(text)) {
                    return Err(Error::InvalidEdge {
                        line,
                        src: *src,
                        dst: *dst,
                    });
                }
            }
            Record::Header(_) => unreachable!(),
        }
    }
    Ok(GraphDatabase::new(graphs, labels))
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<GraphDatabase> {
    parse(&fs::read_to_string(path)?)
}

fn parse_records(input: &str) -> Result<Vec<(usize, Record)>> {
    let database = LineGraphParser::parse(Rule::database, input)?.next().unwrap();
    let mut records = vec![];
    for pair in database.into_inner() {
        let line = line_of(&pair);
        let record = match pair.as_rule() {
            Rule::header => Record::Header(pair.into_inner().next().map(parse_int).transpose()?),
            Rule::vertex => {
                let (vid, label) = pair.into_inner().collect_tuple().unwrap();
                Record::Vertex(parse_int(vid)?, normalize_label(label.as_str()))
            }
            Rule::edge => {
                let (src, dst, label) = pair.into_inner().collect_tuple().unwrap();
                Record::Edge(
                    parse_int(src)?,
                    parse_int(dst)?,
                    normalize_label(label.as_str()),
                )
            }
            Rule::EOI => continue,
            _ => unreachable!(),
        };
        records.push((line, record));
    }
    Ok(records)
}

fn line_of(pair: &Pair<Rule>) -> usize {
    pair.as_span().start_pos().line_col().0
}

fn parse_int(pair: Pair<Rule>) -> Result<i64> {
    pair.as_str().parse().map_err(|_| Error::InvalidNumber {
        line: line_of(&pair),
        text: pair.as_str().to_string(),
    })
}
