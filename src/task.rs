use crate::{
    data::LabeledGraph,
    search::{mine, MiningResult},
};
use derive_more::Display;
use log::info;
use std::{str::FromStr, time::Instant};

#[derive(Debug, Display, Clone, PartialEq)]
pub enum Error {
    #[display(fmt = "invalid minimum support: {:?}", _0)]
    InvalidSupport(String),
    #[display(fmt = "minimum support must be positive: {}", _0)]
    NonPositiveSupport(String),
    #[display(fmt = "fractional minimum support above 1: {}", _0)]
    FractionAboveOne(f64),
}

impl std::error::Error for Error {}

/// The minimum support threshold, either relative to the database size or
/// absolute.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Fraction(f64),
    Count(usize),
}

impl MinSupport {
    /// The minimum number of occurrences over a database of `num_graphs` graphs.
    pub fn min_frequency(&self, num_graphs: usize) -> usize {
        match *self {
            MinSupport::Fraction(f) => ((f * num_graphs as f64).floor() as usize).max(1),
            MinSupport::Count(c) => c.max(1),
        }
    }
}

/// Integer text is an absolute count, decimal text a fraction in `(0, 1]`.
impl FromStr for MinSupport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(count) = s.parse::<i64>() {
            return match count {
                c if c > 0 => Ok(MinSupport::Count(c as usize)),
                _ => Err(Error::NonPositiveSupport(s.to_string())),
            };
        }
        let fraction = s
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| Error::InvalidSupport(s.to_string()))?;
        if fraction <= 0.0 {
            Err(Error::NonPositiveSupport(s.to_string()))
        } else if fraction > 1.0 {
            Err(Error::FractionAboveOne(fraction))
        } else {
            Ok(MinSupport::Fraction(fraction))
        }
    }
}

/// A configured mining run over a graph database.
pub struct Task<'a> {
    graphs: &'a [LabeledGraph],
    min_support: MinSupport,
    allow_cycles: bool,
    allow_trees: bool,
}

impl<'a> Task<'a> {
    pub fn new(graphs: &'a [LabeledGraph], min_support: MinSupport) -> Self {
        Self {
            graphs,
            min_support,
            allow_cycles: true,
            allow_trees: true,
        }
    }

    pub fn allow_cycles(mut self, allow_cycles: bool) -> Self {
        self.allow_cycles = allow_cycles;
        self
    }

    pub fn allow_trees(mut self, allow_trees: bool) -> Self {
        self.allow_trees = allow_trees;
        self
    }

    pub fn min_frequency(&self) -> usize {
        self.min_support.min_frequency(self.graphs.len())
    }

    pub fn run(&self) -> MiningResult {
        let min_frequency = self.min_frequency();
        info!(
            "mining {} graphs, min_frequency: {}, cycles: {}, trees: {}",
            self.graphs.len(),
            min_frequency,
            self.allow_cycles,
            self.allow_trees
        );
        let start = Instant::now();
        let result = mine(
            self.graphs,
            min_frequency,
            self.allow_cycles,
            self.allow_trees,
        );
        info!(
            "{} frequent patterns in {:?}",
            result.len(),
            start.elapsed()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::FragmentKind;

    #[test]
    fn test_parse_min_support() {
        assert_eq!("2".parse::<MinSupport>(), Ok(MinSupport::Count(2)));
        assert_eq!(" 0.5 ".parse::<MinSupport>(), Ok(MinSupport::Fraction(0.5)));
        assert_eq!("1.0".parse::<MinSupport>(), Ok(MinSupport::Fraction(1.0)));
        assert_eq!(
            "0".parse::<MinSupport>(),
            Err(Error::NonPositiveSupport(String::from("0")))
        );
        assert_eq!(
            "-0.2".parse::<MinSupport>(),
            Err(Error::NonPositiveSupport(String::from("-0.2")))
        );
        assert_eq!(
            "1.5".parse::<MinSupport>(),
            Err(Error::FractionAboveOne(1.5))
        );
        assert_eq!(
            "often".parse::<MinSupport>(),
            Err(Error::InvalidSupport(String::from("often")))
        );
        assert!("NaN".parse::<MinSupport>().is_err());
    }

    #[test]
    fn test_min_frequency() {
        assert_eq!(MinSupport::Count(3).min_frequency(10), 3);
        assert_eq!(MinSupport::Fraction(0.5).min_frequency(10), 5);
        assert_eq!(MinSupport::Fraction(0.55).min_frequency(10), 5);
        assert_eq!(MinSupport::Fraction(0.1).min_frequency(3), 1);
        assert_eq!(MinSupport::Fraction(1.0).min_frequency(0), 1);
    }

    #[test]
    fn test_task() {
        let mut g = LabeledGraph::new(0);
        g.add_vertex(1, 0);
        g.add_vertex(2, 0);
        g.add_vertex(3, 0);
        g.add_edge(1, 2, 0);
        g.add_edge(2, 3, 0);
        g.add_edge(3, 1, 0);
        let graphs = [g];
        let task = Task::new(&graphs, MinSupport::Fraction(1.0));
        assert_eq!(task.min_frequency(), 1);
        let counts = task.run().kind_counts();
        assert_eq!(counts.get(&FragmentKind::Cycle), Some(&1));
        let counts = Task::new(&graphs, MinSupport::Count(1))
            .allow_cycles(false)
            .run()
            .kind_counts();
        assert_eq!(counts.get(&FragmentKind::Cycle), None);
        assert_eq!(counts.get(&FragmentKind::Path), Some(&2));
    }
}
