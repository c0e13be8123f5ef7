#![forbid(unsafe_code)]

//! Output collaborator interface. Plotting back ends live outside this
//! workspace; [`TextRenderer`] writes a plain best-first table.

use std::io::{self, Write};

use crate::ranking::{Ranking, ScoreOrder};

/// Consumer of finished rankings, e.g. a chart or report writer.
pub trait ScoreRenderer {
    fn render(&mut self, ranking: &Ranking, label: &str) -> io::Result<()>;
}

/// Writes `rank  alternative  score` lines to any [`Write`] sink.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    decimals: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, decimals: 3 }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScoreRenderer for TextRenderer<W> {
    fn render(&mut self, ranking: &Ranking, label: &str) -> io::Result<()> {
        let direction = match ranking.order() {
            ScoreOrder::HigherIsBetter => "higher is better",
            ScoreOrder::LowerIsBetter => "lower is better",
        };
        writeln!(self.out, "{label} ({direction})")?;
        for entry in ranking.entries() {
            writeln!(
                self.out,
                "{:>4}  a{:<4} {:.*}",
                entry.rank,
                entry.alternative + 1,
                self.decimals,
                entry.score
            )?;
        }
        Ok(())
    }
}
