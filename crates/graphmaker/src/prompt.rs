// File: crates/graphmaker/src/prompt.rs
// Summary: Sequential interactive prompts that gather output name, style choices and CSV text.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use graph_core::{png_filename, Background, ChartError, ColorScheme, GraphType};

/// Everything the user chose, in prompt order.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub filename: String,
    pub scheme: ColorScheme,
    pub graph_type: GraphType,
    pub title: String,
    pub background: Background,
    pub csv: String,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run all six prompts. Stops at the first invalid answer.
    pub fn collect(&mut self) -> Result<Preferences> {
        let filename = self.filename()?;
        let scheme = self.color_scheme()?;
        let graph_type = self.graph_type()?;
        let title = self.title()?;
        let background = self.background()?;
        let csv = self.csv_data()?;
        tracing::debug!(%filename, scheme = scheme.name(), graph = graph_type.label(), ?background, "collected preferences");
        Ok(Preferences { filename, scheme, graph_type, title, background, csv })
    }

    pub fn filename(&mut self) -> Result<String> {
        let name = self.ask("Enter the desired filename (without extension): ")?;
        Ok(png_filename(&name))
    }

    pub fn color_scheme(&mut self) -> Result<ColorScheme> {
        writeln!(self.output, "\nSelect a color scheme by number:")?;
        for (i, s) in ColorScheme::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, s.name())?;
        }
        let answer = self.ask("Enter your choice (1-5): ")?;
        Ok(ColorScheme::from_choice(parse_choice(&answer, "color scheme")?)?)
    }

    pub fn graph_type(&mut self) -> Result<GraphType> {
        writeln!(self.output, "\nSelect a type of graph by number:")?;
        for (i, g) in GraphType::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, g.label())?;
        }
        let answer = self.ask("Enter your choice (1-3): ")?;
        Ok(GraphType::from_choice(parse_choice(&answer, "graph type")?)?)
    }

    pub fn title(&mut self) -> Result<String> {
        self.ask("Enter the desired title for the graph: ")
    }

    pub fn background(&mut self) -> Result<Background> {
        writeln!(self.output, "\nSelect a background color by number:")?;
        for b in Background::ALL {
            writeln!(self.output, "{}. {}", b.key(), b.name())?;
        }
        let answer = self.ask("Enter your choice (1-2): ")?;
        Ok(Background::from_choice(&answer)?)
    }

    /// Lines up to the first empty line (or end of input), joined with `\n`.
    pub fn csv_data(&mut self) -> Result<String> {
        writeln!(self.output, "\nEnter your CSV data (press Enter twice to finish):")?;
        self.output.flush()?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()?.context("unexpected end of input")
    }

    /// One line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

fn parse_choice(answer: &str, menu: &'static str) -> Result<usize, ChartError> {
    answer
        .trim()
        .parse::<usize>()
        .map_err(|_| ChartError::InvalidSelection { menu, input: answer.to_string() })
}
