//! TikZ output backend.
//!
//! Writes a `standalone` LaTeX document with the `tikz` class option, so each
//! layout becomes one tightly cropped page.  Coordinates are centimetres
//! printed with two decimals.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempo_layout::{FontSize, Layout, NodeContent, Point, Primitive};

use crate::writer::LayoutWriter;
use crate::{OutputError, OutputResult};

const PREAMBLE: &str = "\
\\documentclass[tikz]{standalone}%
\\usepackage[T1]{fontenc}%
\\usepackage[utf8]{inputenc}%
\\usepackage[light,sfdefault]{firasans}%
\\usepackage{graphicx}%
\\begin{document}%
";

pub struct TikzWriter<W: Write> {
    out:      W,
    started:  bool,
    finished: bool,
}

impl TikzWriter<BufWriter<File>> {
    /// Create (or truncate) the `.tex` file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> TikzWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, started: false, finished: false }
    }

    /// Return the sink.  Call [`LayoutWriter::finish`] first.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn start(&mut self) -> OutputResult<()> {
        if !self.started {
            self.started = true;
            self.out.write_all(PREAMBLE.as_bytes())?;
        }
        Ok(())
    }

    fn primitive(&mut self, p: &Primitive) -> OutputResult<()> {
        let out = &mut self.out;
        match p {
            Primitive::Line { from, to } => {
                writeln!(out, "\\draw {} -- {};%", point(*from), point(*to))?;
            }
            Primitive::Frame { from, to } => {
                writeln!(out, "\\draw {} rectangle {};%", point(*from), point(*to))?;
            }
            Primitive::FilledRect { from, to, fill, label } => {
                writeln!(
                    out,
                    "\\draw [text width={}cm, align=center, fill={fill}] {} rectangle {} node[midway] {{{}}};%",
                    cm((to.x - from.x).abs()),
                    point(*from),
                    point(*to),
                    escape(label)
                )?;
            }
            Primitive::TextNode { at, content, size } => {
                let text = match content {
                    NodeContent::Text(t) => escape(t),
                    NodeContent::Image { path, width } => {
                        format!("\\includegraphics[width={}cm]{{{path}}}", cm(*width))
                    }
                };
                match size_command(*size) {
                    Some(cmd) => {
                        writeln!(out, "{cmd}%")?;
                        writeln!(out, "\\node at {} {{{text}}};%", point(*at))?;
                        writeln!(out, "\\normalsize%")?;
                    }
                    None => writeln!(out, "\\node at {} {{{text}}};%", point(*at))?,
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> LayoutWriter for TikzWriter<W> {
    fn write_layout(&mut self, layout: &Layout) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.start()?;
        writeln!(self.out, "\\begin{{tikzpicture}}%")?;
        for p in layout {
            self.primitive(p)?;
        }
        writeln!(self.out, "\\end{{tikzpicture}}%")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.start()?;
        self.finished = true;
        writeln!(self.out, "\\end{{document}}")?;
        self.out.flush()?;
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Two-decimal length, shared with the CSV backend.
pub(crate) fn cm(v: f64) -> String {
    format!("{v:.2}")
}

fn point(p: Point) -> String {
    format!("({}, {})", cm(p.x), cm(p.y))
}

fn size_command(size: FontSize) -> Option<&'static str> {
    match size {
        FontSize::Normal => None,
        FontSize::Large  => Some("\\Large"),
        FontSize::Huge   => Some("\\Huge"),
    }
}

/// Escape LaTeX special characters in user text.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '~'  => out.push_str("\\textasciitilde{}"),
            '^'  => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
