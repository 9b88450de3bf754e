//! `tempo-output` — document writers for tempo layouts.
//!
//! | Backend       | Output                                                   |
//! |---------------|----------------------------------------------------------|
//! | [`TikzWriter`]| standalone LaTeX/TikZ source, one page per layout        |
//! | [`CsvWriter`] | one row per drawing primitive                            |
//!
//! Both implement [`LayoutWriter`]; [`render`] runs one layout pass over a
//! schedule and hands the primitives to a writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tempo_output::{render, TikzWriter};
//!
//! let mut writer = TikzWriter::create(Path::new("week.tex"))?;
//! render(&schedule, &mut writer)?;
//! ```
//!
//! Compiling the `.tex` source to PDF is left to the local TeX installation
//! (`pdflatex week.tex`).

pub mod csv;
pub mod error;
pub mod tikz;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use tikz::TikzWriter;
pub use writer::{LayoutWriter, render};
