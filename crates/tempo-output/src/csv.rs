//! CSV output backend.
//!
//! One row per primitive:
//!
//! ```csv
//! kind,x1,y1,x2,y2,width,fill,size,text
//! frame,0.00,0.00,29.70,21.00,,,,
//! text,6.82,15.66,,,,,normal,Sunday
//! rect,8.43,13.26,11.64,12.58,3.21,blue!30,,Math
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tempo_layout::{Layout, NodeContent, Primitive};

use crate::OutputResult;
use crate::tikz::cm;
use crate::writer::LayoutWriter;

pub struct CsvWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn new(sink: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(sink);
        rows.write_record(["kind", "x1", "y1", "x2", "y2", "width", "fill", "size", "text"])?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.rows.flush()?;
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> LayoutWriter for CsvWriter<W> {
    fn write_layout(&mut self, layout: &Layout) -> OutputResult<()> {
        if self.finished {
            return Err(crate::OutputError::Finished);
        }
        for p in layout {
            let row: [String; 9] = match p {
                Primitive::Line { from, to } | Primitive::Frame { from, to } => [
                    p.kind().into(),
                    cm(from.x),
                    cm(from.y),
                    cm(to.x),
                    cm(to.y),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
                Primitive::FilledRect { from, to, fill, label } => [
                    p.kind().into(),
                    cm(from.x),
                    cm(from.y),
                    cm(to.x),
                    cm(to.y),
                    cm((to.x - from.x).abs()),
                    fill.to_string(),
                    String::new(),
                    label.clone(),
                ],
                Primitive::TextNode { at, content, size } => {
                    let (kind, width, text) = match content {
                        NodeContent::Text(t) => ("text", String::new(), t.clone()),
                        NodeContent::Image { path, width } => ("image", cm(*width), path.clone()),
                    };
                    [
                        kind.into(),
                        cm(at.x),
                        cm(at.y),
                        String::new(),
                        String::new(),
                        width,
                        String::new(),
                        size.as_str().into(),
                        text,
                    ]
                }
            };
            self.rows.write_record(&row)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
