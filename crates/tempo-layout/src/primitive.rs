//! Abstract drawing primitives consumed by rendering backends.

use crate::Color;

/// A position on the page, in centimetres from the bottom-left corner.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    Huge,
}

impl FontSize {
    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Normal => "normal",
            FontSize::Large  => "large",
            FontSize::Huge   => "huge",
        }
    }
}

/// What a text node displays.
#[derive(Clone, PartialEq, Debug)]
pub enum NodeContent {
    Text(String),
    /// An external image scaled to `width` cm.
    Image { path: String, width: f64 },
}

/// One drawing instruction.
#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    /// A straight stroke.
    Line { from: Point, to: Point },
    /// An unfilled rectangle outline between two opposite corners.
    Frame { from: Point, to: Point },
    /// An event block: a filled rectangle with its label centred inside and
    /// wrapped to the rectangle's width.
    FilledRect { from: Point, to: Point, fill: Color, label: String },
    /// Text (or an image) centred at `at`.
    TextNode { at: Point, content: NodeContent, size: FontSize },
}

impl Primitive {
    /// Short tag naming the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line { .. }       => "line",
            Primitive::Frame { .. }      => "frame",
            Primitive::FilledRect { .. } => "rect",
            Primitive::TextNode { .. }   => "text",
        }
    }
}

/// A complete page: fixed size plus primitives in drawing order.
#[derive(Clone, PartialEq, Debug)]
pub struct Layout {
    pub width:      f64,
    pub height:     f64,
    pub primitives: Vec<Primitive>,
}

impl Layout {
    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Plain-text node contents in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|p| match p {
            Primitive::TextNode { content: NodeContent::Text(t), .. } => Some(t.as_str()),
            _ => None,
        })
    }

    /// `(label, fill)` of every event block in drawing order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, Color)> {
        self.iter().filter_map(|p| match p {
            Primitive::FilledRect { label, fill, .. } => Some((label.as_str(), *fill)),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
