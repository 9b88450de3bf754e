//! `LayoutGenerator` — one render pass over a [`Schedule`].
//!
//! # Drawing order
//!
//! 1. title, subtitle, logo (when configured)
//! 2. page frame
//! 3. day separators + day names, right edge, hour-column edge
//! 4. hour gridlines + `HH:00` labels, header-row rules
//! 5. one filled block per event, Sunday first, in start order
//!
//! The palette is shuffled once per pass, so a fixed seed gives identical
//! primitives for identical input.

use log::{info, warn};
use tempo_core::{PAGE_HEIGHT_CM, PAGE_WIDTH_CM, PaletteRng};
use tempo_schedule::Schedule;

use crate::{FontSize, GridGeometry, Layout, NodeContent, PaletteAssigner, Point, Primitive};

/// Vertical placement of the title and subtitle, as fractions of the top margin.
const TITLE_DROP: f64 = 0.5;
const SUBTITLE_DROP: f64 = 0.7;

pub struct LayoutGenerator<'a> {
    schedule: &'a Schedule,
    grid:     GridGeometry,
    palette:  PaletteAssigner,
    out:      Vec<Primitive>,
}

impl<'a> LayoutGenerator<'a> {
    /// Prepare a pass, shuffling the palette with `rng`.
    pub fn new(schedule: &'a Schedule, rng: &mut PaletteRng) -> Self {
        Self {
            schedule,
            grid: GridGeometry::new(schedule.config()),
            palette: PaletteAssigner::with_base_palette(rng),
            out: Vec::new(),
        }
    }

    /// Emit every primitive and return the finished page.
    pub fn generate(mut self) -> Layout {
        self.headings();
        self.out.push(Primitive::Frame {
            from: Point::new(0.0, 0.0),
            to:   Point::new(PAGE_WIDTH_CM, PAGE_HEIGHT_CM),
        });
        self.day_columns();
        self.hour_rows();
        self.events();

        info!(
            "layout: {} primitives, {} distinct labels",
            self.out.len(),
            self.palette.len()
        );
        Layout { width: PAGE_WIDTH_CM, height: PAGE_HEIGHT_CM, primitives: self.out }
    }

    // ── Sections ──────────────────────────────────────────────────────────

    fn headings(&mut self) {
        let schedule = self.schedule;
        let config = schedule.config();
        let top = config.margin_top;

        if let Some(title) = &config.title {
            self.out.push(Primitive::TextNode {
                at:      Point::new(0.5 * PAGE_WIDTH_CM, PAGE_HEIGHT_CM - TITLE_DROP * top),
                content: NodeContent::Text(title.clone()),
                size:    FontSize::Huge,
            });
        }
        if let Some(subtitle) = &config.subtitle {
            self.out.push(Primitive::TextNode {
                at:      Point::new(0.5 * PAGE_WIDTH_CM, PAGE_HEIGHT_CM - SUBTITLE_DROP * top),
                content: NodeContent::Text(subtitle.clone()),
                size:    FontSize::Large,
            });
        }
        if let Some(path) = &config.logo_path {
            let width = config.logo_width;
            self.out.push(Primitive::TextNode {
                at:      Point::new(self.grid.left + 0.5 * width, PAGE_HEIGHT_CM - TITLE_DROP * top),
                content: NodeContent::Image { path: path.clone(), width },
                size:    FontSize::Normal,
            });
        }
    }

    fn day_columns(&mut self) {
        let g = self.grid;
        let names = self.schedule.config().language.day_names();

        for (i, name) in names.iter().enumerate() {
            let x = g.column_x(i + 1);
            self.line((x, g.top()), (x, g.bottom));
            self.text(Point::new(x + 0.5 * g.dx, g.top() - 0.5 * g.dy), name);
        }
        // Right edge, then the hour-label column edge below the header row.
        self.line((g.right(), g.bottom), (g.right(), g.top()));
        self.line((g.left, g.bottom), (g.left, g.row_y(1)));
    }

    fn hour_rows(&mut self) {
        let g = self.grid;

        for j in 1..=g.hour_span as usize {
            let y = g.row_y(j + 1);
            let hour = g.start_hour as usize + j - 1;
            self.text(Point::new(g.left + 0.5 * g.dx, y + 0.5 * g.dy), &format!("{hour:02}:00"));
            self.line((g.left, y), (g.right(), y));
        }
        // Rule under the header row, then the top edge over the day columns.
        self.line((g.left, g.row_y(1)), (g.right(), g.row_y(1)));
        self.line((g.column_x(1), g.top()), (g.right(), g.top()));
    }

    fn events(&mut self) {
        let schedule = self.schedule;
        for event in schedule.days().iter().flat_map(|d| d.events()) {
            if event.is_zero_length() {
                continue;
            }
            if !self.grid.contains(event) {
                warn!(
                    "{} lies outside the {:02}:00 + {}h window",
                    event.describe(),
                    self.grid.start_hour,
                    self.grid.hour_span
                );
            }
            let (from, to) = self.grid.event_rect(event);
            let fill = self.palette.color_for(event.label());
            self.out.push(Primitive::FilledRect { from, to, fill, label: event.label().to_owned() });
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn line(&mut self, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) {
        self.out.push(Primitive::Line { from: Point::new(x0, y0), to: Point::new(x1, y1) });
    }

    fn text(&mut self, at: Point, text: &str) {
        self.out.push(Primitive::TextNode {
            at,
            content: NodeContent::Text(text.to_owned()),
            size:    FontSize::Normal,
        });
    }
}

// ── Extension trait ───────────────────────────────────────────────────────────

/// Adds `.layout()` to [`Schedule`].
pub trait ScheduleLayoutExt {
    /// One render pass using the configured seed (or entropy when unset).
    fn layout(&self) -> Layout;

    /// One render pass with an explicit palette RNG.
    fn layout_with(&self, rng: &mut PaletteRng) -> Layout;
}

impl ScheduleLayoutExt for Schedule {
    fn layout(&self) -> Layout {
        let mut rng = PaletteRng::from_seed_option(self.config().seed);
        self.layout_with(&mut rng)
    }

    fn layout_with(&self, rng: &mut PaletteRng) -> Layout {
        LayoutGenerator::new(self, rng).generate()
    }
}
