//! `GridGeometry` — maps weekdays and times of day onto page coordinates.
//!
//! With `w`/`h` the left/bottom margins, `W`/`H` the grid width/height,
//! `S` the first hour and `N` the hour span:
//!
//! ```text
//! dx = W / (7 + 1)                       column width (hour labels + 7 days)
//! dy = H / (N + 1)                       row height   (day names + N hours)
//! x(day)  = w + dx * (day + 1)
//! y(time) = h + H - dy * ((hour - S + minute / 60) + 1)
//! ```

use tempo_core::{ClockTime, HOUR_MINS, ScheduleConfig, WEEK_DAYS};
use tempo_schedule::Event;

use crate::Point;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GridGeometry {
    /// Left edge of the grid (left margin).
    pub left:       f64,
    /// Bottom edge of the grid (bottom margin).
    pub bottom:     f64,
    pub width:      f64,
    pub height:     f64,
    pub start_hour: u8,
    pub hour_span:  u8,
    /// Column width.
    pub dx:         f64,
    /// Row height.
    pub dy:         f64,
}

impl GridGeometry {
    pub fn new(config: &ScheduleConfig) -> Self {
        let width = config.grid_width();
        let height = config.grid_height();
        Self {
            left:       config.margin_left,
            bottom:     config.margin_bottom,
            width,
            height,
            start_hour: config.start_hour,
            hour_span:  config.hour_span,
            dx:         width / (WEEK_DAYS + 1) as f64,
            dy:         height / (config.hour_span as f64 + 1.0),
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }

    /// Left edge of column `col` (0 = hour labels, 1..=7 = days, 8 = right edge).
    #[inline]
    pub fn column_x(&self, col: usize) -> f64 {
        self.left + self.dx * col as f64
    }

    /// Top edge of row `row` (0 = day names, 1..=N = hours, N+1 = bottom edge).
    #[inline]
    pub fn row_y(&self, row: usize) -> f64 {
        self.top() - self.dy * row as f64
    }

    /// Vertical position of a time of day, linear within its hour row.
    /// Times outside the hour window map outside the grid.
    pub fn time_y(&self, time: ClockTime) -> f64 {
        let hours = time.as_hours() - self.start_hour as f64;
        self.top() - self.dy * (hours + 1.0)
    }

    /// Opposite corners `(top-left, bottom-right)` of the block for `event`,
    /// spanning the columns of every day in its range.
    pub fn event_rect(&self, event: &Event) -> (Point, Point) {
        let x0 = self.column_x(event.day_start() as usize + 1);
        let x1 = self.column_x(event.day_end() as usize + 1);
        (
            Point::new(x0, self.time_y(event.start())),
            Point::new(x1, self.time_y(event.end())),
        )
    }

    /// `true` when `event` lies entirely inside the configured hour window.
    pub fn contains(&self, event: &Event) -> bool {
        let first = self.start_hour as u16 * HOUR_MINS;
        let last = (self.start_hour as u16 + self.hour_span as u16) * HOUR_MINS;
        event.start_offset() >= first && event.end_offset() <= last
    }
}
