//! `tempo-layout` — turns a validated [`Schedule`] into drawing primitives.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`primitive`] | `Point`, `Primitive`, `NodeContent`, `FontSize`, `Layout`  |
//! | [`palette`]   | `BaseColor`, `Color`, `PaletteAssigner`                    |
//! | [`grid`]      | `GridGeometry` — margins + hour window → page coordinates  |
//! | [`generator`] | `LayoutGenerator`, `ScheduleLayoutExt`                     |
//!
//! # Coordinate system
//!
//! Centimetres on a landscape A4 page, origin bottom-left, `y` growing
//! upwards.  The grid has one header column for hour labels plus seven day
//! columns, and one header row for day names plus one row per hour:
//!
//! ```text
//!  ┌──────┬────────┬────────┬─ … ─┐   ← top margin above
//!  │      │ Sunday │ Monday │     │
//!  ├──────┼────────┼────────┼─ … ─┤
//!  │06:00 │        │ ██████ │     │
//!  ├──────┼────────┼────────┼─ … ─┤
//!  │  …   │        │        │     │
//!  └──────┴────────┴────────┴─ … ─┘   ← bottom margin below
//! ```
//!
//! Rendering the primitives is left to a backend (see `tempo-output`).
//!
//! [`Schedule`]: tempo_schedule::Schedule

pub mod generator;
pub mod grid;
pub mod palette;
pub mod primitive;


pub use generator::{LayoutGenerator, ScheduleLayoutExt};
pub use grid::GridGeometry;
pub use palette::{BASE_PALETTE, BaseColor, Color, PaletteAssigner, TINT_PERCENT};
pub use primitive::{FontSize, Layout, NodeContent, Point, Primitive};
