/// Data layer: the tip catalog and its record types.
///
/// Architecture:
/// ```text
///   ┌──────────┐
///   │ catalog   │  builtin() → the fixed 30-day program
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Tip>, ordered by id
///   └──────────┘
///        │
///        ▼
///      ui::cards (read-only)
/// ```
///
/// Nothing in this layer depends on egui; the UI consumes it one-way.

pub mod catalog;
pub mod model;
