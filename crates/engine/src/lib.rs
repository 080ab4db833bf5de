//! Table interaction engine: rectangular selection, fill-handle drag,
//! clipboard transfer, and context-menu row actions for a host-rendered
//! grid.
//!
//! The engine owns no rendering and no data store. The host injects three
//! capabilities and drives the engine from its native event loop:
//!
//! - [`geometry::GridGeometry`] answers pixel/cell queries,
//! - [`row::RowTable`] exposes the row collection,
//! - [`clipboard::ClipboardProvider`] reads and writes system text.
//!
//! All interaction state for one table lives in a [`surface::GridSurface`];
//! every transition queues [`events::GridEvent`]s the host drains after
//! each dispatch.

pub mod actions;
pub mod clipboard;
pub mod columns;
pub mod events;
pub mod fill;
pub mod geometry;
pub mod menu;
pub mod row;
pub mod selection;
pub mod surface;

#[cfg(test)]
pub mod harness;

pub use clipboard::{ClipboardError, ClipboardProvider, MemoryClipboard};
pub use columns::{Column, ColumnNode, SchemaCache};
pub use events::{EventCollector, GridEvent};
pub use fill::{FillAxis, FillDrag, FILL_HANDLE_HIT_SIZE};
pub use geometry::GridGeometry;
pub use menu::{context_menu_entries, MenuAction, MenuEntry, MenuState};
pub use row::{RowData, RowTable};
pub use selection::{Orientation, SelectPhase, SelectionState};
pub use surface::{GridSurface, KeyInput, PointerEvent};
