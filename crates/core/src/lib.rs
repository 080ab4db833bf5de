pub mod column;
pub mod pos;
pub mod range;
pub mod rect;

pub use column::{CellRef, ColumnKind};
pub use pos::GridPos;
pub use range::Range;
pub use rect::{Point, Rect, SelectionRect};
