//! A live inspector for [`vtree::ValueTree`] graphs: browse nodes and
//! properties, edit values in place, drag-reorder children, undo/redo.

pub mod item;
pub mod node_view;
pub mod panel;
pub mod property_view;
pub mod selection;
pub mod theme;
pub mod toolbar;
pub mod tree_view;
pub mod value_view;
pub mod window;

pub use panel::MainPanel;
pub use selection::PropertySelection;
pub use theme::DebuggerTheme;
pub use tree_view::TreeList;
pub use window::DebuggerWindow;
