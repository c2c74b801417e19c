pub mod events;
pub mod identifier;
pub mod tree;
pub mod undo;
pub mod value;

pub use events::{Subscription, TreeEvent};
pub use identifier::{Identifier, InvalidIdentifier};
pub use tree::ValueTree;
pub use undo::UndoManager;
pub use value::Var;
