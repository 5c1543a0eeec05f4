mod decorate;
mod flatten;
mod node;
mod padding;
mod render;
mod row;
mod source;

pub use decorate::{ColumnDecorator, Decorate, NoDecoration};
pub use flatten::{flatten, TreeMapper};
pub use node::{NodeId, NodeKind, TreeNode};
pub use padding::{Padding, PaddingState, Step, DEFAULT_BRANCH, DEFAULT_SPACER};
pub use render::{decode_entities, format_json, format_text, TextOptions};
pub use row::{DisplayRow, CORE_KEYS};
pub use source::{JsonFileSource, MemorySource, NodeSource};
