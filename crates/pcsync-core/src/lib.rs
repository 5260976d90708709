mod affected;
mod ordered;
pub mod types;

pub use affected::{Affected, AffectedFile, AffectedFolder, to_slash_path};
pub use ordered::{OrderedFileSet, OrderedFolderSet, OrderedSet};
pub use types::*;
