mod interactions;
mod barnes_hut_tree;

pub use interactions::*;
pub use barnes_hut_tree::*;
