mod indices;
mod matcher;

pub use indices::match_indices;
pub use matcher::match_list;
