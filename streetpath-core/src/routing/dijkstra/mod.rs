mod path;
mod shortest_path;
mod state;

pub use path::NodePath;
pub use shortest_path::shortest_path;
