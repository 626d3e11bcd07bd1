mod ibk;
mod neighbors;

pub use ibk::{DEFAULT_K, IBk};
pub use neighbors::{NearestNeighbors, Neighbor};
