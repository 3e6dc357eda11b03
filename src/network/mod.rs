pub mod consensus;
pub mod peers;

pub use consensus::{ChainSnapshot, resolve_conflicts};
pub use peers::PeerRegistry;
