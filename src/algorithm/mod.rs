/// Per-region growth state and direction elimination
pub mod cluster;
/// Seed expansion into disjoint structures
pub mod growth;
/// Connector pairing between structures
pub mod matching;
/// Jump reachability between positions and structures
pub mod reachability;
/// Seed sampling and structure subset selection
pub mod selection;

pub use growth::RegionGrower;
pub use matching::{CombinationMatcher, MatchConfig};
pub use reachability::{ReachabilityAnalyzer, ReachabilityConfig};
