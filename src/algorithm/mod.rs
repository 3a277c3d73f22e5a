/// Boundary connector scanning for patches
pub mod connectors;
/// Seed, growth and patch rewrite pipeline
pub mod executor;
/// Patch rewriting along random simple paths
pub mod mutation;
/// Exhaustive simple-path enumeration
pub mod pathfinding;
/// Direction pair to tile resolution
pub mod resolver;
/// Pluggable random choices
pub mod selection;
