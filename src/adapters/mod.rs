/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with git, lockfile formats and the console.
pub mod outbound;
