//! Base trait for intents in the MVI loop.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (filter edits, search submissions)
/// - System events (fetch completions, animation ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
