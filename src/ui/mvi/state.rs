//! Base trait for view state in the MVI loop.

/// Marker trait for view state objects.
///
/// States are replaced wholesale by reducers and must carry everything
/// the renderer needs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
