//! Reload logic for runtime filter changes

use std::sync::Arc;

use parking_lot::RwLock;
use tracing_subscriber::{EnvFilter, Registry, layer::Layer};

use crate::error::{LogError, LogResult};

/// Boxed filter layer installed at the bottom of the subscriber stack.
pub(super) type FilterLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Handle for runtime filter changes
#[derive(Clone)]
pub struct ReloadHandle {
    filter: tracing_subscriber::reload::Handle<EnvFilter, Registry>,
    current_filter: Arc<RwLock<String>>,
}

impl ReloadHandle {
    /// Reload the log filter at runtime
    ///
    /// # Errors
    /// Returns error if filter parsing fails or the subscriber is gone
    pub fn reload(&self, filter: &str) -> LogResult<()> {
        let new_filter = EnvFilter::try_new(filter).map_err(|e| LogError::filter(filter, e))?;
        self.filter
            .reload(new_filter)
            .map_err(|e| LogError::Config(format!("failed to reload filter: {e}")))?;
        *self.current_filter.write() = filter.to_string();
        tracing::debug!(filter, "log filter reloaded");
        Ok(())
    }

    /// Get the current filter string
    pub fn current_filter(&self) -> String {
        self.current_filter.read().clone()
    }
}

impl std::fmt::Debug for ReloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReloadHandle")
            .field("current_filter", &*self.current_filter.read())
            .finish_non_exhaustive()
    }
}

/// Create a filter layer, optionally wrapping it in a reloadable layer
///
/// Returns:
/// - The filter layer (potentially wrapped in reload)
/// - Optional reload handle (if reloadable=true)
pub(super) fn create_filter_layer(
    filter: EnvFilter,
    level_str: &str,
    reloadable: bool,
) -> (FilterLayer, Option<ReloadHandle>) {
    if reloadable {
        let (layer, handle) = tracing_subscriber::reload::Layer::new(filter);
        let reload_handle = ReloadHandle {
            filter: handle,
            current_filter: Arc::new(RwLock::new(level_str.to_string())),
        };
        (Box::new(layer), Some(reload_handle))
    } else {
        (Box::new(filter), None)
    }
}
