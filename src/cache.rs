use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::{entity::Product, error::Result, nav::NavTreeBuilder, provider::IndexProvider};

/// One [`NavTreeBuilder`] per product, created on first request.
#[derive(Debug)]
pub struct NavTreeCache<P> {
    provider: P,
    builders: Mutex<HashMap<Product, Arc<NavTreeBuilder>>>,
}

impl<P: IndexProvider> NavTreeCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            builders: Mutex::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the cached builder for `product`, loading its index on first
    /// use. Load failures are returned and not cached.
    ///
    /// Loading may block on the provider's I/O while the lock is held; async
    /// callers should run this off the reactor.
    pub fn get_instance(&self, product: &Product) -> Result<Arc<NavTreeBuilder>> {
        // Held across construction so racing first calls build only once.
        let mut builders = self.builders.lock();
        if let Some(builder) = builders.get(product) {
            return Ok(builder.clone());
        }

        let index = self.provider.index_for(product)?;
        let builder = Arc::new(NavTreeBuilder::new(index));
        builders.insert(product.clone(), builder.clone());
        debug!(%product, "created nav tree builder");
        Ok(builder)
    }

    pub fn len(&self) -> usize {
        self.builders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
