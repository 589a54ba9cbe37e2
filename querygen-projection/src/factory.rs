//! Caches constructor resolutions per argument signature.
//!
//! A query projects every row through the same argument types, so resolution
//! and transformer construction happen once per signature and are then shared.

use crate::constructor::ProjectionType;
use crate::error::ProjectionResult;
use crate::iter::Projections;
use crate::resolver::Resolution;
use crate::runtime_type::{RuntimeType, format_signature};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, trace};

pub struct ProjectionFactory<T> {
    projection: Arc<ProjectionType<T>>,
    cache: RwLock<HashMap<Vec<RuntimeType>, Arc<Resolution>>>,
}

impl<T> ProjectionFactory<T> {
    pub fn new(projection: ProjectionType<T>) -> Self {
        Self {
            projection: Arc::new(projection),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn projection(&self) -> &ProjectionType<T> {
        &self.projection
    }

    /// Resolves (or fetches the cached resolution for) `given`.
    pub fn bind(&self, given: &[RuntimeType]) -> ProjectionResult<Binding<T>> {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(given)
            .cloned();
        let resolution = match cached {
            Some(resolution) => {
                trace!(target_type = %self.projection.name(), given = %format_signature(given), "Resolution cache hit");
                resolution
            }
            None => {
                let resolved = Arc::new(self.projection.resolve(given)?);
                let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
                // Another thread may have filled the slot meanwhile; keep the first.
                let entry = Arc::clone(cache.entry(given.to_vec()).or_insert(resolved));
                debug!(
                    target_type = %self.projection.name(),
                    given = %format_signature(given),
                    cached = cache.len(),
                    "Cached constructor resolution"
                );
                entry
            }
        };
        Ok(Binding {
            projection: Arc::clone(&self.projection),
            resolution,
        })
    }

    /// Builds one projection from a row of arguments typed as `given`.
    pub fn new_instance(&self, given: &[RuntimeType], args: Vec<Value>) -> ProjectionResult<T> {
        self.bind(given)?.new_instance(args)
    }

    /// Projects every row of `rows`, all typed as `given`.
    ///
    /// Resolution happens once, before the first row is read.
    pub fn project<I>(&self, given: &[RuntimeType], rows: I) -> ProjectionResult<Projections<I::IntoIter, T>>
    where
        I: IntoIterator<Item = Vec<Value>>,
    {
        Ok(Projections::new(rows.into_iter(), self.bind(given)?))
    }

    /// Number of distinct signatures resolved so far.
    pub fn cached_signatures(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<T> std::fmt::Debug for ProjectionFactory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectionFactory")
            .field("projection", &self.projection.name())
            .field("cached_signatures", &self.cached_signatures())
            .finish()
    }
}

/// A projection type paired with a resolved constructor.
pub struct Binding<T> {
    projection: Arc<ProjectionType<T>>,
    resolution: Arc<Resolution>,
}

impl<T> Binding<T> {
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn new_instance(&self, args: Vec<Value>) -> ProjectionResult<T> {
        self.projection.new_instance(&self.resolution, args)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            projection: Arc::clone(&self.projection),
            resolution: Arc::clone(&self.resolution),
        }
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("projection", &self.projection.name())
            .field("resolution", &self.resolution)
            .finish()
    }
}
