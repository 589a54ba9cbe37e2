//! Iteration over projected rows with explicit release of the source.

use crate::error::ProjectionResult;
use crate::factory::Binding;
use crate::value::Value;
use tracing::debug;

/// An iterator holding an underlying resource that must be released.
///
/// After `close` the iterator yields nothing further. Closing twice is a no-op.
pub trait CloseableIterator: Iterator {
    fn close(&mut self);
}

/// Maps raw argument rows to projections through one resolved constructor.
#[derive(Debug)]
pub struct Projections<I, T> {
    rows: Option<I>,
    binding: Binding<T>,
}

impl<I, T> Projections<I, T>
where
    I: Iterator<Item = Vec<Value>>,
{
    pub fn new(rows: I, binding: Binding<T>) -> Self {
        Self {
            rows: Some(rows),
            binding,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.rows.is_none()
    }
}

impl<I, T> Iterator for Projections<I, T>
where
    I: Iterator<Item = Vec<Value>>,
{
    type Item = ProjectionResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.as_mut()?.next()?;
        Some(self.binding.new_instance(row))
    }
}

impl<I, T> CloseableIterator for Projections<I, T>
where
    I: Iterator<Item = Vec<Value>>,
{
    fn close(&mut self) {
        if self.rows.take().is_some() {
            debug!(constructor = self.binding.resolution().constructor_index(), "Closed projection iterator");
        }
    }
}
