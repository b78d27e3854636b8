//! Type-directed conversion of raw strings into [`Value`]s
//!
//! A [`CompositeConverter`] is an ordered registry: the first converter whose
//! [`Converter::can_handle`] accepts the declared type does the work. Container
//! converters own their own inner registry, built in stages by
//! [`CompositeConverterBuilder::build`]:
//!
//! 1. scalars (and any user base converters),
//! 2. the collection converter, over stage 1,
//! 3. the map converter, over stages 1 and 2,
//!
//! so `Vec<i32>`, `HashMap<String, Vec<String>>` and `HashMap<i32, HashSet<String>>`
//! resolve, while recursion depth stays bounded.

use std::fmt;
use std::sync::Arc;

use crate::config::Separators;
use crate::error::ConvertError;
use crate::types::DeclaredType;
use crate::value::Value;

mod collection;
mod map;
mod scalar;

pub use collection::CollectionConverter;
pub use map::MapConverter;
pub use scalar::ScalarConverter;

/// Converts a single raw string into a value of a declared type.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Whether this converter claims `ty`.
    fn can_handle(&self, ty: &DeclaredType) -> bool;

    /// Convert a trimmed, non-blank `raw` string into a value of type `ty`.
    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError>;
}

/// Ordered converter registry with first-match dispatch.
#[derive(Debug, Clone)]
pub struct CompositeConverter {
    converters: Vec<Arc<dyn Converter>>,
}

impl CompositeConverter {
    /// Registry consulting `converters` in the given order.
    pub fn new(converters: Vec<Arc<dyn Converter>>) -> Self {
        Self { converters }
    }

    /// Staged builder for the standard registry.
    pub fn builder() -> CompositeConverterBuilder {
        CompositeConverterBuilder::default()
    }

    /// Standard registry with the given separators.
    pub fn with_separators(separators: &Separators) -> Self {
        Self::builder().separators(separators.clone()).build()
    }

    pub fn converters(&self) -> &[Arc<dyn Converter>] {
        &self.converters
    }

    fn find(&self, ty: &DeclaredType) -> Option<&dyn Converter> {
        self.converters
            .iter()
            .find(|c| c.can_handle(ty))
            .map(|c| &**c)
    }
}

impl Converter for CompositeConverter {
    fn can_handle(&self, ty: &DeclaredType) -> bool {
        self.find(ty.non_nullable()).is_some()
    }

    fn convert(&self, raw: &str, ty: &DeclaredType) -> Result<Value, ConvertError> {
        // a blank-free token never converts to null, so Option<T> converts as T
        let target = ty.non_nullable();
        let converter = self
            .find(target)
            .ok_or_else(|| ConvertError::unsupported(target))?;
        converter.convert(raw, target)
    }
}

/// Builder for the staged default [`CompositeConverter`].
#[derive(Debug, Clone, Default)]
pub struct CompositeConverterBuilder {
    separators: Separators,
    base: Vec<Arc<dyn Converter>>,
}

impl CompositeConverterBuilder {
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn item_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.item = separator.into();
        self
    }

    pub fn entry_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.entry = separator.into();
        self
    }

    pub fn key_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.key_value = separator.into();
        self
    }

    /// Register an extra leaf converter, consulted after the built-in scalars.
    ///
    /// Base converters are visible to container elements, map keys and map
    /// values, so a custom type also works inside `Vec<T>` or `HashMap<K, T>`.
    pub fn add_base_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.base.push(Arc::new(converter));
        self
    }

    pub fn build(self) -> CompositeConverter {
        let mut base: Vec<Arc<dyn Converter>> = ScalarConverter::all()
            .map(|c| Arc::new(c) as Arc<dyn Converter>)
            .collect();
        base.extend(self.base);

        let collection: Arc<dyn Converter> = Arc::new(CollectionConverter::new(
            CompositeConverter::new(base.clone()),
            self.separators.item.clone(),
        ));

        let mut map_inner = base.clone();
        map_inner.push(collection.clone());
        let map: Arc<dyn Converter> = Arc::new(MapConverter::new(
            CompositeConverter::new(map_inner),
            self.separators.entry,
            self.separators.key_value,
        ));

        let mut converters = base;
        converters.push(collection);
        converters.push(map);
        CompositeConverter::new(converters)
    }
}
