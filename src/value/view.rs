// Author: Dustin Pilgrim
// License: MIT

use std::ops::Deref;

use super::{Section, Value};
use crate::error::{ForgeError, Result};

/// A section read in the context of its document root.
///
/// Every accessor that follows references resolves them against `root`, so
/// absolute references land where they were written and relative ones find
/// the section they were parsed in. Raw accessors (`keys`, `child`,
/// `includes`, ...) come from the underlying [`Section`].
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    root: &'a Section,
    section: &'a Section,
}

impl<'a> SectionView<'a> {
    pub(crate) fn new(root: &'a Section, section: &'a Section) -> Self {
        SectionView { root, section }
    }

    pub fn root(&self) -> &'a Section {
        self.root
    }

    pub fn section(&self) -> &'a Section {
        self.section
    }

    pub fn contains(&self, path: &str) -> bool {
        self.section.contains(path)
    }

    /// Raw dotted lookup below this section.
    pub fn lookup(&self, path: &str) -> Result<&'a Value> {
        self.section.lookup(path)
    }

    /// Dotted lookup below this section, following references from the root.
    pub fn resolve(&self, path: &str) -> Result<&'a Value> {
        self.section.lookup(path)?.get_value(self.root)
    }

    pub fn get_boolean(&self, path: &str) -> Result<bool> {
        self.resolve(path)?.as_bool()
    }

    pub fn get_integer(&self, path: &str) -> Result<i64> {
        self.resolve(path)?.as_integer()
    }

    pub fn get_float(&self, path: &str) -> Result<f64> {
        self.resolve(path)?.as_float()
    }

    pub fn get_string(&self, path: &str) -> Result<&'a str> {
        self.resolve(path)?.as_str()
    }

    pub fn get_list(&self, path: &str) -> Result<&'a [Value]> {
        self.resolve(path)?.as_list()
    }

    pub fn get_section(&self, path: &str) -> Result<SectionView<'a>> {
        let section = self.resolve(path)?.as_section()?;
        Ok(SectionView::new(self.root, section))
    }

    pub fn get<T>(&self, path: &str) -> Result<T>
    where
        T: for<'v> TryFrom<&'v Value, Error = ForgeError>,
    {
        let resolved = self.resolve_deep(self.resolve(path)?)?;
        T::try_from(&resolved)
    }

    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: for<'v> TryFrom<&'v Value, Error = ForgeError>,
    {
        self.get(path).unwrap_or(default)
    }

    fn resolve_deep(&self, value: &Value) -> Result<Value> {
        match value.get_value(self.root)? {
            Value::List(items) => items
                .iter()
                .map(|item| self.resolve_deep(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            other => Ok(other.clone()),
        }
    }
}

impl Deref for SectionView<'_> {
    type Target = Section;

    fn deref(&self) -> &Section {
        self.section
    }
}
