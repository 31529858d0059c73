// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use super::{SectionView, Value};
use crate::error::{ForgeError, Result};

/// A named scope holding settings and nested sections in insertion order.
///
/// Nested sections live in the same ordered map as plain settings, so a name
/// is either a setting or a section, never both. The root section has an
/// empty name and stands for the whole document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    name: String,
    values: IndexMap<String, Value>,
    includes: Vec<String>,
    comments: Vec<String>,
}

impl Section {
    /// An empty root section.
    pub fn new() -> Self {
        Section::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            ..Section::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or overwrite a setting. An overwritten key keeps its original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Return the child section `name`, creating it if needed.
    ///
    /// A plain setting with the same name is replaced by the new section.
    pub fn add_section(&mut self, name: impl Into<String>) -> &mut Section {
        let name = name.into();
        let slot = self.values.entry(name.clone()).or_insert(Value::Null);
        ensure_section(slot, &name)
    }

    pub fn add_include(&mut self, filename: impl Into<String>) {
        self.includes.push(filename.into());
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn add_comment(&mut self, text: impl Into<String>) {
        self.comments.push(text.into());
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Direct child lookup, no path splitting.
    pub fn child(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.values.get_mut(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// All entries in insertion order, nested sections included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries that are not sections.
    pub fn settings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries().filter(|(_, v)| !matches!(v, Value::Section(_)))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.values.values().filter_map(|v| match v {
            Value::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Walk nested sections by name. An empty path is `self`.
    pub fn section_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&Section> {
        let mut current = self;
        for name in path {
            match current.values.get(name.as_ref()) {
                Some(Value::Section(section)) => current = section,
                _ => return None,
            }
        }
        Some(current)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Dotted-path lookup of the raw value, without following references.
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        let not_found = || ForgeError::NotFound {
            path: path.to_string(),
        };

        let mut segments: Vec<&str> = path.split('.').collect();
        let last = segments.pop().ok_or_else(not_found)?;
        let parent = self.section_at(&segments).ok_or_else(not_found)?;
        parent.values.get(last).ok_or_else(not_found)
    }

    /// Read this section as the document root.
    ///
    /// References only resolve correctly from the root they were parsed
    /// under. To read a nested section, go through [`Section::get_section`]
    /// or [`SectionView::get_section`], which keep the root attached.
    pub fn view(&self) -> SectionView<'_> {
        SectionView::new(self, self)
    }

    /// Dotted-path lookup that follows references, treating `self` as the document root.
    pub fn resolve(&self, path: &str) -> Result<&Value> {
        self.view().resolve(path)
    }

    pub fn get_boolean(&self, path: &str) -> Result<bool> {
        self.view().get_boolean(path)
    }

    pub fn get_integer(&self, path: &str) -> Result<i64> {
        self.view().get_integer(path)
    }

    pub fn get_float(&self, path: &str) -> Result<f64> {
        self.view().get_float(path)
    }

    pub fn get_string(&self, path: &str) -> Result<&str> {
        self.view().get_string(path)
    }

    pub fn get_list(&self, path: &str) -> Result<&[Value]> {
        self.view().get_list(path)
    }

    /// The nested section at `path`, still tied to this root so its
    /// references resolve the way they were written.
    pub fn get_section(&self, path: &str) -> Result<SectionView<'_>> {
        self.view().get_section(path)
    }

    /// Get a typed value using dot notation.
    ///
    /// References are followed, including references held inside lists.
    ///
    /// # Examples
    /// ```
    /// let settings = forge_cfg::parse_str("server { port = 8080; hosts = [\"a\", \"b\"] }")?;
    /// let port: u16 = settings.get("server.port")?;
    /// let hosts: Vec<String> = settings.get("server.hosts")?;
    /// assert_eq!(port, 8080);
    /// assert_eq!(hosts, vec!["a", "b"]);
    /// # Ok::<(), forge_cfg::ForgeError>(())
    /// ```
    pub fn get<T>(&self, path: &str) -> Result<T>
    where
        T: for<'v> TryFrom<&'v Value, Error = ForgeError>,
    {
        self.view().get(path)
    }

    /// Like [`Section::get`] but falls back to `default` on any error.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: for<'v> TryFrom<&'v Value, Error = ForgeError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Merge `other` into this section. Nested sections merge recursively,
    /// every other entry overwrites.
    pub fn merge(&mut self, other: Section) {
        for (name, value) in other.values {
            match value {
                Value::Section(theirs) => match self.values.get_mut(&name) {
                    Some(Value::Section(mine)) => mine.merge(theirs),
                    _ => {
                        self.values.insert(name, Value::Section(theirs));
                    }
                },
                value => {
                    self.values.insert(name, value);
                }
            }
        }
        self.includes.extend(other.includes);
        self.comments.extend(other.comments);
    }
}

/// Turn `slot` into an empty section named `name` unless it already holds one.
fn ensure_section<'a>(slot: &'a mut Value, name: &str) -> &'a mut Section {
    match slot {
        Value::Section(section) => section,
        other => {
            *other = Value::Section(Section::named(name));
            ensure_section(other, name)
        }
    }
}
