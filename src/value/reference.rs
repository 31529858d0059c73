// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashSet;
use std::fmt;

use super::{Section, Value};
use crate::error::{ForgeError, Result};

/// Where a reference starts its lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The document root (`a.b`).
    Root,
    /// The section that was open when the reference was read (`.a.b`),
    /// stored as its path of section names from the root.
    Section(Vec<String>),
}

/// A deferred lookup of another setting by dotted path.
///
/// The reference does not own its scope; it only remembers where the scope
/// sits in the tree, and is resolved against a root on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    path: String,
    scope: Scope,
}

impl Reference {
    pub fn absolute(path: impl Into<String>) -> Self {
        Reference {
            path: path.into(),
            scope: Scope::Root,
        }
    }

    pub fn relative(path: impl Into<String>, scope: Vec<String>) -> Self {
        Reference {
            path: path.into(),
            scope: Scope::Section(scope),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_relative(&self) -> bool {
        matches!(self.scope, Scope::Section(_))
    }

    /// Follow this reference, and any reference it lands on, to a concrete value.
    ///
    /// Every segment but the last must name a section; the last must name a
    /// setting. A chain that comes back to a reference already visited fails
    /// with [`ForgeError::CircularReference`].
    pub fn resolve<'a>(&self, root: &'a Section) -> Result<&'a Value> {
        let mut seen = HashSet::new();
        let mut current = self;
        loop {
            if !seen.insert((&current.scope, current.path.as_str())) {
                return Err(ForgeError::CircularReference {
                    path: self.to_string(),
                });
            }
            match current.resolve_once(root)? {
                Value::Reference(next) => current = next,
                value => return Ok(value),
            }
        }
    }

    /// Single lookup step; the result may itself be a reference.
    fn resolve_once<'a>(&self, root: &'a Section) -> Result<&'a Value> {
        let not_found = || ForgeError::NotFound {
            path: self.to_string(),
        };

        let scope = match &self.scope {
            Scope::Root => root,
            Scope::Section(names) => root.section_at(names).ok_or_else(not_found)?,
        };

        match scope.lookup(&self.path) {
            Ok(Value::Section(_)) | Err(_) => Err(not_found()),
            Ok(value) => Ok(value),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Scope::Root => write!(f, "{}", self.path),
            Scope::Section(_) => write!(f, ".{}", self.path),
        }
    }
}
