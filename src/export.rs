// Author: Dustin Pilgrim
// License: MIT

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, json};

use crate::error::{ForgeError, Result};
use crate::value::{Section, SectionView, Value};

/// Convert a value to JSON, resolving references against `root`.
///
/// - Booleans, integers, floats, strings → direct mapping
/// - Lists → arrays
/// - Sections → objects in insertion order
/// - References → the JSON of the value they resolve to
/// - Null → JSON null
fn value_to_json(value: &Value, root: &Section) -> Result<serde_json::Value> {
    let json = match value.get_value(root)? {
        Value::Boolean(b) => json!(b),
        Value::Float(f) => json!(f),
        Value::Integer(i) => json!(i),
        Value::String(s) => json!(s),
        Value::Null => serde_json::Value::Null,
        Value::List(items) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| value_to_json(item, root))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Section(section) => serde_json::Value::Object(section_to_map(section, root)?),
        // get_value never hands back a reference
        Value::Reference(reference) => {
            return Err(ForgeError::NotFound {
                path: reference.to_string(),
            });
        }
    };
    Ok(json)
}

fn section_to_map(section: &Section, root: &Section) -> Result<Map<String, serde_json::Value>> {
    section
        .entries()
        .map(|(name, value)| Ok((name.to_string(), value_to_json(value, root)?)))
        .collect()
}

impl SectionView<'_> {
    /// Flatten this section into a generic ordered map. References resolve
    /// from the document root.
    ///
    /// Fails with the first reference that does not resolve.
    pub fn to_map(&self) -> Result<Map<String, serde_json::Value>> {
        section_to_map(self.section(), self.root())
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        let map = serde_json::Value::Object(self.to_map()?);
        serde_json::to_vec(&map).map_err(|e| ForgeError::Conversion {
            message: e.to_string(),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let map = serde_json::Value::Object(self.to_map()?);
        serde_json::to_string_pretty(&map).map_err(|e| ForgeError::Conversion {
            message: e.to_string(),
        })
    }

    /// Deserialize the resolved section into any `serde` type.
    ///
    /// # Examples
    /// ```
    /// #[derive(serde::Deserialize)]
    /// struct Server {
    ///     host: String,
    ///     port: u16,
    /// }
    ///
    /// let settings = forge_cfg::parse_str(
    ///     "default_host = \"localhost\"\nserver { host = default_host; port = 8080 }",
    /// )?;
    /// let server: Server = settings.get_section("server")?.extract()?;
    /// assert_eq!(server.host, "localhost");
    /// assert_eq!(server.port, 8080);
    /// # Ok::<(), forge_cfg::ForgeError>(())
    /// ```
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        let map = serde_json::Value::Object(self.to_map()?);
        serde_json::from_value(map).map_err(|e| ForgeError::Conversion {
            message: e.to_string(),
        })
    }
}

impl Section {
    /// Flatten the whole document into a generic ordered map, treating `self` as the root.
    pub fn to_map(&self) -> Result<Map<String, serde_json::Value>> {
        self.view().to_map()
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.view().to_json()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        self.view().to_json_pretty()
    }

    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        self.view().extract()
    }
}

impl Serialize for SectionView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().map_err(S::Error::custom)?.serialize(serializer)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.view().serialize(serializer)
    }
}
