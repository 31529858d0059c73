// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;
use std::path::Path;

use crate::error::{ForgeError, Result};
use crate::fs::{FileSystem, NativeFs};
use crate::parser::Parser;
use crate::value::Section;

/// Parse forge source held in memory. Includes go through the native file system.
///
/// # Example
/// ```
/// let settings = forge_cfg::parse_str("port = 8080\n")?;
/// assert_eq!(settings.get_integer("port")?, 8080);
/// # Ok::<(), forge_cfg::ForgeError>(())
/// ```
pub fn parse_str(input: &str) -> Result<Section> {
    let mut parser = Parser::new(input)?;
    parser.parse()?;
    Ok(parser.into_settings())
}

pub fn parse_bytes(input: &[u8]) -> Result<Section> {
    let source = std::str::from_utf8(input).map_err(|e| ForgeError::File {
        path: "<input>".into(),
        message: e.to_string(),
    })?;
    parse_str(source)
}

pub fn parse_reader(reader: impl Read) -> Result<Section> {
    let mut parser = Parser::from_reader(reader)?;
    parser.parse()?;
    Ok(parser.into_settings())
}

/// Load a config file, anchoring relative includes on its directory.
///
/// # Example
/// ```no_run
/// let settings = forge_cfg::parse_file("/etc/app/main.cfg")?;
/// println!("{}", settings.get_string("global")?);
/// # Ok::<(), forge_cfg::ForgeError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Section> {
    parse_file_with_fs(NativeFs, path)
}

pub fn parse_file_with_fs<P: AsRef<Path>>(fs: impl FileSystem + 'static, path: P) -> Result<Section> {
    let path = path.as_ref().to_string_lossy();
    let mut parser = Parser::from_file_with_fs(fs, &path)?;
    parser.parse()?;
    tracing::debug!(entry = %path, files = parser.files().len(), "config loaded");
    Ok(parser.into_settings())
}
