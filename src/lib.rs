//! Parser for the forge configuration language.
//!
//! A document is a tree of sections holding settings. Values can be strings,
//! numbers, booleans, null, lists, environment variables, or references to
//! other settings, and `include "glob"` splices other files in place.
//!
//! ```
//! let settings = forge_cfg::parse_str(
//!     "base = 8000\nserver {\n  port = base\n  ports = [.port, 8443]\n}\n",
//! )?;
//! assert_eq!(settings.get_integer("server.port")?, 8000);
//! # Ok::<(), forge_cfg::ForgeError>(())
//! ```

pub mod error;
mod export;
pub mod fs;
pub mod lexer;
pub mod loader;
pub mod parser;
pub mod value;

pub use error::{ForgeError, Result};
pub use fs::{FileSystem, MemoryFs, NativeFs};
pub use lexer::{Lexer, Token, TokenKind};
pub use loader::{parse_bytes, parse_file, parse_file_with_fs, parse_reader, parse_str};
pub use parser::Parser;
pub use value::{Reference, Scope, Section, SectionView, Value, ValueType};
