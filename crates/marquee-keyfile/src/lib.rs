//! Reader for freedesktop-style key files.
//!
//! Key files are line-oriented manifests made of named groups holding
//! `Key=Value` entries. Values may be translated per locale with
//! `Key[locale]=Value`, and list values separate their items with `;`.
//!
//! ```text
//! # Theme descriptor
//! [Marquee Theme]
//! Name=Midnight
//! Name[de]=Mitternacht
//! Comment=Dark theme with blue accents
//! Style=base.css;widgets.css
//! ```
//!
//! # Example
//!
//! ```rust
//! use marquee_keyfile::KeyFile;
//!
//! let file = KeyFile::parse(
//!     "[Marquee Theme]\nName=Midnight\nName[de]=Mitternacht\nStyle=base.css;widgets.css\n",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     file.locale_string("Marquee Theme", "Name", &["de_DE", "de"]).unwrap(),
//!     "Mitternacht"
//! );
//! assert_eq!(
//!     file.string_list("Marquee Theme", "Style").unwrap(),
//!     vec!["base.css", "widgets.css"]
//! );
//! ```
//!
//! # Escapes
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `\s` | space |
//! | `\n`, `\t`, `\r` | newline, tab, carriage return |
//! | `\\` | backslash |
//! | `\;` | literal `;` inside a list item |

mod error;
mod keyfile;
mod locale;
mod value;

pub use error::{KeyFileError, Result};
pub use keyfile::KeyFile;
pub use locale::{language_names, locale_variants};
