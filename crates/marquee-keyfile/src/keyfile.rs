//! The in-memory key file model and its line parser.

use std::path::Path;

use crate::error::{KeyFileError, Result};
use crate::value::{split_list, unescape};

/// A parsed key file.
///
/// Groups keep the order in which they first appear. A group header that
/// appears twice reopens the existing group, and a key that is set twice in
/// the same group keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Group {
    name: String,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    locale: Option<String>,
    value: String,
}

impl Group {
    fn get(&self, key: &str, locale: Option<&str>) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key && e.locale.as_deref() == locale)
            .map(|e| e.value.as_str())
    }

    fn set(&mut self, key: &str, locale: Option<&str>, value: &str) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.key == key && e.locale.as_deref() == locale)
        {
            Some(entry) => entry.value = value.to_string(),
            None => self.entries.push(Entry {
                key: key.to_string(),
                locale: locale.map(str::to_string),
                value: value.to_string(),
            }),
        }
    }
}

impl KeyFile {
    /// Reads and parses the key file at `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| KeyFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses key file content.
    ///
    /// # Errors
    ///
    /// Returns [`KeyFileError::Parse`] with the 1-based line number of the
    /// first malformed line, or of a key that appears before any group.
    pub fn parse(content: &str) -> Result<Self> {
        let mut file = KeyFile::default();
        let mut current: Option<usize> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim_start();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = rest
                    .trim_end()
                    .strip_suffix(']')
                    .ok_or_else(|| KeyFileError::parse(line_no, "unterminated group header"))?;
                if name.is_empty() || name.contains(is_bracket) {
                    return Err(KeyFileError::parse(
                        line_no,
                        format!("invalid group name '{}'", name),
                    ));
                }
                current = Some(file.group_index_or_insert(name));
                continue;
            }

            let group = current.ok_or_else(|| {
                KeyFileError::parse(line_no, "key file does not start with a group")
            })?;

            let (lhs, value) = line.split_once('=').ok_or_else(|| {
                KeyFileError::parse(line_no, format!("expected 'Key=Value', found '{}'", line))
            })?;
            let (key, locale) = split_key(lhs.trim_end(), line_no)?;

            file.groups[group].set(key, locale, value.trim_start());
        }

        Ok(file)
    }

    /// Returns `true` if the group exists.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g.name == group)
    }

    /// Returns `true` if the untranslated key exists in the group.
    pub fn has_key(&self, group: &str, key: &str) -> bool {
        self.group(group)
            .map(|g| g.get(key, None).is_some())
            .unwrap_or(false)
    }

    /// Group names in file order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Distinct key names of a group in file order, translations folded in.
    pub fn keys(&self, group: &str) -> Result<Vec<&str>> {
        let group = self.group(group)?;
        let mut keys: Vec<&str> = Vec::new();
        for entry in &group.entries {
            if !keys.contains(&entry.key.as_str()) {
                keys.push(&entry.key);
            }
        }
        Ok(keys)
    }

    /// Returns the untranslated value of `key`, with escapes decoded.
    pub fn string(&self, group: &str, key: &str) -> Result<String> {
        let raw = self.raw_value(group, key, None)?;
        unescape(raw).map_err(|reason| invalid_value(group, key, reason))
    }

    /// Returns the best translation of `key` for `languages`.
    ///
    /// Each language is tried in order as `key[language]`; when none of them
    /// has an entry the untranslated value is returned.
    pub fn locale_string<S: AsRef<str>>(
        &self,
        group: &str,
        key: &str,
        languages: &[S],
    ) -> Result<String> {
        let entries = self.group(group)?;
        for language in languages {
            if let Some(raw) = entries.get(key, Some(language.as_ref())) {
                return unescape(raw).map_err(|reason| invalid_value(group, key, reason));
            }
        }
        self.string(group, key)
    }

    /// Returns the value of `key` split into a list, preserving order.
    pub fn string_list(&self, group: &str, key: &str) -> Result<Vec<String>> {
        let raw = self.raw_value(group, key, None)?;
        split_list(raw).map_err(|reason| invalid_value(group, key, reason))
    }

    fn group(&self, name: &str) -> Result<&Group> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| KeyFileError::GroupNotFound(name.to_string()))
    }

    fn raw_value(&self, group: &str, key: &str, locale: Option<&str>) -> Result<&str> {
        self.group(group)?
            .get(key, locale)
            .ok_or_else(|| KeyFileError::KeyNotFound {
                group: group.to_string(),
                key: key.to_string(),
            })
    }

    fn group_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.groups.iter().position(|g| g.name == name) {
            return index;
        }
        self.groups.push(Group {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.groups.len() - 1
    }
}

/// Splits `Key[locale]` into its parts.
fn split_key(lhs: &str, line_no: usize) -> Result<(&str, Option<&str>)> {
    let (key, locale) = match lhs.split_once('[') {
        Some((key, rest)) => {
            let locale = rest
                .strip_suffix(']')
                .filter(|l| !l.is_empty() && !l.contains(is_bracket))
                .ok_or_else(|| {
                    KeyFileError::parse(line_no, format!("invalid locale in key '{}'", lhs))
                })?;
            (key, Some(locale))
        }
        None => (lhs, None),
    };

    if key.is_empty() || key.contains(']') || key.ends_with(char::is_whitespace) {
        return Err(KeyFileError::parse(
            line_no,
            format!("invalid key name '{}'", lhs),
        ));
    }
    Ok((key, locale))
}

fn is_bracket(c: char) -> bool {
    c == '[' || c == ']'
}

fn invalid_value(group: &str, key: &str, reason: String) -> KeyFileError {
    KeyFileError::InvalidValue {
        group: group.to_string(),
        key: key.to_string(),
        reason,
    }
}
