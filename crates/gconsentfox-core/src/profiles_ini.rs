use crate::{Error, Result};

/// A `[section]` of profiles.ini and its `key=value` entries, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl IniSection {
    /// Look up a key, ignoring ASCII case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Parsed contents of Firefox's profiles.ini
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilesIni {
    sections: Vec<IniSection>,
}

impl ProfilesIni {
    /// Parse profiles.ini content
    ///
    /// Blank lines and lines starting with `#` or `;` are skipped. Keys and
    /// values are trimmed. An entry outside any section, or a line that is
    /// neither a header nor an entry, is an error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut sections: Vec<IniSection> = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            let line_no = idx + 1;

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| Error::ProfilesIni {
                    line: line_no,
                    message: format!("unterminated section header '{}'", line),
                })?;
                sections.push(IniSection {
                    name: name.trim().to_string(),
                    entries: Vec::new(),
                });
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::ProfilesIni {
                    line: line_no,
                    message: format!("expected 'key=value', found '{}'", line),
                });
            };

            let section = sections.last_mut().ok_or_else(|| Error::ProfilesIni {
                line: line_no,
                message: "entry before first section header".to_string(),
            })?;
            section
                .entries
                .push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[IniSection] {
        &self.sections
    }

    /// First value of `key` among sections whose name starts with `prefix`
    pub fn find_in_sections(&self, prefix: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .filter(|section| section.name.starts_with(prefix))
            .find_map(|section| section.get(key))
    }
}
