//! Metadata block parsing
//!
//! A post starts with a metadata block in one of two forms. The MDX export
//! written by the scaffolder:
//!
//! ```text
//! export const metadata = {
//!     title: "Hello",
//!     publishDate: "2024-01-01",
//! };
//! ```
//!
//! or a YAML front-matter block delimited by `---` lines.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const EXPORT_PREFIX: &str = "export const metadata";

lazy_static! {
    static ref EXPORT_OPEN: Regex = Regex::new(r"^export\s+const\s+metadata\s*=\s*\{").unwrap();
    static ref EXPORT_ENTRY: Regex =
        Regex::new(r#"(?s)^["']?([A-Za-z_][A-Za-z0-9_]*)["']?\s*:\s*(.*)$"#).unwrap();
}

/// Raw metadata of a content file, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetadata {
    pub title: Option<String>,
    #[serde(rename = "publishDate", alias = "publish_date", alias = "date")]
    pub publish_date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "cover_image", alias = "coverImage")]
    pub cover_image: Option<String>,
}

impl PostMetadata {
    /// Parse the metadata block from content string
    /// Returns (metadata, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with(EXPORT_PREFIX) {
            return Self::parse_export(content);
        }

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // No metadata block
        Ok((PostMetadata::default(), content))
    }

    fn parse_export(content: &str) -> Result<(Self, &str)> {
        let open = EXPORT_OPEN.find(content).ok_or_else(|| {
            anyhow!(
                "Malformed metadata export: {}",
                content.lines().next().unwrap_or_default()
            )
        })?;

        let block = &content[open.end()..];
        let (entries, close) = split_entries(block)?;

        let mut meta = PostMetadata::default();
        for entry in entries {
            let entry = entry
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .collect::<Vec<_>>()
                .join("\n");
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            let Some(caps) = EXPORT_ENTRY.captures(entry) else {
                tracing::warn!("Ignoring unrecognised metadata entry: {}", entry);
                continue;
            };
            let key = &caps[1];
            let raw = caps[2].trim();
            if raw.starts_with('{') || raw.starts_with('[') {
                tracing::debug!("Ignoring nested metadata value for {}", key);
                continue;
            }
            let Some(value) = unquote(raw) else {
                tracing::warn!("Ignoring unterminated metadata value for {}", key);
                continue;
            };
            meta.set(key, value);
        }

        let rest = block[close..].trim_start_matches([' ', '\t']);
        let rest = rest.strip_prefix(';').unwrap_or(rest);
        let remaining = rest
            .trim_start_matches([' ', '\t'])
            .trim_start_matches(['\n', '\r']);
        Ok((meta, remaining))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no metadata
            return Ok((PostMetadata::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((PostMetadata::default(), remaining));
        }

        match serde_yaml::from_str::<PostMetadata>(yaml_content) {
            Ok(meta) => Ok((meta, remaining)),
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, treating as content: {}", e);
                Ok((PostMetadata::default(), content))
            }
        }
    }

    fn set(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = Some(value),
            "publishDate" | "publish_date" | "date" => self.publish_date = Some(value),
            "description" => self.description = Some(value),
            "category" => self.category = Some(value),
            "cover_image" | "coverImage" => self.cover_image = Some(value),
            other => tracing::debug!("Ignoring metadata key {}", other),
        }
    }

    /// Parse the publish date into a calendar date
    pub fn parse_publish_date(&self) -> Option<NaiveDate> {
        self.publish_date.as_deref().and_then(parse_date_string)
    }

    /// Serialize as the MDX export block written at the top of new posts.
    /// Absent fields are omitted.
    pub fn to_block(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} = {{", EXPORT_PREFIX);
        let fields = [
            ("title", &self.title),
            ("publishDate", &self.publish_date),
            ("description", &self.description),
            ("category", &self.category),
            ("cover_image", &self.cover_image),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(out, "    {}: \"{}\",", key, escape(value));
            }
        }
        out.push_str("};\n");
        out
    }
}

/// Split the inside of the export object into its top-level `key: value`
/// entries. Returns the entries and the byte offset just past the closing
/// brace. Braces, brackets and parentheses nest; quoted strings and `//`
/// comments are skipped.
fn split_entries(block: &str) -> Result<(Vec<&str>, usize)> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;
    let mut chars = block.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
            }
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' if depth > 0 => depth -= 1,
            '}' => {
                entries.push(&block[start..i]);
                return Ok((entries, i + 1));
            }
            ',' if depth == 0 => {
                entries.push(&block[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    Err(anyhow!("Metadata export is missing its closing brace"))
}

/// Strip quotes from a metadata value and resolve escapes.
/// Unquoted values are returned as-is; `None` means the quote never closed.
fn unquote(raw: &str) -> Option<String> {
    let mut chars = raw.chars();
    let quote = match chars.next() {
        Some(q @ ('"' | '\'' | '`')) => q,
        _ => return Some(raw.to_string()),
    };

    let mut out = String::new();
    let mut escaped = false;
    for c in chars {
        if escaped {
            out.push(match c {
                'n' => '\n',
                't' => '\t',
                other => other,
            });
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some(out);
        } else {
            out.push(c);
        }
    }
    None
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

/// Parse a date string in various formats, dropping any time component
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 keeps the author's own calendar date
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
