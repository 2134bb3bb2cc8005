//! Supporting helpers: path rendering and colored message prefixes.

use crate::error::{GenError, Result};
use glob::{glob_with, MatchOptions};
use owo_colors::OwoColorize;
use std::path::{Component, Path, PathBuf};

/// Whether colored output is allowed for the given output mode.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if use_colors("human") {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

/// Expand `pattern` in sorted order. Wildcards never match entries whose
/// name starts with a dot, so tool and cache directories stay out of scans.
pub fn glob_visible(pattern: &str) -> Result<Vec<PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let scan_err = |reason: String| GenError::Scan {
        pattern: pattern.to_string(),
        reason,
    };
    glob_with(pattern, options)
        .map_err(|e| scan_err(e.to_string()))?
        .map(|entry| entry.map_err(|e| scan_err(e.to_string())))
        .collect()
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Path of `path` relative to `base`, `/`-separated; falls back to the
/// lossy absolute path when no relative form exists.
pub fn rel_slash(path: &Path, base: &Path) -> String {
    match pathdiff::diff_paths(path, base) {
        Some(rel) => to_slash(&rel),
        None => path.to_string_lossy().to_string(),
    }
}

/// Quote a string as a single-quoted JS/TS literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
