use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::document::LineEnding;

/// Flags that can be given on the command line or saved as defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub perf: bool,
    pub debug_log: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub line_ending: Option<LineEnding>,
    pub history_limit: Option<usize>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins wherever it sets a value.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            perf: self.perf || other.perf,
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            line_ending: other.line_ending.or(self.line_ending),
            history_limit: other.history_limit.or(self.history_limit),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("runedit").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("runedit")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("runedit").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("runedit").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".runeditrc")
}

/// Read saved flags. A missing file means no saved flags.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# runedit defaults (saved with --save)".to_string());
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(ending) = flags.line_ending {
        lines.push(format!("--line-ending {}", ending.name()));
    }
    if let Some(limit) = flags.history_limit {
        lines.push(format!("--history-limit {limit}"));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick known flags out of a token list; anything else is ignored.
///
/// Value flags accept both `--flag value` and `--flag=value`. Values that
/// do not parse leave the flag unset.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--perf" {
            flags.perf = true;
        } else if let Some(value) = flag_value(tokens, &mut i, "--debug-log") {
            flags.debug_log = Some(PathBuf::from(value));
        } else if let Some(value) = flag_value(tokens, &mut i, "--log-file") {
            flags.log_file = Some(PathBuf::from(value));
        } else if let Some(value) = flag_value(tokens, &mut i, "--line-ending") {
            flags.line_ending = parse_line_ending(value);
        } else if let Some(value) = flag_value(tokens, &mut i, "--history-limit") {
            flags.history_limit = value.parse().ok();
        }
        i += 1;
    }
    flags
}

/// Value of `name` at `tokens[*i]`, consuming the next token for the
/// space-separated form.
fn flag_value<'a>(tokens: &'a [String], i: &mut usize, name: &str) -> Option<&'a str> {
    let token = tokens[*i].as_str();
    if token == name {
        let next = tokens.get(*i + 1)?;
        *i += 1;
        return Some(next.as_str());
    }
    token.strip_prefix(name)?.strip_prefix('=')
}

fn parse_line_ending(s: &str) -> Option<LineEnding> {
    match s {
        "lf" => Some(LineEnding::Lf),
        "crlf" => Some(LineEnding::Crlf),
        _ => None,
    }
}
