//! User configuration for platter.
//!
//! Settings live in a single `platter.conf` of `KEY = VALUE` lines under the
//! user's config directory. Unknown keys are ignored, missing files are
//! created from a commented skeleton, and every value falls back to its
//! default when absent or unparsable, so configuration can never prevent the
//! app from starting.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Commented skeleton written when no config file exists yet.
pub const SKELETON_CONFIG_CONTENT: &str = "\
# platter configuration
#
# Terminal widths below this many columns use the narrow (stacked card)
# layout; wider terminals show the full grid and the featured strip.
# narrow_threshold = 100
#
# Trailing debounce applied to resize handling, in milliseconds.
# resize_debounce_ms = 150
#
# Duration of smooth scroll jumps (track clicks, reveal scrolling).
# scroll_anim_ms = 250
#
# Show the horizontally scrollable featured strip on wide layouts.
# featured_strip = true
#
# Absolute path to a JSON catalog (array of products). Demo catalog is used
# when unset.
# catalog_path = /home/you/.config/platter/catalog.json
";

/// Resolved user settings with defaults applied.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Column threshold separating the narrow and wide layouts.
    pub narrow_threshold: u16,
    /// Trailing-edge debounce for resize handling.
    pub resize_debounce: Duration,
    /// Duration of eased scroll jumps.
    pub scroll_anim: Duration,
    /// Whether the featured strip (and its scrollbar) is enabled at all.
    pub featured_strip: bool,
    /// Optional catalog file path.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            narrow_threshold: 100,
            resize_debounce: Duration::from_millis(150),
            scroll_anim: Duration::from_millis(250),
            featured_strip: true,
            catalog_path: None,
        }
    }
}

/// Determine the configuration directory, creating it if needed.
///
/// Respects `XDG_CONFIG_HOME`, falling back to `~/.config`, then the current
/// directory as a last resort.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("platter");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Directory for log files, creating it if needed.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Strip a trailing `#` comment from a value, honoring nothing fancier than
/// whitespace before the hash.
fn strip_inline_comment(val: &str) -> &str {
    match val.find('#') {
        Some(i) => val[..i].trim(),
        None => val.trim(),
    }
}

/// Parse truthy config values the way the rest of the config family does.
fn parse_bool(val: &str) -> bool {
    matches!(val.to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// What: Load settings from `dir/platter.conf`, writing a skeleton first if
/// the file is missing.
///
/// Inputs:
/// - `dir`: Configuration directory to read from.
///
/// Output:
/// - Settings with defaults for anything missing or malformed.
///
/// Details:
/// - Keys are case-insensitive and `.`/`-`/space are normalized to `_`.
/// - Lines starting with `#` or `//` are comments; inline `#` comments are
///   stripped from values.
/// - Zero is rejected for the threshold and durations (it would make the
///   layout test or the debounce degenerate); such values keep the default.
#[must_use]
pub fn load_from(dir: &Path) -> Settings {
    let mut out = Settings::default();
    let path = dir.join("platter.conf");
    if !path.is_file() {
        let _ = fs::create_dir_all(dir);
        let _ = fs::write(&path, SKELETON_CONFIG_CONTENT);
        return out;
    }
    let Ok(content) = fs::read_to_string(&path) else {
        return out;
    };
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "narrow_threshold" => {
                if let Ok(v) = val.parse::<u16>()
                    && v > 0
                {
                    out.narrow_threshold = v;
                }
            }
            "resize_debounce_ms" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    out.resize_debounce = Duration::from_millis(v);
                }
            }
            "scroll_anim_ms" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    out.scroll_anim = Duration::from_millis(v);
                }
            }
            "featured_strip" | "show_featured_strip" => {
                out.featured_strip = parse_bool(val);
            }
            "catalog_path" | "catalog" => {
                if !val.is_empty() {
                    out.catalog_path = Some(PathBuf::from(val));
                }
            }
            _ => {}
        }
    }
    out
}

/// Load settings from the default config directory.
#[must_use]
pub fn settings() -> Settings {
    load_from(&config_dir())
}
