use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::engine::mode::Mode;
use crate::foundation::core::Canvas;
use crate::foundation::error::{PixelbrushError, PixelbrushResult};

/// Frame delay used when none is given, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 15;

/// User-facing options, as written in JSON.
///
/// ```json
/// { "mode": "fade-in", "loop": false, "interval": 15, "ignore_class": "hide" }
/// ```
///
/// Unknown modes fall back to `fade-in`; `loop` also accepts `"true"` and `"1"`; a malformed
/// `interval` falls back to the default. Values of the wrong type (`null`, arrays, objects)
/// read as the field's default; `ignore_class` also accepts an array of class names.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelbrushOptions {
    /// Animation mode.
    pub mode: Mode,
    /// Reverse at boundaries instead of finishing.
    #[serde(rename = "loop", deserialize_with = "de_flag")]
    pub looping: bool,
    /// Delay between frames in milliseconds.
    #[serde(deserialize_with = "de_interval")]
    pub interval: u64,
    /// Space-separated classes removed from the element when it is restored.
    #[serde(deserialize_with = "de_classes")]
    pub ignore_class: String,
    /// On-screen size of the element, when it differs from the image's intrinsic size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Canvas>,
}

impl Default for PixelbrushOptions {
    fn default() -> Self {
        Self {
            mode: Mode::FadeIn,
            looping: false,
            interval: DEFAULT_INTERVAL_MS,
            ignore_class: String::new(),
            size: None,
        }
    }
}

impl PixelbrushOptions {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PixelbrushResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| PixelbrushError::serde(format!("parse options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(s: &str) -> PixelbrushResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PixelbrushResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelbrushError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check fields that cannot fall back to a default.
    pub fn validate(&self) -> PixelbrushResult<()> {
        if let Some(size) = self.size {
            Canvas::new(size.width, size.height)?;
        }
        Ok(())
    }

    /// Normalize into the engine's activation config.
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            mode: self.mode,
            looping: self.looping,
            interval: Duration::from_millis(self.interval),
            ignore_classes: self
                .ignore_class
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Normalized activation config consumed by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Mode the engine is activated with.
    pub mode: Mode,
    /// Reverse at boundaries instead of finishing.
    pub looping: bool,
    /// Delay requested between frames.
    pub interval: Duration,
    /// Classes removed from the element when it is restored.
    pub ignore_classes: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        PixelbrushOptions::default().to_engine_config()
    }
}

impl EngineConfig {
    /// Default config in `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set the loop flag.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the frame delay.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Any JSON value, sorted into the shapes option fields know how to read.
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

fn de_flag<'de, D: serde::Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let v = <Loose as serde::Deserialize>::deserialize(d)?;
    Ok(match v {
        Loose::Bool(b) => b,
        Loose::Int(i) => i == 1,
        Loose::Float(f) => f == 1.0,
        Loose::Text(s) => matches!(s.trim(), "true" | "1"),
        Loose::List(_) | Loose::Other(_) => {
            tracing::debug!("malformed loop flag, using false");
            false
        }
    })
}

fn de_interval<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let v = <Loose as serde::Deserialize>::deserialize(d)?;
    let ms = match v {
        Loose::Int(i) => u64::try_from(i).ok(),
        Loose::Float(f) if f.is_finite() && f >= 0.0 => Some(f.round() as u64),
        Loose::Text(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(ms.unwrap_or_else(|| {
        tracing::debug!("malformed interval, using {DEFAULT_INTERVAL_MS} ms");
        DEFAULT_INTERVAL_MS
    }))
}

fn de_classes<'de, D: serde::Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let v = <Loose as serde::Deserialize>::deserialize(d)?;
    Ok(match v {
        Loose::Text(s) => s,
        Loose::List(items) => items.join(" "),
        _ => {
            tracing::debug!("malformed ignore_class, using none");
            String::new()
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
