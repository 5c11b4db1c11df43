use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Facteur de compression verticale du profil `Display`.
///
/// Character cells are roughly twice as tall as they are wide, so the display
/// profile keeps half as many rows as the aspect ratio alone would give.
pub const DISPLAY_VERTICAL_COMPRESSION: f64 = 0.5;

/// Sizing variant used by the geometry planner.
///
/// # Example
/// ```
/// use asciify_core::config::RenderProfile;
/// let p = RenderProfile::default();
/// assert!(matches!(p, RenderProfile::Proportional));
/// assert_eq!(RenderProfile::Display.vertical_compression(), 0.5);
/// assert!(RenderProfile::Display.caps_native_resolution());
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum RenderProfile {
    /// Plain aspect scaling: no compression, no native-resolution cap.
    #[default]
    Proportional,
    /// Native-resolution cap plus the fixed vertical compression.
    Display,
}

impl RenderProfile {
    /// Multiplier applied to the planned height after aspect adjustment.
    #[must_use]
    pub const fn vertical_compression(self) -> f64 {
        match self {
            Self::Proportional => 1.0,
            Self::Display => DISPLAY_VERTICAL_COMPRESSION,
        }
    }

    /// Whether the requested box is capped at the image's pixel dimensions.
    #[must_use]
    pub const fn caps_native_resolution(self) -> bool {
        matches!(self, Self::Display)
    }

    /// Nom lisible pour les logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::Display => "display",
        }
    }
}

impl fmt::Display for RenderProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderProfile {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "proportional" => Ok(Self::Proportional),
            "display" => Ok(Self::Display),
            other => Err(CoreError::Config(format!(
                "unknown profile '{other}' (expected proportional or display)"
            ))),
        }
    }
}

/// Requested character box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputBox {
    /// Maximum width in characters.
    pub max_width: u32,
    /// Maximum height in characters.
    pub max_height: u32,
}

/// Where the rendered text goes.
///
/// # Example
/// ```
/// use asciify_core::config::OutputTarget;
/// let inline = OutputTarget::Inline.default_box();
/// assert_eq!((inline.max_width, inline.max_height), (60, 30));
/// let file = OutputTarget::File.default_box();
/// assert_eq!((file.max_width, file.max_height), (256, 128));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OutputTarget {
    /// Text block printed inline, sized for a 2000-character chat message.
    #[default]
    Inline,
    /// Text written to a `.txt` file.
    File,
}

impl OutputTarget {
    /// Box used when the caller does not request one.
    #[must_use]
    pub const fn default_box(self) -> OutputBox {
        match self {
            Self::Inline => OutputBox {
                max_width: 60,
                max_height: 30,
            },
            Self::File => OutputBox {
                max_width: 256,
                max_height: 128,
            },
        }
    }

    /// Largest box a caller may request for this target.
    #[must_use]
    pub const fn ceiling(self) -> OutputBox {
        self.default_box()
    }

    /// Nom lisible pour les logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::File => "file",
        }
    }
}

impl FromStr for OutputTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "file" => Ok(Self::File),
            other => Err(CoreError::Config(format!(
                "unknown target '{other}' (expected inline or file)"
            ))),
        }
    }
}

/// Configuration du rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use asciify_core::config::{OutputTarget, RasterConfig};
/// let config = RasterConfig::default();
/// assert_eq!(config.target, OutputTarget::Inline);
/// assert_eq!(config.output_box().max_width, 60);
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RasterConfig {
    /// Sizing variant.
    pub profile: RenderProfile,
    /// Inline text or file export.
    pub target: OutputTarget,
    /// Width override; `None` uses the target's default box.
    pub max_width: Option<u32>,
    /// Height override; `None` uses the target's default box.
    pub max_height: Option<u32>,
}

impl RasterConfig {
    /// Box after applying overrides on top of the target's default.
    #[must_use]
    pub fn output_box(&self) -> OutputBox {
        let default = self.target.default_box();
        OutputBox {
            max_width: self.max_width.unwrap_or(default.max_width),
            max_height: self.max_height.unwrap_or(default.max_height),
        }
    }

    /// Clamp overrides to the target's ceiling.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        let ceiling = self.target.ceiling();
        if let Some(w) = self.max_width.filter(|&w| w > ceiling.max_width) {
            log::warn!(
                "max_width {w} dépasse le plafond {} pour la cible {}",
                ceiling.max_width,
                self.target.name()
            );
            self.max_width = Some(ceiling.max_width);
        }
        if let Some(h) = self.max_height.filter(|&h| h > ceiling.max_height) {
            log::warn!(
                "max_height {h} dépasse le plafond {} pour la cible {}",
                ceiling.max_height,
                self.target.name()
            );
            self.max_height = Some(ceiling.max_height);
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    profile: Option<RenderProfile>,
    target: Option<OutputTarget>,
    max_width: Option<u32>,
    max_height: Option<u32>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use asciify_core::config::{parse_config, RenderProfile};
/// let config = parse_config("[render]\nprofile = \"Display\"\n").unwrap();
/// assert_eq!(config.profile, RenderProfile::Display);
/// ```
pub fn parse_config(content: &str) -> Result<RasterConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RasterConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.profile {
            config.profile = v;
        }
        if let Some(v) = r.target {
            config.target = v;
        }
        if let Some(v) = r.max_width {
            config.max_width = Some(v);
        }
        if let Some(v) = r.max_height {
            config.max_height = Some(v);
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use asciify_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RasterConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    parse_config(&content).with_context(|| format!("Config invalide dans {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RasterConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config("[render]\ntarget = \"File\"\n").unwrap();
        assert_eq!(config.target, OutputTarget::File);
        assert_eq!(config.profile, RenderProfile::Proportional);
        let b = config.output_box();
        assert_eq!((b.max_width, b.max_height), (256, 128));
    }

    #[test]
    fn overrides_above_ceiling_are_clamped() {
        let config = parse_config("[render]\nmax_width = 500\nmax_height = 10\n").unwrap();
        let b = config.output_box();
        assert_eq!((b.max_width, b.max_height), (60, 10));
    }

    #[test]
    fn zero_override_is_kept_for_the_validator() {
        let config = parse_config("[render]\nmax_width = 0\n").unwrap();
        assert_eq!(config.output_box().max_width, 0);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        assert!(parse_config("[render]\nprofile = \"Sideways\"\n").is_err());
    }

    #[test]
    fn profile_from_str_is_case_insensitive() {
        assert_eq!(
            "DISPLAY".parse::<RenderProfile>().unwrap(),
            RenderProfile::Display
        );
        assert!(matches!(
            "wide".parse::<RenderProfile>(),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn target_from_str() {
        assert_eq!("file".parse::<OutputTarget>().unwrap(), OutputTarget::File);
        assert!("mp4".parse::<OutputTarget>().is_err());
    }

    #[test]
    fn load_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asciify.toml");
        std::fs::write(&path, "[render]\nprofile = \"Display\"\nmax_height = 20\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.profile, RenderProfile::Display);
        assert_eq!(config.output_box().max_height, 20);
    }

    #[test]
    fn load_config_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
