use std::path::PathBuf;

use clap::Parser;

/// asciify — convertit une image PNG/JPEG en texte ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source : chemin vers un PNG ou un JPEG.
    #[arg(long)]
    pub image: PathBuf,

    /// Cible : "inline" (bloc de texte sur stdout) ou "file" (fichier .txt).
    #[arg(long)]
    pub target: Option<String>,

    /// Fichier de sortie pour la cible "file". Défaut : l'image avec l'extension .txt.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Largeur maximale en caractères. Requiert --max-height.
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Hauteur maximale en caractères. Requiert --max-width.
    #[arg(long)]
    pub max_height: Option<u32>,

    /// Profil de dimensionnement : proportional, display.
    #[arg(long)]
    pub profile: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Explicit box from the command line, if any.
    ///
    /// # Errors
    /// Returns an error if only one of `--max-width` / `--max-height` is given.
    pub fn requested_box(&self) -> anyhow::Result<Option<(u32, u32)>> {
        match (self.max_width, self.max_height) {
            (Some(w), Some(h)) => Ok(Some((w, h))),
            (None, None) => Ok(None),
            _ => anyhow::bail!(
                "Paramètres incomplets : utilisez --max-width ET --max-height, ou aucun des deux."
            ),
        }
    }
}
