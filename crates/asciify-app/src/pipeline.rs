use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asciify_ascii::rasterizer::Rasterizer;
use asciify_core::config::{OutputBox, OutputTarget, RasterConfig, RenderProfile};

use crate::cli::Cli;

/// Conversion entièrement résolue (CLI + config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Image to convert.
    pub image: PathBuf,
    /// Inline text or file export.
    pub target: OutputTarget,
    /// Sizing profile.
    pub profile: RenderProfile,
    /// Character box handed to the rasterizer.
    pub output_box: OutputBox,
    /// Destination for [`OutputTarget::File`].
    pub out: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
    /// Fenced text block ready to print.
    Inline(String),
    /// Path of the written text file.
    File(PathBuf),
}

/// Merge CLI overrides over the loaded config.
///
/// # Errors
/// Returns an error for an unknown target/profile, an incomplete box, or a box
/// above the target's ceiling.
pub fn resolve_request(cli: &Cli, config: &RasterConfig) -> Result<Request> {
    let target = match cli.target.as_deref() {
        Some(s) => s.parse::<OutputTarget>()?,
        None => config.target,
    };
    let profile = match cli.profile.as_deref() {
        Some(s) => s.parse::<RenderProfile>()?,
        None => config.profile,
    };

    let output_box = match cli.requested_box()? {
        Some((max_width, max_height)) => {
            check_ceiling(target, max_width, max_height)?;
            OutputBox {
                max_width,
                max_height,
            }
        }
        // The config's own target default applies only when the target was not overridden.
        None if target == config.target => config.output_box(),
        None => target.default_box(),
    };

    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| default_out_path(&cli.image));

    Ok(Request {
        image: cli.image.clone(),
        target,
        profile,
        output_box,
        out,
    })
}

fn check_ceiling(target: OutputTarget, max_width: u32, max_height: u32) -> Result<()> {
    let ceiling = target.ceiling();
    if max_width > ceiling.max_width {
        anyhow::bail!(
            "--max-width doit être un entier au plus égal à {} pour la cible {}",
            ceiling.max_width,
            target.name()
        );
    }
    if max_height > ceiling.max_height {
        anyhow::bail!(
            "--max-height doit être un entier au plus égal à {} pour la cible {}",
            ceiling.max_height,
            target.name()
        );
    }
    Ok(())
}

/// `cat.png` → `cat.txt`.
#[must_use]
pub fn default_out_path(image: &Path) -> PathBuf {
    image.with_extension("txt")
}

/// Wrap a text block in a triple-backtick fence.
#[must_use]
pub fn inline_reply(text: &str) -> String {
    format!("```\n{text}```\n")
}

/// Decode, rasterize, deliver.
///
/// # Errors
/// Returns an error if decoding, rasterizing or writing the output fails.
pub fn run(request: &Request) -> Result<Delivery> {
    let frame = asciify_source::decode_path(&request.image)
        .with_context(|| format!("Impossible de lire {}", request.image.display()))?;

    let rasterizer = Rasterizer::with_profile(request.profile);
    let text = rasterizer
        .rasterize(
            &frame,
            request.output_box.max_width,
            request.output_box.max_height,
        )
        .with_context(|| {
            format!(
                "Impossible de convertir {} ({}×{} px) dans {}×{}",
                request.image.display(),
                frame.width,
                frame.height,
                request.output_box.max_width,
                request.output_box.max_height
            )
        })?;
    log::info!(
        "{} converti : {} octets, profil {}",
        request.image.display(),
        text.len(),
        request.profile
    );

    match request.target {
        OutputTarget::Inline => Ok(Delivery::Inline(inline_reply(&text))),
        OutputTarget::File => {
            std::fs::write(&request.out, &text)
                .with_context(|| format!("Impossible d'écrire {}", request.out.display()))?;
            log::info!("Texte écrit dans {}", request.out.display());
            Ok(Delivery::File(request.out.clone()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["asciify", "--image", "cat.png"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            Rgba([v, v, v, 255])
        })
        .save(&path)
        .unwrap();
        path
    }

    #[test]
    fn defaults_come_from_config() {
        let req = resolve_request(&cli(&[]), &RasterConfig::default()).unwrap();
        assert_eq!(req.target, OutputTarget::Inline);
        assert_eq!(req.profile, RenderProfile::Proportional);
        assert_eq!((req.output_box.max_width, req.output_box.max_height), (60, 30));
        assert_eq!(req.out, PathBuf::from("cat.txt"));
    }

    #[test]
    fn file_target_uses_its_own_default_box() {
        let req = resolve_request(&cli(&["--target", "file"]), &RasterConfig::default()).unwrap();
        assert_eq!(req.target, OutputTarget::File);
        assert_eq!((req.output_box.max_width, req.output_box.max_height), (256, 128));
    }

    #[test]
    fn config_box_kept_when_target_unchanged() {
        let config = RasterConfig {
            max_width: Some(40),
            max_height: Some(20),
            ..RasterConfig::default()
        };
        let req = resolve_request(&cli(&[]), &config).unwrap();
        assert_eq!((req.output_box.max_width, req.output_box.max_height), (40, 20));
    }

    #[test]
    fn cli_overrides_profile() {
        let req = resolve_request(&cli(&["--profile", "display"]), &RasterConfig::default())
            .unwrap();
        assert_eq!(req.profile, RenderProfile::Display);
        assert!(resolve_request(&cli(&["--profile", "wide"]), &RasterConfig::default()).is_err());
    }

    #[test]
    fn inline_ceiling_enforced() {
        let args = ["--max-width", "61", "--max-height", "30"];
        assert!(resolve_request(&cli(&args), &RasterConfig::default()).is_err());
        let args = ["--max-width", "60", "--max-height", "31"];
        assert!(resolve_request(&cli(&args), &RasterConfig::default()).is_err());
        let args = ["--target", "file", "--max-width", "200", "--max-height", "100"];
        assert!(resolve_request(&cli(&args), &RasterConfig::default()).is_ok());
    }

    #[test]
    fn inline_reply_is_fenced() {
        assert_eq!(inline_reply("ab\ncd\n"), "```\nab\ncd\n```\n");
    }

    #[test]
    fn inline_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(dir.path(), "wide.png", 100, 50);
        let request = Request {
            image,
            target: OutputTarget::Inline,
            profile: RenderProfile::Proportional,
            output_box: OutputTarget::Inline.default_box(),
            out: dir.path().join("unused.txt"),
        };
        let Delivery::Inline(reply) = run(&request).unwrap() else {
            panic!("expected inline delivery");
        };
        let body: Vec<&str> = reply.lines().collect();
        // fence + 30 rows + fence
        assert_eq!(body.len(), 32);
        assert!(body[1..31].iter().all(|l| l.len() == 60));
        assert!(!dir.path().join("unused.txt").exists());
    }

    #[test]
    fn file_run_writes_text() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(dir.path(), "square.png", 200, 200);
        let out = dir.path().join("square.txt");
        let request = Request {
            image,
            target: OutputTarget::File,
            profile: RenderProfile::Display,
            output_box: OutputBox {
                max_width: 60,
                max_height: 30,
            },
            out: out.clone(),
        };
        assert_eq!(run(&request).unwrap(), Delivery::File(out.clone()));
        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), 15);
        assert!(text.lines().all(|l| l.len() == 60));
    }

    #[test]
    fn unsupported_image_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request {
            image: dir.path().join("anim.gif"),
            target: OutputTarget::File,
            profile: RenderProfile::Proportional,
            output_box: OutputTarget::File.default_box(),
            out: dir.path().join("anim.txt"),
        };
        assert!(run(&request).is_err());
        assert!(!dir.path().join("anim.txt").exists());
    }

    #[test]
    fn degenerate_image_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_png(dir.path(), "thin.png", 1, 1000);
        let out = dir.path().join("thin.txt");
        let request = Request {
            image,
            target: OutputTarget::File,
            profile: RenderProfile::Proportional,
            output_box: OutputTarget::Inline.default_box(),
            out: out.clone(),
        };
        let err = run(&request).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<asciify_core::CoreError>(),
            Some(asciify_core::CoreError::DegenerateOutput { .. })
        ));
        assert!(!out.exists());
    }
}
