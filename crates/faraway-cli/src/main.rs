mod env;
mod prompt;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use faraway_core::{
    AnsiStyle, Feature, FeatureArray, MarkerStyle, PlainStyle, Platform, Renderer, SaveBuffer,
    keys_by_level, locate,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "faraway")]
#[command(about = "Progress viewer for Faraway: Director's Cut save files")]
struct Args {
    /// Save file path. Autodetected when omitted.
    #[arg(env = "FARAWAY_SAVE")]
    path: Option<PathBuf>,

    /// Print markers without colors
    #[arg(long)]
    no_color: bool,

    /// Exit without waiting for a keypress
    #[arg(long)]
    no_wait: bool,
}

fn main() {
    // Logs go to stderr so stdout only carries the tables
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        println!("{:#}", e);
    }

    if !args.no_wait {
        prompt::wait_for_key();
    }
}

fn run(args: &Args) -> Result<()> {
    let path_env = env::path_env();
    let path = locate(
        args.path.as_deref(),
        Platform::current(),
        &path_env,
        Path::exists,
    )
    .context("Failed to determine save file location")?;

    info!("Reading save file {}", path.display());
    let save = SaveBuffer::load(&path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.no_color {
        print_progress(&mut out, &save, &Renderer::new(PlainStyle))
    } else {
        print_progress(&mut out, &save, &Renderer::new(AnsiStyle))
    }
}

/// Print the tables; rows written before a failure stay on screen.
fn print_progress<W: Write, S: MarkerStyle>(
    out: &mut W,
    save: &SaveBuffer,
    renderer: &Renderer<S>,
) -> Result<()> {
    let arrays = renderer
        .write_save(out, save)
        .context("Failed to show save progress (save file too short?)")?;
    for array in &arrays {
        log_summary(array);
    }
    Ok(())
}

fn log_summary(array: &FeatureArray) {
    for view in array.feature().views() {
        debug!(
            "{}: {}/{} set",
            view.label,
            array.count_set(view.mask),
            array.len()
        );
    }

    if array.feature() == Feature::Keys {
        for (key, (level, found)) in keys_by_level(array).into_iter().enumerate() {
            debug!("Key {} (level {}): {}", key + 1, level, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faraway_core::MIN_SAVE_LEN;

    #[test]
    fn test_args_path_optional() {
        let args = Args::try_parse_from(["faraway"]).unwrap();
        assert!(!args.no_color);
        assert!(!args.no_wait);

        let args = Args::try_parse_from(["faraway", "save.bin", "--no-color", "--no-wait"])
            .unwrap();
        assert_eq!(args.path, Some(PathBuf::from("save.bin")));
        assert!(args.no_color);
        assert!(args.no_wait);
    }

    #[test]
    fn test_args_rejects_extra_positional() {
        assert!(Args::try_parse_from(["faraway", "a.save", "b.save"]).is_err());
    }

    #[test]
    fn test_print_progress_full() {
        let mut bytes = vec![0u8; MIN_SAVE_LEN];
        bytes[0x216] = 0x01;
        let save = SaveBuffer::from_bytes(bytes);

        let mut out = Vec::new();
        print_progress(&mut out, &save, &Renderer::new(PlainStyle)).unwrap();
        let output = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[13], "Keys");
        assert_eq!(lines[14], " +  -  -  -  -  -  -  - ");
    }

    #[test]
    fn test_print_progress_keeps_rows_before_failure() {
        // Long enough for levels and letters, too short for pots
        let save = SaveBuffer::from_bytes(vec![0u8; 0x200]);

        let mut out = Vec::new();
        let err = print_progress(&mut out, &save, &Renderer::new(PlainStyle)).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Failed to show save progress (save file too short?): \
             Save data out of range: 1 bytes at offset 0x384 exceed buffer of 512 bytes"
        );

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Letter 3"));
        assert!(!output.contains("Pots"));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("FarawaySave4.save");
        let args = Args {
            path: Some(path.clone()),
            no_color: true,
            no_wait: true,
        };
        let err = run(&args).unwrap_err();

        // The I/O cause is printed once, after the path
        let cause = std::fs::read(&path).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            format!("Failed to read save file {}: {}", path.display(), cause)
        );
    }
}
