use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tileswap_core::Pipeline;

/// Split an image into a 4x4 grid, transpose the tiles and save the result as PNG
#[derive(Parser, Debug)]
#[command(name = "tileswap", author, version, about, long_about = None)]
struct Cli {
    /// Input image (PNG, WebP, JPEG or GIF). The result is written next to it
    /// with a .png extension
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let output = run(&cli)?;
    println!("Image saved in {}", output.display());
    Ok(())
}

/// Run the transform and return the output path.
fn run(cli: &Cli) -> Result<PathBuf> {
    log::debug!("processing {}", cli.input.display());
    Ok(Pipeline::new().run(&cli.input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::fixture::{FileWriteBin, PathChild};
    use assert_fs::TempDir;
    use clap::error::ErrorKind;
    use std::io::Cursor;
    use std::path::Path;

    fn parse(args: Vec<&str>) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn missing_input_is_usage_error() {
        let err = parse(vec!["tileswap"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("Usage: tileswap"));
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn extra_arguments_rejected() {
        let err = parse(vec!["tileswap", "a.png", "b.png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn input_argument() {
        let cli = parse(vec!["tileswap", "photo.webp"]).unwrap();
        assert_eq!(cli.input, Path::new("photo.webp"));
        assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn verbosity_flags() {
        let cli = parse(vec!["tileswap", "-vv", "photo.webp"]).unwrap();
        assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Debug);

        let cli = parse(vec!["tileswap", "-q", "photo.webp"]).unwrap();
        assert_eq!(cli.verbose.log_level_filter(), log::LevelFilter::Error);
    }

    #[test]
    fn version() {
        let err = parse(vec!["tileswap", "-V"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(err.to_string().starts_with("tileswap "));
    }

    #[test]
    fn run_writes_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.child("picture.jpeg.webp");
        input.write_binary(&png_bytes(8, 8)).unwrap();
        let input = input.path().to_str().unwrap();

        let cli = parse(vec!["tileswap", input]).unwrap();
        let output = run(&cli).unwrap();

        assert_eq!(output, dir.path().join("picture.jpeg.png"));
        assert!(output.exists());
    }

    #[test]
    fn run_reports_error_with_prefix() {
        let dir = TempDir::new().unwrap();
        let input = dir.child("small.png");
        input.write_binary(&png_bytes(2, 2)).unwrap();
        let input = input.path().to_str().unwrap();

        let cli = parse(vec!["tileswap", input]).unwrap();
        let err = run(&cli).unwrap_err().to_string();

        assert!(err.starts_with("Image width or height is less than the number of segments (4x4)"));
    }

    #[test]
    fn run_missing_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.webp");

        let cli = parse(vec!["tileswap", input.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err().to_string();

        assert!(err.starts_with("Cannot open input file"));
        assert!(!dir.path().join("absent.png").exists());
    }

    #[test]
    fn run_reports_cause_once() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.webp");

        let cli = parse(vec!["tileswap", input.to_str().unwrap()]).unwrap();
        let err = run(&cli).unwrap_err();
        let report = format!("{err:#}");
        let cause = err.root_cause().to_string();

        assert!(report.starts_with("Cannot open input file"));
        assert_ne!(report, cause);
        assert_eq!(report.matches(cause.as_str()).count(), 1, "{report}");
    }

    #[cfg(unix)]
    #[test]
    fn run_non_utf8_input() {
        use std::ffi::{OsStr, OsString};
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let input = dir.path().join(OsStr::from_bytes(b"na\xefve.webp"));
        std::fs::write(&input, png_bytes(8, 8)).unwrap();

        let args = [OsString::from("tileswap"), input.into_os_string()];
        let cli = Cli::try_parse_from(args).unwrap();
        let output = run(&cli).unwrap();

        assert_eq!(output, dir.path().join(OsStr::from_bytes(b"na\xefve.png")));
        assert!(output.exists());
    }
}
