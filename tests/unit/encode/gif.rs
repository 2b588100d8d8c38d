use super::*;
use crate::{foundation::error::CountdownError, test_support::*};

fn strs(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

#[test]
fn palette_pass_arguments() {
    let args = GifEncoder::palette_args(Path::new("t/frame_%04d.png"), Path::new("palette.png"));
    assert_eq!(
        strs(&args),
        vec![
            "-loglevel",
            "warning",
            "-i",
            "t/frame_%04d.png",
            "-vf",
            "palettegen=stats_mode=diff",
            "-y",
            "palette.png",
            "-hide_banner",
        ]
    );
}

#[test]
fn encode_pass_arguments() {
    let args = GifEncoder::encode_args(
        Path::new("t/frame_%04d.png"),
        Path::new("palette.png"),
        Path::new("out.gif"),
    );
    assert_eq!(
        strs(&args),
        vec![
            "-loglevel",
            "warning",
            "-framerate",
            "1",
            "-i",
            "t/frame_%04d.png",
            "-i",
            "palette.png",
            "-filter_complex",
            "paletteuse",
            "-r",
            "1",
            "-loop",
            "0",
            "-y",
            "out.gif",
            "-hide_banner",
        ]
    );
}

#[test]
fn default_program_is_ffmpeg() {
    assert_eq!(GifEncoder::default().program(), Path::new("ffmpeg"));
}

#[cfg(unix)]
#[test]
fn assemble_runs_palette_then_encode() {
    let dir = scratch_dir("gif_assemble");
    let enc = GifEncoder::new(fake_encoder(&dir));
    let pattern = dir.join("frame_%04d.png");
    let palette = dir.join("palette.png");
    let output = dir.join("out.gif");

    enc.assemble(&pattern, &palette, &output).unwrap();

    assert!(palette.exists());
    assert!(output.exists());
    let log = std::fs::read_to_string(dir.join("encoder.log")).unwrap();
    let lines: Vec<_> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("palettegen=stats_mode=diff"));
    assert!(lines[1].contains("paletteuse"));
    assert!(lines[1].contains("-loop 0"));
}

#[cfg(unix)]
#[test]
fn failing_palette_pass_skips_encode() {
    let dir = scratch_dir("gif_fail");
    let enc = GifEncoder::new(failing_encoder(&dir));
    let output = dir.join("out.gif");

    let err = enc
        .assemble(&dir.join("frame_%04d.png"), &dir.join("palette.png"), &output)
        .unwrap_err();
    match err {
        CountdownError::Tool { status, stderr, .. } => {
            assert_eq!(status.and_then(|s| s.code()), Some(2));
            assert!(stderr.contains("encoder exploded"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn missing_palette_artifact_is_an_error() {
    let dir = scratch_dir("gif_silent");
    let enc = GifEncoder::new(silent_encoder(&dir));
    let err = enc
        .assemble(
            &dir.join("frame_%04d.png"),
            &dir.join("palette.png"),
            &dir.join("out.gif"),
        )
        .unwrap_err();
    assert!(err.to_string().contains("palette.png"));
}
