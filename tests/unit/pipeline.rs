use super::*;
use crate::test_support::*;

#[test]
fn empty_filename_is_rejected_before_any_work() {
    let dir = scratch_dir("pipeline_empty_name");
    let cfg = PipelineConfig::new(
        " ",
        &dir,
        CountdownSpec::new(0, 1, 1).unwrap(),
        Rasterizer::new("inkscape"),
    );
    let err = run_pipeline(&cfg).unwrap_err();
    assert!(matches!(err, CountdownError::Validation(_)));
    assert!(!dir.join(" _temp").exists());
}

#[test]
fn layout_appends_gif_suffix() {
    let cfg = PipelineConfig::new(
        "ten",
        "/work",
        CountdownSpec::new(10, 0, 10).unwrap(),
        Rasterizer::new("inkscape"),
    );
    let layout = cfg.layout();
    assert_eq!(layout.output_path, std::path::Path::new("/work/ten.gif"));
    assert_eq!(layout.temp_dir, std::path::Path::new("/work/ten_temp"));
}

#[cfg(unix)]
fn fake_config(dir: &std::path::Path, workers: usize) -> PipelineConfig {
    let mut cfg = PipelineConfig::new(
        "count",
        dir,
        CountdownSpec::new(0, 5, 3).unwrap(),
        Rasterizer::new(fake_rasterizer(dir)),
    );
    cfg.encoder = GifEncoder::new(fake_encoder(dir));
    cfg.dispatch = Dispatch::from_workers(workers);
    cfg
}

#[cfg(unix)]
#[test]
fn successful_run_cleans_up() {
    for workers in [0usize, 3] {
        let dir = scratch_dir(&format!("pipeline_ok_{workers}"));
        let cfg = fake_config(&dir, workers);

        let report = run_pipeline(&cfg).unwrap();

        assert_eq!(report.frames, 8);
        assert!(report.cleaned);
        assert!(report.layout.output_path.exists());
        assert!(!report.layout.temp_dir.exists());
        assert!(!report.layout.palette_path.exists());

        let log = std::fs::read_to_string(dir.join("encoder.log")).unwrap();
        assert!(log.contains("count_temp/frame_%04d.png"));
    }
}

#[cfg(unix)]
#[test]
fn encoder_failure_keeps_the_frames() {
    let dir = scratch_dir("pipeline_encoder_fail");
    let mut cfg = fake_config(&dir, 0);
    cfg.encoder = GifEncoder::new(failing_encoder(&dir));

    let err = run_pipeline(&cfg).unwrap_err();
    assert!(matches!(err, CountdownError::Tool { .. }));

    let layout = cfg.layout();
    assert!(!layout.output_path.exists());
    assert_eq!(dir_snapshot(&layout.temp_dir).len(), 8);
}

#[cfg(unix)]
#[test]
fn missing_output_skips_teardown() {
    let dir = scratch_dir("pipeline_output_missing");
    let mut cfg = fake_config(&dir, 0);
    cfg.encoder = GifEncoder::new(palette_only_encoder(&dir));

    let err = run_pipeline(&cfg).unwrap_err();
    assert!(err.to_string().contains("count.gif"));

    let layout = cfg.layout();
    assert!(!layout.output_path.exists());
    assert!(layout.palette_path.exists());
    assert_eq!(dir_snapshot(&layout.temp_dir).len(), 8);
}

#[cfg(unix)]
#[test]
fn frame_failure_aborts_before_encoding() {
    let dir = scratch_dir("pipeline_frame_fail");
    let mut cfg = fake_config(&dir, 2);
    cfg.rasterizer = Rasterizer::new(fake_rasterizer_failing_on(&dir, "frame_0004"));

    let err = run_pipeline(&cfg).unwrap_err();
    assert_eq!(err.frame_index(), Some(4));
    assert!(!dir.join("encoder.log").exists());
    assert!(cfg.layout().temp_dir.exists());
}
