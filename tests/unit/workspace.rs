use super::*;
use crate::test_support::*;

#[test]
fn gif_suffix_is_appended_once() {
    assert_eq!(gif_file_name("ten"), "ten.gif");
    assert_eq!(gif_file_name("ten.gif"), "ten.gif");
    assert_eq!(gif_file_name("TEN.GIF"), "TEN.GIF");
    assert_eq!(gif_file_name("ten.png"), "ten.png.gif");
}

#[test]
fn layout_is_derived_from_the_output_name() {
    let layout = WorkspaceLayout::new(Path::new("/work"), "10m.gif");
    assert_eq!(layout.output_path, Path::new("/work/10m.gif"));
    assert_eq!(layout.temp_dir, Path::new("/work/10m_temp"));
    assert_eq!(layout.palette_path, Path::new("/work/palette.png"));

    let nested = WorkspaceLayout::new(Path::new("/work"), "out/a.b.gif");
    assert_eq!(nested.temp_dir, Path::new("/work/out/a.b_temp"));
}

#[test]
fn prepare_is_idempotent() {
    let dir = scratch_dir("workspace_prepare");
    let layout = WorkspaceLayout::new(&dir, "x.gif");
    prepare_workspace(&layout).unwrap();
    std::fs::write(layout.temp_dir.join("keep.png"), b"1").unwrap();
    prepare_workspace(&layout).unwrap();
    assert!(layout.temp_dir.join("keep.png").exists());
}

#[test]
fn teardown_removes_frames_and_palette() {
    let dir = scratch_dir("workspace_teardown");
    let layout = WorkspaceLayout::new(&dir, "x.gif");
    prepare_workspace(&layout).unwrap();
    std::fs::write(layout.temp_dir.join("frame_0000.png"), b"1").unwrap();
    std::fs::write(&layout.palette_path, b"p").unwrap();

    assert!(teardown_workspace(&layout));
    assert!(!layout.temp_dir.exists());
    assert!(!layout.palette_path.exists());
}

#[test]
fn teardown_of_missing_paths_is_not_fatal() {
    let dir = scratch_dir("workspace_teardown_missing");
    let layout = WorkspaceLayout::new(&dir, "x.gif");
    std::fs::write(&layout.palette_path, b"p").unwrap();

    assert!(!teardown_workspace(&layout));
    assert!(!layout.palette_path.exists());
}
