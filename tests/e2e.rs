mod common;

use common::sample_grid::{grid_from_rows, letter_r, to_text};
use pixel_grid::{GridError, PixelGrid};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Map a binarized glyph back to scan-like intensities: dim background,
/// bright strokes.
fn scanned(glyph: &PixelGrid) -> PixelGrid {
    let mut scan = glyph.clone();
    for y in 0..scan.height() {
        for x in 0..scan.width() {
            let v = if scan.get(x, y) == 0 { 40 } else { 220 };
            scan.set(x, y, v);
        }
    }
    scan
}

#[test]
fn misoriented_scan_is_straightened_by_flip_and_three_rotations() {
    init_logger();
    let upright = letter_r();

    // Derive the mis-oriented scan by inverting the straightening sequence.
    let mut input = scanned(&upright);
    input.rotate_cw();
    input.flip_horizontal();
    let text = to_text(&input);

    let mut grid = PixelGrid::from_reader(text.as_bytes(), "scan").unwrap();
    grid.threshold(101);
    grid.flip_horizontal();
    for _ in 0..3 {
        grid.rotate_cw();
    }

    assert_eq!(grid, upright, "straightened glyph must match the upright one");

    let mut glyphs = Vec::new();
    grid.render_glyphs(&mut glyphs).unwrap();
    assert_eq!(
        String::from_utf8(glyphs).unwrap(),
        "OOOO.\nO...O\nOOOO.\nO.O..\nO..O.\nO...O\n"
    );
}

#[test]
fn grids_survive_a_save_and_load_cycle() {
    init_logger();
    let dir = std::env::temp_dir().join("pixel_grid_e2e");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("roundtrip.txt");

    let original = grid_from_rows(&[&[0, -17, 255], &[101, 3, 9]]);
    original.save(&path).unwrap();
    let loaded = PixelGrid::load(&path).unwrap();
    assert_eq!(loaded, original);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn loading_a_missing_file_reports_the_source() {
    init_logger();
    let path = std::env::temp_dir().join("pixel_grid_e2e_missing.txt");
    let err = PixelGrid::load(&path).unwrap_err();
    match err {
        GridError::SourceUnavailable { path: reported, .. } => {
            assert!(
                reported.contains("pixel_grid_e2e_missing"),
                "diagnostic should name the missing file, got {reported}"
            );
        }
        other => panic!("expected a source error, got {other:?}"),
    }
}

#[test]
fn a_ragged_file_reports_the_offending_line() {
    init_logger();
    let err = PixelGrid::from_reader("1 2 3\n4 5\n".as_bytes(), "ragged").unwrap_err();
    match err {
        GridError::Format { line, expected, found, .. } => {
            assert_eq!((line, expected, found), (2, 3, 2));
        }
        other => panic!("expected a format error, got {other:?}"),
    }
    let message = format!(
        "{}",
        PixelGrid::from_reader("9\n8 7\n".as_bytes(), "ragged").unwrap_err()
    );
    assert_eq!(message, "ragged:2: expected 1 samples per row, found 2");
}
