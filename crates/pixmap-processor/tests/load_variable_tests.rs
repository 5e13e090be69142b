//! Integration tests for pixelmap assembly.

mod common;

use common::pixmap_dir;
use pixmap_common::PixmapError;
use pixmap_processor::{
    EndmemberGroup, EndmemberMap, EndmemberRegistry, EndmemberSource, PixelMap,
};

fn biotite_map() -> EndmemberMap {
    [
        ("biotite", EndmemberGroup::solid_solution(["phl", "annm"])),
        ("margarite", EndmemberGroup::single("Mrg")),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_solid_solution_aggregation() {
    // two endmembers with disjoint support sum element-wise
    let dir = pixmap_dir(
        &["x_[phl]", "x_[annm]"],
        &[("x_[phl]", "1 1.0\n"), ("x_[annm]", "4 2.0\n")],
    );
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("x", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[1.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_overlapping_endmembers_sum() {
    let dir = pixmap_dir(
        &["x_[phl]", "x_[annm]"],
        &[("x_[phl]", "2 1.5\n"), ("x_[annm]", "2 0.5\n3 1.0\n")],
    );
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("x", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[0.0, 2.0, 1.0, 0.0]);
}

#[test]
fn test_single_endmember_uses_bare_file_name() {
    let dir = pixmap_dir(&["x_Mrg"], &[("x_Mrg", "3 4.5\n")]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("x", "margarite").unwrap();
    assert_eq!(grid.as_slice(), &[0.0, 0.0, 4.5, 0.0]);
}

#[test]
fn test_missing_endmember_file_is_non_fatal() {
    // x_[annm] is not listed in pixinfo; its contribution is zero
    let dir = pixmap_dir(&["x_[phl]"], &[("x_[phl]", "1 1.0\n")]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("x", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_all_endmember_files_missing_gives_zero_grid() {
    let dir = pixmap_dir(&[], &[]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("x", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_volume_fraction_normalization() {
    let dir = pixmap_dir(
        &["vol_[phl]", "vol_[annm]"],
        &[
            ("vol_[phl]", "1 2.0\n2 2.0\n"),
            ("vol_[annm]", "1 2.0\n"),
            ("V_solids", "1 8.0\n2 4.0\n3 2.0\n4 2.0\n"),
        ],
    );
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("vol", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[0.5, 0.5, 0.0, 0.0]);
}

#[test]
fn test_missing_v_solids_is_fatal_for_vol() {
    let dir = pixmap_dir(&["vol_[phl]"], &[("vol_[phl]", "1 2.0\n")]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let err = pixmap.load_variable("vol", "biotite").unwrap_err();
    assert!(matches!(err, PixmapError::MissingRequiredFile(_)));
}

#[test]
fn test_zero_total_volume_yields_non_finite_cells() {
    // V_solids is zero where the mineral has volume: 2/0 = inf, 0/0 = NaN
    let dir = pixmap_dir(
        &["vol_[phl]"],
        &[("vol_[phl]", "1 2.0\n"), ("V_solids", "2 4.0\n")],
    );
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let grid = pixmap.load_variable("vol", "biotite").unwrap();
    assert!(grid.get(0, 0).is_infinite());
    assert_eq!(grid.get(0, 1), 0.0);
    assert!(grid.get(1, 0).is_nan());
}

#[test]
fn test_unknown_mineral() {
    let dir = pixmap_dir(&["x_[phl]"], &[("x_[phl]", "1 1.0\n")]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let err = pixmap.load_variable("x", "olivine").unwrap_err();
    assert!(matches!(err, PixmapError::UnknownMineral(_)));

    // the failed query leaves shared state untouched
    assert_eq!(pixmap.endmembers().len(), 2);
    let grid = pixmap.load_variable("x", "biotite").unwrap();
    assert_eq!(grid.as_slice(), &[1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_listed_but_absent_file_is_sparse_error() {
    // listed in pixinfo but never written to disk
    let dir = pixmap_dir(&["x_[phl]"], &[]);
    let pixmap = PixelMap::open(dir.path(), biotite_map().into()).unwrap();

    let err = pixmap.load_variable("x", "biotite").unwrap_err();
    assert!(matches!(err, PixmapError::SparseFormat { .. }));

    // queries against other minerals still succeed afterwards
    let grid = pixmap.load_variable("x", "margarite").unwrap();
    assert_eq!(grid.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_open_with_preset() {
    let dir = pixmap_dir(&["x_Mrg"], &[("x_Mrg", "2 1.0\n")]);
    let pixmap = PixelMap::open(dir.path(), EndmemberSource::preset("jun92d")).unwrap();

    let grid = pixmap.load_variable("x", "margarite").unwrap();
    assert_eq!(grid.as_slice(), &[0.0, 1.0, 0.0, 0.0]);
}

#[test]
fn test_open_with_custom_registry() {
    let dir = pixmap_dir(&["x_q"], &[("x_q", "1 3.0\n")]);

    let mut registry = EndmemberRegistry::new();
    registry.insert(
        "custom",
        [("quartz", EndmemberGroup::single("q"))].into_iter().collect(),
    );

    let pixmap =
        PixelMap::open_with_registry(dir.path(), EndmemberSource::preset("custom"), &registry)
            .unwrap();
    let grid = pixmap.load_variable("x", "quartz").unwrap();
    assert_eq!(grid.as_slice(), &[3.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_unknown_preset_is_error() {
    let dir = pixmap_dir(&[], &[]);
    let err = PixelMap::open(dir.path(), EndmemberSource::preset("no-such-db")).unwrap_err();
    assert!(matches!(err, PixmapError::UnknownPreset(_)));
}

#[test]
fn test_missing_pixinfo_aborts_construction() {
    let dir = tempfile::tempdir().unwrap();
    let err = PixelMap::open(dir.path(), biotite_map().into()).unwrap_err();
    assert!(matches!(err, PixmapError::MetadataFormat(_)));
}
