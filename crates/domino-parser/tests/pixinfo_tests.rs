//! Integration tests for `pixinfo` metadata parsing.

use domino_parser::parse_pixinfo;
use domino_parser::pixinfo::parse_pixinfo_str;
use std::io::Write;

const BULK: &str =
    "SI(22.84)TI(0.24)AL(7.78)FE(2.04)MN(0.02)MG(1.28)CA(0.25)NA(0.95)K(1.79)H(30)O(?)O(0.235)";

/// A pixinfo body matching Domino's fixed layout, with `header_skip = 2`:
/// composition count on line 8, bulk composition on line 9 (= 7 + 2), file
/// names from line 10.
fn pixinfo_fixture() -> String {
    format!(
        "Theriak-Domino pixelmap information\n\
         domino version 03.01.2023\n\
         \x20  400.000   700.000   1000.000   10000.000\n\
         TC  P\n\
         50 50 2500\n\
         2\n\
         calculated assemblages\n\
         grid refinement 1\n\
         1\n\
         {}\n\
         vol_[phl]\n\
         vol_[annm]\n\
         vol_Mrg\n\
         V_solids\n",
        BULK
    )
}

#[test]
fn test_metadata_round_trip() {
    let spec = parse_pixinfo_str(&pixinfo_fixture()).unwrap();

    assert_eq!(spec.temperature_range, (400.0, 700.0));
    assert_eq!(spec.pressure_range, (1000.0, 10000.0));
    assert_eq!(spec.temperature_steps, 50);
    assert_eq!(spec.pressure_steps, 50);
    assert_eq!(spec.bulk_composition, BULK);
    assert_eq!(spec.len(), 2500);
}

#[test]
fn test_variable_file_list() {
    let spec = parse_pixinfo_str(&pixinfo_fixture()).unwrap();

    assert_eq!(spec.available_variable_files.len(), 4);
    assert!(spec.contains_file("vol_[phl]"));
    assert!(spec.contains_file("vol_Mrg"));
    assert!(spec.contains_file("V_solids"));
    assert!(!spec.contains_file("vol_[east]"));
}

#[test]
fn test_header_skip_moves_bulk_line() {
    // header_skip = 0 puts the bulk composition on line 7 and the
    // composition count on line 6
    let text = "a\nb\n100 200 300 400\nc\n10 20\n0\n1\nBULK_LINE\nvol_x\n";
    let spec = parse_pixinfo_str(text).unwrap();

    assert_eq!(spec.bulk_composition, "BULK_LINE");
    assert_eq!(spec.temperature_steps, 10);
    assert_eq!(spec.pressure_steps, 20);
    assert!(spec.contains_file("vol_x"));
}

#[test]
fn test_composition_block_excluded_from_files() {
    // two composition lines; only what follows them is a file name
    let text = "a\nb\n1 2 3 4\nc\n5 5\n0\n2\nBULK_A\nBULK_B\nvol_y\n";
    let spec = parse_pixinfo_str(text).unwrap();

    assert_eq!(spec.bulk_composition, "BULK_A");
    assert_eq!(spec.available_variable_files.len(), 1);
    assert!(spec.contains_file("vol_y"));
    assert!(!spec.contains_file("BULK_B"));
}

#[test]
fn test_lines_are_trimmed() {
    let text = "  a  \n b\n  1 2 3 4  \nc\n  5 5\n0\n1\n  BULK  \n  vol_z  \n";
    let spec = parse_pixinfo_str(text).unwrap();

    assert_eq!(spec.bulk_composition, "BULK");
    assert!(spec.contains_file("vol_z"));
}

#[test]
fn test_parse_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pixinfo");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(pixinfo_fixture().as_bytes()).unwrap();

    let spec = parse_pixinfo(&path).unwrap();
    assert_eq!(spec.temperature_steps, 50);
    assert_eq!(spec.bulk_composition, BULK);
}

#[test]
fn test_absent_file_is_metadata_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_pixinfo(dir.path().join("pixinfo")).unwrap_err();
    assert!(matches!(
        err,
        pixmap_common::PixmapError::MetadataFormat(_)
    ));
}

#[test]
fn test_offsets_past_eof_are_metadata_error() {
    // header_skip of 40 points the bulk composition far past EOF
    let text = "a\nb\n1 2 3 4\nc\n5 5\n40\n";
    assert!(parse_pixinfo_str(text).is_err());
}
