//! Shared fixtures: build a pixelmap directory on disk.

use std::io::Write;
use tempfile::TempDir;

/// Write a pixelmap directory with a 2×2 PT grid (T 400–700, P 1000–10000).
///
/// Every name in `listed` goes into the pixinfo file list; every `(name,
/// contents)` pair in `files` is written to disk. Listing and writing are
/// separate so tests can cover files that are listed but absent, and files
/// (like `V_solids`) that exist without being listed.
pub fn pixmap_dir(listed: &[&str], files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    let mut pixinfo = String::from(
        "Theriak-Domino pixelmap information\n\
         test fixture\n\
         400 700 1000 10000\n\
         TC P\n\
         2 2\n\
         0\n\
         1\n\
         SI(1)AL(1)O(?)\n",
    );
    for name in listed {
        pixinfo.push_str(name);
        pixinfo.push('\n');
    }
    std::fs::write(dir.path().join("pixinfo"), pixinfo).unwrap();

    for (name, contents) in files {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    dir
}
