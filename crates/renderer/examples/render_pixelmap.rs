//! Render a pixelmap directory to PNG files.
//!
//! Usage: render_pixelmap <pixelmap_dir> <variable> <mineral> [preset]
//!
//! Writes `<variable>_<mineral>.png` (heatmap) and
//! `<variable>_<mineral>_isolines.png` (filled contour with isolines) to the
//! current directory. Without a preset name, a small local endmember map
//! covering biotite and a tc6 liquid model is used.

use pixmap_processor::{EndmemberGroup, EndmemberMap, EndmemberSource, PixelMap};
use renderer::contour::{draw_segments, extract_isolines, flip_segments, generate_levels, render_bands};
use renderer::gradient::{render_heatmap, Color};
use renderer::png::create_png_auto;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: render_pixelmap <pixelmap_dir> <variable> <mineral> [preset]");
        std::process::exit(2);
    }
    let (dir, variable, mineral) = (&args[1], &args[2], &args[3]);

    let source = match args.get(4) {
        Some(preset) => EndmemberSource::preset(preset),
        None => local_example_map().into(),
    };

    let pixmap = match PixelMap::open(dir, source) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("cannot open pixelmap directory: {}", e);
            std::process::exit(1);
        }
    };
    let spec = pixmap.spec();
    println!(
        "grid: {} x {} over T {:?} / P {:?}",
        spec.temperature_steps, spec.pressure_steps, spec.temperature_range, spec.pressure_range
    );

    let grid = match pixmap.load_variable(variable, mineral) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("cannot load {} of {}: {}", variable, mineral, e);
            std::process::exit(1);
        }
    };

    let base = format!("{}_{}", variable, mineral.replace(' ', "_"));

    // heatmap
    let pixels = render_heatmap(&grid);
    let png = create_png_auto(&pixels, grid.cols(), grid.rows()).unwrap();
    std::fs::write(format!("{}.png", base), png).unwrap();

    // filled contours with isolines on top
    let (min_val, max_val) = grid.value_range().unwrap_or((0.0, 1.0));
    let levels = generate_levels(min_val, max_val, 8);
    let mut pixels = render_bands(&grid, &levels);
    for (_, segments) in extract_isolines(&grid, &levels) {
        let flipped = flip_segments(&segments, grid.rows());
        draw_segments(
            &mut pixels,
            grid.cols(),
            grid.rows(),
            &flipped,
            Color::new(0, 0, 0, 255),
        );
    }
    let png = create_png_auto(&pixels, grid.cols(), grid.rows()).unwrap();
    std::fs::write(format!("{}_isolines.png", base), png).unwrap();

    println!("wrote {}.png and {}_isolines.png", base, base);
}

fn local_example_map() -> EndmemberMap {
    [
        (
            "biotite",
            EndmemberGroup::solid_solution(["phl", "annm", "obi", "east", "tbi", "fbi", "mnbi"]),
        ),
        (
            "LIQtc6",
            EndmemberGroup::solid_solution([
                "q4L", "abL", "kspL", "anL", "slL", "fo2L", "fa2L", "h2oL",
            ]),
        ),
    ]
    .into_iter()
    .collect()
}
