use pixel_grid::config::{self, Step};
use pixel_grid::PixelGrid;
use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: grid_view <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let mut grid = PixelGrid::load(&config.input_path).map_err(|e| error_chain(&e))?;
    println!(
        "Loaded {}x{} grid from {}",
        grid.width(),
        grid.height(),
        config.input_path.display()
    );

    for step in &config.steps {
        apply_step(&mut grid, *step);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let display = config.display;

    if display.mode.includes_aligned() {
        println!(
            "\nGrid after {} step(s) ({}x{}):",
            config.steps.len(),
            grid.width(),
            grid.height()
        );
        grid.render_aligned(&mut out, display.column_width, display.spacing)
            .map_err(|e| format!("Failed to render grid: {e}"))?;
    }

    if display.mode.includes_glyphs() {
        println!("\nGlyph view:");
        grid.render_glyphs(&mut out)
            .map_err(|e| format!("Failed to render grid: {e}"))?;
    }
    out.flush().map_err(|e| format!("Failed to render grid: {e}"))?;

    if let Some(path) = &config.save_path {
        grid.save(path)
            .map_err(|e| format!("Failed to save {}: {e}", path.display()))?;
        println!("\nGrid written to {}", path.display());
    }

    Ok(())
}

fn apply_step(grid: &mut PixelGrid, step: Step) {
    match step {
        Step::Threshold { limit } => grid.threshold(limit),
        Step::FlipHorizontal => grid.flip_horizontal(),
        Step::RotateCw { turns } => {
            for _ in 0..turns {
                grid.rotate_cw();
            }
        }
        Step::DrawPoint { x, y, value } => grid.draw_point(x, y, value),
        Step::DrawBox { x, y, w, h, value } => grid.draw_box(x, y, w, h, value),
        Step::DrawEdge => grid.draw_edge(),
    }
}

fn error_chain(err: &dyn Error) -> String {
    match err.source() {
        Some(source) => format!("{err}: {source}"),
        None => err.to_string(),
    }
}
