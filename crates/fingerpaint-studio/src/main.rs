use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fingerpaint_engine::coords::Viewport;
use fingerpaint_engine::input::PointerEvent;
use fingerpaint_engine::logging::{init_logging, LoggingConfig};
use fingerpaint_engine::paint::{Channel, Rgb};
use fingerpaint_engine::palette::{ColorPicker, Palette, PaletteConfig};
use fingerpaint_engine::scene::{DrawCmd, DrawList};
use fingerpaint_engine::session::SessionSnapshot;
use fingerpaint_engine::stroke::RecorderConfig;
use fingerpaint_engine::surface::PaintSurface;

/// Paints prepopulated into a fresh palette.
const STARTER_PAINTS: [u32; 7] = [
    0x00d7_263d, 0x00f4_6036, 0x00ff_e066, 0x002e_86ab, 0x001b_998b, 0x00c5_d86d, 0x0070_3d57,
];

const SURFACE: Viewport = Viewport::new(300.0, 300.0);

/// Scripts a FingerPaint session, or replays a saved one.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Write the scripted session to this JSON file.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Load and summarize a saved session instead of running the script.
    #[arg(long, value_name = "PATH", conflicts_with = "save")]
    replay: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::default());

    match args.replay {
        Some(path) => run_replay(path),
        None => run_demo(args.save),
    }
}

fn run_demo(save: Option<PathBuf>) -> Result<()> {
    let palette = Palette::with_colors(PaletteConfig::default(), STARTER_PAINTS.map(Rgb::from_u32))
        .context("building starter palette")?;
    let mut picker = ColorPicker::new(palette);
    let mut surface = PaintSurface::new(SURFACE, RecorderConfig::default());

    // ── tap a paint and dab once ──────────────────────────────────────────
    surface.set_paint_color(picker.tap(0)?);
    gesture(&mut surface, &[(40.0, 40.0)])?;

    // ── darken it with the cyan dial and draw a squiggle ──────────────────
    picker.begin_dial(Channel::Cyan, 120.0);
    if let Some(color) = picker.drag_dial(Channel::Cyan, 90.0, 60.0) {
        surface.set_paint_color(color);
    }
    picker.end_dial(Channel::Cyan);
    gesture(
        &mut surface,
        &[(30.0, 200.0), (30.5, 200.4), (60.0, 170.0), (95.0, 210.0), (130.0, 160.0), (170.0, 220.0)],
    )?;

    // ── mix two paints and use the result ─────────────────────────────────
    picker.toggle_mix_mode()?;
    picker.tap(3)?;
    let mixed = picker.toggle_mix_mode()?;
    log::info!("mixed {} into palette entry {}", mixed, picker.palette().current_index());
    surface.set_paint_color(mixed);
    gesture(&mut surface, &[(200.0, 40.0), (230.0, 90.0), (260.0, 60.0), (280.0, 120.0)])?;

    let snapshot = SessionSnapshot::capture(&surface, &picker);
    print_summary("DEMO SESSION", &surface, &picker);

    if let Some(path) = save {
        let json = snapshot.to_json()?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("  Session saved to {}", path.display());
        println!();
    }
    Ok(())
}

fn run_replay(path: PathBuf) -> Result<()> {
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot = SessionSnapshot::from_json(&json).with_context(|| format!("decoding {}", path.display()))?;

    let mut surface = PaintSurface::new(SURFACE, RecorderConfig::default());
    let picker = snapshot
        .apply(&mut surface, PaletteConfig::default())
        .context("restoring session")?;

    print_summary("REPLAYED SESSION", &surface, &picker);
    Ok(())
}

/// Feeds one down / move.. / up gesture in surface pixels.
fn gesture(surface: &mut PaintSurface, samples: &[(f32, f32)]) -> Result<()> {
    let Some((&(x0, y0), rest)) = samples.split_first() else {
        return Ok(());
    };
    surface.handle_pointer(PointerEvent::down(x0, y0))?;
    let mut last = (x0, y0);
    for &(x, y) in rest {
        surface.handle_pointer(PointerEvent::moved(x, y))?;
        last = (x, y);
    }
    surface.handle_pointer(PointerEvent::up(last.0, last.1))?;
    Ok(())
}

fn print_summary(title: &str, surface: &PaintSurface, picker: &ColorPicker) {
    let list: DrawList = surface.draw_list();
    let (dots, paths, segments) = list.items().iter().fold((0, 0, 0), |(d, p, s), cmd| match cmd {
        DrawCmd::Circle(_) => (d + 1, p, s),
        DrawCmd::Path(path) => (d, p + 1, s + path.segments.len()),
    });
    let palette = picker.palette();
    let swatches: Vec<String> = palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| if i == palette.current_index() { format!("[{c}]") } else { c.to_string() })
        .collect();

    println!();
    println!("  ── {title} ──");
    println!();
    println!("  Surface   >  {}x{} px", surface.viewport().width, surface.viewport().height);
    println!("  Strokes   >  {} ({dots} dots, {paths} paths, {segments} segments)", surface.completed().len());
    println!("  Brush     >  {}", surface.paint_color());
    println!("  Palette   >  {}", swatches.join(" "));
    println!(
        "  CMY       >  c {:.3}  m {:.3}  y {:.3}",
        picker.cmy().c,
        picker.cmy().m,
        picker.cmy().y
    );
    println!();
}
