use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use xsection_lib::profile::{unique_path, write_png};
use xsection_lib::progress::ConsoleProgress;
use xsection_lib::raster::Resolution;
use xsection_lib::scene::AnalyticScene;
use xsection_lib::sweep::sweep_with_observer;

#[derive(Parser, Debug)]
#[command(name = "drag_profile")]
#[command(about = "Sweep a silhouette scene into an equirectangular drag profile image")]
struct Args {
    /// Scene to measure: sphere, ellipsoid=a,b,c or cuboid=hx,hy,hz.
    #[arg(short, long)]
    scene: String,

    /// Output PNG path. An existing file is kept and a numbered name used instead.
    #[arg(short, long)]
    file: PathBuf,

    /// Horizontal (X) resolution of the profile image.
    #[arg(short = 'x', long)]
    xres: u32,

    /// Vertical (Y) resolution of the profile image.
    #[arg(short = 'y', long)]
    yres: u32,

    /// Camera sphere projection distance.
    #[arg(short, long)]
    distance: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let resolution = Resolution::new(args.xres, args.yres)?;
    let mut scene = AnalyticScene::parse(&args.scene)?;

    info!(
        "scene {}, output {}, resolution {}x{}, distance {}",
        args.scene,
        args.file.display(),
        args.xres,
        args.yres,
        args.distance
    );

    let mut progress = ConsoleProgress::new("Rendering");
    let profile = sweep_with_observer(resolution, args.distance, &mut scene, |step| {
        progress.observe(step)
    })?;

    let path = unique_path(&args.file);
    write_png(&profile, &path).with_context(|| format!("writing profile to {}", path.display()))?;

    println!("Done: {}", path.display());
    Ok(())
}
