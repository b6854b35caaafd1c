use clap::Parser;

use xsection_lib::projector::project_pixel;
use xsection_lib::raster::Resolution;

// Dumps the projected sphere point for every pixel of a profile resolution,
// one `x y px py pz` line per pixel. Useful for previewing the camera
// positions a sweep will visit.
#[derive(Parser, Debug)]
#[command(name = "pixel_sphere")]
#[command(about = "Print the projected sphere point for each profile pixel")]
struct Args {
    /// Horizontal (X) resolution.
    #[arg(short = 'x', long, default_value_t = 16)]
    xres: u32,

    /// Vertical (Y) resolution.
    #[arg(short = 'y', long, default_value_t = 8)]
    yres: u32,

    /// Sphere radius.
    #[arg(short, long, default_value_t = 1.0)]
    distance: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let resolution = Resolution::new(args.xres, args.yres)?;

    for y in 0..resolution.height() {
        for x in 0..resolution.width() {
            let point = project_pixel((x, y), resolution, args.distance);
            println!("{} {} {} {} {}", x, y, point[0], point[1], point[2]);
        }
    }

    Ok(())
}
