use std::fs;
use std::path::PathBuf;

use clap::Parser;
use launcher_calculator::contraction::physics;
use launcher_calculator::contraction::trajectory::Trajectory;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the parabolic launch preview to a PNG"
)]
struct Cli {
    /// Target distance in metres
    #[arg(long)]
    distance: f64,

    /// Launch angle in degrees
    #[arg(long, default_value_t = 45.0)]
    launch_angle: f64,

    #[arg(long, default_value = "artifacts/trajectory.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let v0 = physics::launch_velocity_m_s(cli.distance, cli.launch_angle);
    let points: Vec<(f64, f64)> = Trajectory::new(v0, cli.launch_angle)
        .map(|p| (p.x_m, p.y_m))
        .collect();

    // Degenerate launches collapse onto the origin; keep the axis spans positive.
    let max_x = points.iter().map(|p| p.0).fold(0.0_f64, f64::max).max(0.1);
    let max_y = points.iter().map(|p| p.1).fold(0.0_f64, f64::max).max(0.1);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{:.1} m at {:.0} deg (v0 = {:.2} m/s)",
                cli.distance, cli.launch_angle, v0
            ),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..max_x * 1.05, 0.0..max_y * 1.2)?;

    chart
        .configure_mesh()
        .x_desc("downrange (m)")
        .y_desc("height (m)")
        .draw()?;

    chart.draw_series(LineSeries::new(points, &BLUE))?;

    root.present()?;
    println!("[info] wrote {}", cli.output.display());
    Ok(())
}
