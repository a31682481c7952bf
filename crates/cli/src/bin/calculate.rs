use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use launcher_calculator::api::{self, CalculateRequest, CalculateResponse};
use launcher_calculator::contraction::{AngleSetting, TargetType};
use launcher_calculator::export;
use launcher_calculator::store::CalculationStore;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Spring contraction calculator for the toy launcher"
)]
struct Cli {
    /// Coarse launch-angle mode of the rig (geometry mode)
    #[arg(long, value_enum)]
    angle_setting: Option<AngleArg>,

    /// Target grid x coordinate in cm, 0-200 (geometry mode)
    #[arg(long)]
    target_x: Option<f64>,

    /// Target grid y coordinate in cm, 0-200 (geometry mode)
    #[arg(long)]
    target_y: Option<f64>,

    /// Predefined target to aim at (geometry mode)
    #[arg(long, value_enum)]
    target: Option<TargetArg>,

    /// Declared target distance in metres (physics mode)
    #[arg(long)]
    distance: Option<f64>,

    /// Launch angle in degrees, 0-90 (physics mode)
    #[arg(long)]
    launch_angle: Option<f64>,

    /// Spring constant in N/m (physics mode)
    #[arg(long)]
    spring_constant: Option<f64>,

    /// Projectile mass in grams (defaults to 50)
    #[arg(long)]
    mass: Option<f64>,

    /// Emit the result as JSON instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Append the result to a JSON log at this path
    #[arg(long)]
    log: Option<PathBuf>,

    /// Also write the whole log as CSV to this path (`-` for stdout); requires --log
    #[arg(long, requires = "log")]
    csv: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum AngleArg {
    Acute,
    Obtuse,
}

impl From<AngleArg> for AngleSetting {
    fn from(value: AngleArg) -> Self {
        match value {
            AngleArg::Acute => AngleSetting::Acute,
            AngleArg::Obtuse => AngleSetting::Obtuse,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum TargetArg {
    StartLine,
    FrontLeftCorner,
    MidLine,
    FarSide,
    FrontLine,
    BackLine,
    Center,
    Side,
}

impl From<TargetArg> for TargetType {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::StartLine => TargetType::StartLine,
            TargetArg::FrontLeftCorner => TargetType::FrontLeftCorner,
            TargetArg::MidLine => TargetType::MidLine,
            TargetArg::FarSide => TargetType::FarSide,
            TargetArg::FrontLine => TargetType::FrontLine,
            TargetArg::BackLine => TargetType::BackLine,
            TargetArg::Center => TargetType::Center,
            TargetArg::Side => TargetType::Side,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let request = CalculateRequest {
        angle_setting: cli.angle_setting.map(Into::into),
        target_type: cli.target.map(Into::into),
        custom_target_x: cli.target_x,
        custom_target_y: cli.target_y,
        launch_angle: cli.launch_angle,
        spring_constant: cli.spring_constant,
        projectile_weight: cli.mass,
        custom_distance: cli.distance,
    };

    let response = api::calculate(&request).map_err(|err| anyhow::anyhow!("{err}"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_summary(&response);
    }

    if let Some(log_path) = &cli.log {
        let saved_id = append_to_log(log_path, cli.csv.as_deref(), cli.launch_angle, &response)?;
        eprintln!(
            "[info] logged calculation #{saved_id} to {}",
            log_path.display()
        );
    }

    Ok(())
}

fn print_summary(response: &CalculateResponse) {
    if response.contraction_distance == 0.0 && response.target_distance == 0.0 {
        println!("no calibration data for this angle/target pairing");
    }
    println!("contraction: {:.1} cm", response.contraction_distance);
    println!("target distance: {:.2} m", response.target_distance);
    if let (Some(x), Some(y)) = (response.target_x, response.target_y) {
        println!("target position: ({x:.0}, {y:.0}) cm");
    }
}

/// Rehydrate the JSON log into a fresh store so identifier assignment stays
/// monotonic across invocations, append the new result, and rewrite the log.
fn append_to_log(
    log_path: &std::path::Path,
    csv_path: Option<&std::path::Path>,
    launch_angle: Option<f64>,
    response: &CalculateResponse,
) -> anyhow::Result<u64> {
    let store = CalculationStore::new();
    let mut existing = export::read_json(log_path)?;
    // Replay in id order so replayed records keep their identifiers.
    existing.sort_by_key(|c| c.id);
    for calculation in existing {
        store.save(calculation.record);
    }

    let timestamp_ms = chrono::Utc::now().timestamp_millis() as f64;
    let saved = api::save_calculation(&store, response.to_record(launch_angle, timestamp_ms))
        .map_err(|err| anyhow::anyhow!("{err}"))?;

    let listed = store.list();
    export::write_json(log_path, &listed)?;
    if let Some(csv_path) = csv_path {
        let mut writer = export::writer_for_path(csv_path)?;
        export::write_csv(&mut writer, &listed)?;
    }
    Ok(saved.id)
}
