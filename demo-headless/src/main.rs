use clap::Parser;
use dosing_core::{DosingScenario, FlowRate, Length, LineGeometry, Time, Volume};
use tracing_subscriber::EnvFilter;

/// Dosing line sizing demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "dosing-demo")]
#[command(about = "Container dosing line sizing demo", long_about = None)]
struct Args {
    /// Throughput in containers per hour
    #[arg(short, long, default_value_t = 32_000.0)]
    uph: f64,

    /// Container pitch on the conveyor in mm
    #[arg(long, default_value_t = 108.0)]
    pitch_mm: f64,

    /// Transfer star radius in mm (replaces --pitch-mm)
    #[arg(long, requires = "pockets", conflicts_with = "star_circumference_mm")]
    star_radius_mm: Option<f64>,

    /// Transfer star circumference in mm (replaces --pitch-mm)
    #[arg(long, requires = "pockets")]
    star_circumference_mm: Option<f64>,

    /// Number of pockets on the transfer star
    #[arg(long)]
    pockets: Option<u32>,

    /// Container opening diameter in mm
    #[arg(short, long, default_value_t = 21.0)]
    opening_mm: f64,

    /// Fraction of the opening usable for dosing
    #[arg(short, long, default_value_t = 0.75)]
    safety_factor: f64,

    /// Valve settle margin subtracted from the dwell window in ms
    #[arg(long, default_value_t = 10.0)]
    settle_margin_ms: f64,

    /// Valve gain in mL/ms
    #[arg(long, default_value_t = 0.07867)]
    valve_gain: f64,

    /// Valve offset in mL
    #[arg(long, default_value_t = 0.01335)]
    valve_offset: f64,

    /// Target fill volume per container in mL
    #[arg(short, long, default_value_t = 1.8)]
    target_volume: f64,
}

impl Args {
    fn geometry(&self) -> LineGeometry {
        match (self.star_radius_mm, self.star_circumference_mm, self.pockets) {
            (Some(radius), _, Some(pockets)) => LineGeometry::TransferStarRadius {
                radius: Length::millimeter(radius),
                pockets,
            },
            (None, Some(circumference), Some(pockets)) => LineGeometry::TransferStarCircumference {
                circumference: Length::millimeter(circumference),
                pockets,
            },
            _ => LineGeometry::Pitch(Length::millimeter(self.pitch_mm)),
        }
    }

    fn scenario(&self) -> DosingScenario {
        DosingScenario {
            uph: self.uph,
            geometry: self.geometry(),
            container_opening: Length::millimeter(self.opening_mm),
            opening_safety_factor: self.safety_factor,
            valve_settle_margin: Time::millisecond(self.settle_margin_ms),
            valve_gain: FlowRate::milliliter_per_millisecond(self.valve_gain),
            valve_offset: Volume::milliliter(self.valve_offset),
            target_volume: Volume::milliliter(self.target_volume),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = args.scenario().evaluate();

    let separator = "-".repeat(40);
    println!("{}", separator);
    println!("Line Speed is {:.2} mm/s.", report.line_speed.in_mm_per_s());
    println!("Dwell Time is {:.2} ms.", report.max_dwell_time.in_ms());
    println!("Maximal Dosing Volume is {:.2} ml.", report.volume_per_valve.in_ml());
    println!("Required System Number of Valves: {} ", report.required_valve_count);
    println!("{}", separator);
}
