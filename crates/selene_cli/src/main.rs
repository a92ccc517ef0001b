use clap::{Parser, Subcommand};
use selene::{
    Forecast, GeoPoint, Instant, MeanElementEphemeris, NatalSnapshot, ReturnChart, ReturnConfig,
    Weighting, chart_at, detect_aspects, monthly_forecast, natal_snapshot,
};

#[derive(Parser)]
#[command(name = "selene", about = "Lunar return forecast CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart at an instant: all body longitudes, signs, houses, angles
    Positions {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// UTC offset of the location in hours
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Natal snapshot: body positions and ascendant at birth
    Natal {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Birthplace latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Birthplace longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// UTC offset of the birthplace in hours
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Aspects between chart bodies at an instant
    Aspects {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// UTC offset of the location in hours
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Full monthly forecast: lunar return, chart, aspects, dominance
    Return {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Birthplace latitude in degrees (north positive)
        #[arg(long)]
        birth_lat: f64,
        /// Birthplace longitude in degrees (east positive)
        #[arg(long)]
        birth_lon: f64,
        /// UTC offset of the birthplace in hours
        #[arg(long, default_value = "0")]
        birth_offset: f64,
        /// Search start UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Current latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Current longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// UTC offset of the current location in hours
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Dominance weighting: equal (default) or traditional
        #[arg(long, default_value = "equal")]
        weighting: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

fn parse_utc(s: &str) -> Result<Instant, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(Instant::new(year, month, day, hour, minute, second))
}

fn require_utc(s: &str) -> Instant {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_place(lat: f64, lon: f64, offset: f64) -> GeoPoint {
    let place = GeoPoint::new(lat, lon, offset);
    if let Err(e) = place.validate() {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    }
    place
}

fn parse_weighting(s: &str) -> Weighting {
    match s.to_lowercase().as_str() {
        "equal" => Weighting::Equal,
        "traditional" => Weighting::Traditional,
        _ => {
            eprintln!("Invalid weighting: {s}");
            eprintln!("Valid: equal (default), traditional");
            std::process::exit(1);
        }
    }
}

fn emit_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(chart: &ReturnChart) {
    println!("Chart at {} (JD {:.5})", chart.instant, chart.jd_utc);
    println!(
        "Ascendant: {:8.4} deg ({})   Midheaven: {:8.4} deg ({})",
        chart.ascendant_deg, chart.ascendant_sign, chart.midheaven_deg, chart.midheaven_sign
    );
    for cb in &chart.bodies {
        let retro = if cb.retrograde { "  R" } else { "" };
        println!(
            "{:<8} {:9.4} deg  {:<11}  house {:>2}{retro}",
            cb.body.name(),
            cb.longitude_deg,
            cb.sign.name(),
            cb.house
        );
    }
}

fn print_natal(natal: &NatalSnapshot) {
    println!("Natal snapshot at {}", natal.birth);
    println!("Ascendant: {:8.4} deg", natal.ascendant_deg);
    for bp in &natal.positions {
        let retro = if bp.retrograde { "  R" } else { "" };
        println!("{:<8} {:9.4} deg{retro}", bp.body.name(), bp.longitude_deg);
    }
}

fn print_forecast(forecast: &Forecast) {
    println!("Natal Moon: {:.4} deg", forecast.natal.moon_longitude_deg());
    println!(
        "Return:     {} (JD {:.5}), deviation {:.5} deg",
        forecast.cycle.start.instant(),
        forecast.cycle.start.jd_utc,
        forecast.cycle.start.deviation_deg
    );
    println!(
        "Valid until {} ({:.3} days)",
        forecast.cycle.end.instant(),
        forecast.cycle.length_days()
    );
    println!();
    print_chart(&forecast.chart);
    println!();
    if forecast.aspects.is_empty() {
        println!("No aspects in orb");
    } else {
        for a in &forecast.aspects {
            println!(
                "{:<8} {:<11} {:<8}  sep {:8.4} deg, orb {:.4} deg",
                a.body_a.name(),
                a.kind.name(),
                a.body_b.name(),
                a.separation_deg,
                a.deviation_deg
            );
        }
    }
    println!();
    let dom = &forecast.dominance;
    println!(
        "Dominant element: {}   Dominant modality: {}",
        dom.dominant_element(),
        dom.dominant_modality()
    );
    println!(
        "Synthetic sign: {}   Synthetic house: {}",
        dom.synthetic_sign, dom.synthetic_house
    );
}

fn main() {
    let cli = Cli::parse();
    let eph = MeanElementEphemeris::default();

    match cli.command {
        Commands::Positions {
            date,
            lat,
            lon,
            offset,
            json,
        } => {
            let instant = require_utc(&date);
            let place = require_place(lat, lon, offset);
            match chart_at(&eph, instant, place) {
                Ok(chart) => {
                    if json {
                        emit_json(&chart);
                    } else {
                        print_chart(&chart);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Natal {
            date,
            lat,
            lon,
            offset,
            json,
        } => {
            let birth = require_utc(&date);
            let place = require_place(lat, lon, offset);
            match natal_snapshot(&eph, birth, place) {
                Ok(natal) => {
                    if json {
                        emit_json(&natal);
                    } else {
                        print_natal(&natal);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Aspects {
            date,
            lat,
            lon,
            offset,
            json,
        } => {
            let instant = require_utc(&date);
            let place = require_place(lat, lon, offset);
            match chart_at(&eph, instant, place) {
                Ok(chart) => {
                    let aspects = detect_aspects(&chart);
                    if json {
                        emit_json(&aspects);
                    } else if aspects.is_empty() {
                        println!("No aspects in orb");
                    } else {
                        for a in &aspects {
                            println!(
                                "{:<8} {:<11} {:<8}  sep {:8.4} deg, orb {:.4} deg",
                                a.body_a.name(),
                                a.kind.name(),
                                a.body_b.name(),
                                a.separation_deg,
                                a.deviation_deg
                            );
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Return {
            birth,
            birth_lat,
            birth_lon,
            birth_offset,
            date,
            lat,
            lon,
            offset,
            weighting,
            json,
        } => {
            let birth = require_utc(&birth);
            let birthplace = require_place(birth_lat, birth_lon, birth_offset);
            let start = require_utc(&date);
            let location = require_place(lat, lon, offset);
            let weighting = parse_weighting(&weighting);
            let config = ReturnConfig::default();
            match monthly_forecast(&eph, birth, birthplace, start, location, &config, weighting) {
                Ok(forecast) => {
                    if json {
                        emit_json(&forecast);
                    } else {
                        print_forecast(&forecast);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
