//! # Travi CLI Application
//!
//! Terminal front end for the beam analysis engine.
//!
//! ## Usage
//!
//! ```text
//! beam_cli [JOB.json] [--settings SETTINGS.json] [--catalog CATALOG.json]
//! ```
//!
//! A job file holds one `CalculationItem` as JSON. Without a job file the
//! CLI prompts for a cantilever with a tip load. Set `RUST_LOG=debug` to
//! follow the solver.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use beam_core::calculations::{
    Beam, BendingInput, BendingResult, CalculationItem, CalculationOutput, EndCondition, MaterialSelection,
    QuickBendingResult, QuickTorsionResult, StressCheck, TorsionResult,
};
use beam_core::catalog::Catalog;
use beam_core::loads::{BendingLoads, LoadPoint};
use beam_core::section::SectionShape;
use beam_core::settings::SolverSettings;
use beam_core::{CalcError, CalcResult};

#[derive(Debug, Default)]
struct Args {
    job: Option<String>,
    settings: Option<String>,
    catalog: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => args.settings = Some(iter.next().ok_or("--settings needs a path")?),
            "--catalog" => args.catalog = Some(iter.next().ok_or("--catalog needs a path")?),
            "-h" | "--help" => {
                return Err("usage: beam_cli [JOB.json] [--settings SETTINGS.json] [--catalog CATALOG.json]".to_string())
            }
            _ if args.job.is_none() => args.job = Some(arg),
            _ => return Err(format!("unexpected argument '{}'", arg)),
        }
    }
    Ok(args)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn load_job(path: &str) -> CalcResult<CalculationItem> {
    let text = std::fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn demo_job() -> CalculationItem {
    println!("No job file given. Running cantilever demo...");
    println!();

    let length_mm = prompt_f64("Enter beam length (mm) [1000.0]: ", 1000.0);
    let load_n = prompt_f64("Enter tip load (N, upward positive) [-100.0]: ", -100.0);
    let b_mm = prompt_f64("Enter section width b (mm) [20.0]: ", 20.0);
    let h_mm = prompt_f64("Enter section height h (mm) [10.0]: ", 10.0);
    println!();

    CalculationItem::Bending(BendingInput {
        label: "CLI-Demo".to_string(),
        beam: Beam::new(
            length_mm,
            EndCondition::Fixed,
            EndCondition::Free,
            SectionShape::Rectangular { b_mm, h_mm },
            MaterialSelection::catalog("S235JR"),
        ),
        loads: BendingLoads::new().with_point(LoadPoint::new(length_mm, load_n)),
    })
}

fn run(args: &Args) -> CalcResult<CalculationOutput> {
    let settings = match &args.settings {
        Some(path) => SolverSettings::from_json_file(path)?,
        None => SolverSettings::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let item = match &args.job {
        Some(path) => load_job(path)?,
        None => demo_job(),
    };

    println!("Calculating {} '{}'...", item.calc_type(), item.label());
    println!();
    item.run(&catalog, &settings)
}

fn main() -> ExitCode {
    env_logger::init();

    println!("Travi CLI - Beam Bending and Torsion");
    println!("====================================");
    println!();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(output) => {
            print_report(&output);
            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_report(output: &CalculationOutput) {
    println!("═══════════════════════════════════════");
    match output {
        CalculationOutput::Bending(r) => print_bending(r),
        CalculationOutput::Torsion(r) => print_torsion(r),
        CalculationOutput::QuickBending(r) => print_quick_bending(r),
        CalculationOutput::QuickTorsion(r) => print_quick_torsion(r),
    }
    println!();
    print_stress(output.stress());
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", output.stress().verdict);
    println!("═══════════════════════════════════════");
}

fn print_bending(r: &BendingResult) {
    println!("  BENDING: {}", r.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Beam:");
    println!("  Length:   {:.1} mm", r.length_mm);
    println!("  Supports: {}", r.family.name());
    println!("  I = {:.1} mm⁴, W = {:.1} mm³", r.section.inertia_mm4, r.section.section_modulus_mm3);
    println!("  E = {:.0} MPa", r.material.e_mpa);
    println!();
    println!("Reactions:");
    println!("  Left  (x = 0):  R = {:.3} N, C = {:.1} N·mm", r.reactions.left.force_n, r.reactions.left.moment_nmm);
    println!(
        "  Right (x = {:.0}): R = {:.3} N, C = {:.1} N·mm",
        r.reactions.right.position_mm, r.reactions.right.force_n, r.reactions.right.moment_nmm
    );
    println!();
    let s = &r.summary;
    if s.no_loads {
        println!("No loads applied.");
        return;
    }
    println!("Demand:");
    println!("  |V|max = {:.3} N at x = {:.1} mm", s.max_shear.abs(), s.max_shear.position_mm);
    println!("  |M|max = {:.1} N·mm at x = {:.1} mm", s.max_moment.abs(), s.max_moment.position_mm);
    println!("  |y|max = {:.4} mm at x = {:.1} mm", s.max_deflection.abs(), s.max_deflection.position_mm);
    match s.equivalent_stiffness_n_per_mm {
        Some(k) => println!("  k_eq   = {:.3} N/mm", k),
        None => println!("  k_eq   = infinite"),
    }
}

fn print_torsion(r: &TorsionResult) {
    println!("  TORSION: {}", r.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Shaft:");
    println!("  Length:   {:.1} mm", r.length_mm);
    println!("  Supports: {}", r.family.name());
    println!(
        "  Jt = {:.1} mm⁴, Wt = {:.1} mm³",
        r.torsion_section.torsion_constant_mm4, r.torsion_section.torsional_modulus_mm3
    );
    println!("  G = {:.0} MPa", r.material.g_mpa);
    println!();
    println!("Reactions:");
    println!("  Left:  {:.3} N·m", r.reactions.left.torque_nm);
    println!("  Right: {:.3} N·m", r.reactions.right.torque_nm);
    println!();
    let s = &r.summary;
    if s.no_loads {
        println!("No loads applied.");
        return;
    }
    println!("Demand:");
    println!("  |T|max = {:.3} N·m at x = {:.1} mm", s.max_torque.abs(), s.max_torque.position_mm);
    println!("  |θ|max = {:.4}° ({:.6} rad)", s.max_twist_deg, s.max_twist_rad);
    println!("  Relative end rotation = {:.4}°", s.relative_rotation_deg);
}

fn print_quick_bending(r: &QuickBendingResult) {
    println!("  QUICK BENDING: {}", r.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("  M_max = {:.1} N·mm", r.max_moment_nmm);
    println!("  σ     = {:.2} MPa", r.sigma_mpa);
    println!("  y     = {:.4} mm", r.deflection_mm);
    match r.stiffness_n_per_mm {
        Some(k) => println!("  k     = {:.3} N/mm", k),
        None => println!("  k     = infinite"),
    }
}

fn print_quick_torsion(r: &QuickTorsionResult) {
    println!("  QUICK TORSION: {}", r.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("  τ = {:.2} MPa", r.tau_mpa);
    println!("  θ = {:.4}° ({:.6} rad)", r.twist_deg, r.twist_rad);
}

fn print_stress(check: &StressCheck) {
    println!("Stress Check ({}):", check.quantity);
    println!(
        "  worst = {:.2} MPa at x = {:.1} mm, allowable = {:.2} MPa",
        check.worst_mpa, check.worst_position_mm, check.allowable_mpa
    );
    println!("  utilization = {:.1} % {}", check.utilization_pct, status_icon(check.verdict.is_pass()));
    if let Some(sf) = check.safety_factor {
        println!("  safety factor = {:.3}", sf);
    }
    let exceeded = check.exceeded_positions().count();
    if exceeded > 0 {
        println!("  {} sampled positions exceed the allowable value", exceeded);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
