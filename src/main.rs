use std::error::Error;
use std::path::Path;

use colored::Colorize;
use rand::prelude::*;
use rand_xoshiro::*;

#[cfg(feature = "with-mpi")]
use mpi::{traits::*, collective::SystemOperation};

#[cfg(not(feature = "with-mpi"))]
extern crate no_mpi as mpi;

#[cfg(not(feature = "with-mpi"))]
use mpi::{Communicator, SystemOperation};

mod constants;
mod event;
mod geometry;
mod input;
mod interaction;
mod kinematics;
mod nuclear;
mod pauli;
mod pdg;
mod qel;
mod xsec;

use input::*;
use interaction::*;
use nuclear::*;
use pauli::*;
use qel::*;
use xsec::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Diagnostic {
    Warning,
    Error,
}

/// Prints a diagnostic message to stderr, if `cond` holds
macro_rules! report {
    ($kind:expr, $cond:expr, $($arg:tt)*) => {
        if $cond {
            let prefix = match $kind {
                Diagnostic::Warning => "Warning:".bold().yellow(),
                Diagnostic::Error => "Error:".bold().red(),
            };
            eprintln!("{} {}", prefix, format!($($arg)*));
        }
    };
}

/// Per-task tallies, summed over all tasks at the end of each run
#[derive(Copy, Clone, Debug, Default)]
struct Tally {
    generated: f64,
    empty: f64,
    failed: f64,
    blocked: f64,
    weight: f64,
    q2: f64,
    lepton_energy: f64,
    removal_energy: f64,
}

impl Tally {
    fn to_array(&self) -> [f64; 8] {
        [
            self.generated, self.empty, self.failed, self.blocked,
            self.weight, self.q2, self.lepton_energy, self.removal_energy,
        ]
    }

    fn from_array(a: [f64; 8]) -> Self {
        Tally {
            generated: a[0],
            empty: a[1],
            failed: a[2],
            blocked: a[3],
            weight: a[4],
            q2: a[5],
            lepton_energy: a[6],
            removal_energy: a[7],
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let universe = mpi::initialize().ok_or("failed to initialize MPI")?;
    let world = universe.world();
    let id = world.rank();
    let ntasks = world.size();

    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).ok_or(InputError::file())?;

    let mut input = Config::from_file(Path::new(path))?;
    input.with_context("constants")?;

    let events: usize = input.read("control:events")?;
    let seed: u64 = input.read_or("control:seed", 0)?;
    let verbose: bool = input.read_or("control:verbose", false)?;

    let probe: String = input.read("interaction:probe")?;
    let probe = pdg::from_name(&probe)
        .ok_or(InputError::conversion("interaction:probe", &probe))?;
    let target: String = input.read("interaction:target")?;
    let target = pdg::from_name(&target)
        .ok_or(InputError::conversion("interaction:target", &target))?;
    let hit_nucleon: String = input.read("interaction:hit-nucleon")?;
    let hit_nucleon = pdg::from_name(&hit_nucleon)
        .filter(|n| pdg::is_nucleon(*n))
        .ok_or(InputError::conversion("interaction:hit-nucleon", &hit_nucleon))?;
    let energies: Vec<f64> = input.read_loop("interaction:energy")?;
    let process: InteractionType = input.read_or("interaction:process", InteractionType::WeakCc)?;

    let settings = GeneratorSettings::from_config(&input)?;
    let mut nuclear_model: NuclearModelKind = input.read_or("nuclear-model:type", LocalFermiGas::new().into())?;
    // negative values select the tabulated parameters
    let removal_energy: f64 = input.read_or("nuclear-model:removal-energy", -1.0)?;
    if removal_energy >= 0.0 {
        nuclear_model = nuclear_model.with_removal_energy(removal_energy);
    }
    let fermi_momentum: f64 = input.read_or("nuclear-model:fermi-momentum", -1.0)?;
    if fermi_momentum >= 0.0 {
        nuclear_model = nuclear_model.with_fermi_momentum(fermi_momentum);
    }
    let pauli_source: FermiMomentumSource = input.read_or("generator:pauli-blocker", FermiMomentumSource::Local)?;
    let axial_mass: f64 = input.read_or("xsec:axial-mass", 0.99)?;
    let min_angle_em: f64 = input.read_or("generator:min-angle-em", 0.0)?;

    report!(
        Diagnostic::Warning,
        id == 0 && process != InteractionType::WeakCc,
        "the Llewellyn Smith cross section is only defined for charged-current scattering, all {} events will be empty.",
        process,
    );

    let xsec = QelPhaseSpace::new(LlewellynSmith::new(axial_mass))
        .with_min_angle_em(min_angle_em);
    let generator = QelGenerator::new(nuclear_model, xsec, FermiPauliBlocker::new(pauli_source), settings);

    let density = NuclearDensity::new(&Target::new(target));
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed + id as u64);

    if id == 0 {
        println!(
            "{} qelgen (commit {}, features [{}]) on {} task{}...",
            "Running".bold().cyan(),
            option_env!("VERGEN_SHA_SHORT").unwrap_or("unknown"),
            env!("QELGEN_ACTIVE_FEATURES"),
            ntasks,
            if ntasks > 1 { "s" } else { "" },
        );
    }

    // split the events as evenly as possible
    let num = events / (ntasks as usize) + if (id as usize) < events % (ntasks as usize) { 1 } else { 0 };

    for energy in energies.iter() {
        let base = match process {
            InteractionType::WeakCc => Interaction::qel_cc(target, hit_nucleon, probe, *energy),
            InteractionType::WeakNc => Interaction::qel_nc(target, hit_nucleon, probe, *energy),
            InteractionType::Em => Interaction::qel_em(target, hit_nucleon, probe, *energy),
        };

        if id == 0 {
            println!("{} {}...", "Generating".bold().cyan(), base);
        }

        let mut tally = Tally::default();

        for _i in 0..num {
            let mut interaction = base.clone();
            let r = density.sample_radius(&mut rng);
            interaction.target_mut().set_hit_nucleon_radius(r);

            match generator.generate(interaction, &mut rng) {
                Ok(Outcome::Generated(mut event)) => {
                    generator.pauli().process(&mut event);
                    if verbose && id == 0 && tally.generated == 0.0 {
                        println!("{}", event);
                    }
                    tally.generated += 1.0;
                    tally.weight += event.weight();
                    tally.q2 += event.kinematics().q2(true).unwrap_or(0.0);
                    tally.lepton_energy += event.lepton().map_or(0.0, |l| l.momentum.energy());
                    tally.removal_energy += event.removal_energy();
                    if event.pauli_blocked() {
                        tally.blocked += 1.0;
                    }
                },
                Ok(Outcome::Empty) => {
                    tally.empty += 1.0;
                },
                Err(e @ GenerationError::KinematicSelection { .. }) => {
                    report!(Diagnostic::Warning, verbose, "{} Skipping event.", e);
                    tally.failed += 1.0;
                },
                Err(e) => {
                    report!(Diagnostic::Error, true, "task {}: {}", id, e);
                    return Err(e.into());
                },
            }
        }

        let local = tally.to_array();
        let mut total = [0.0; 8];
        world.all_reduce_into(&local[..], &mut total[..], SystemOperation::sum());
        let total = Tally::from_array(total);

        if id == 0 {
            let max_xsec = generator.cache().find(&base.as_string(), *energy);
            println!(
                "{} E = {:.3} GeV: {} generated, {} empty, {} failed, {:.2}% Pauli blocked, <Q2> = {:.4} GeV^2, max xsec = {} cm^2.",
                "Completed".bold().bright_green(),
                energy,
                total.generated,
                total.empty,
                total.failed,
                100.0 * total.blocked / total.generated.max(1.0),
                total.q2 / total.generated.max(1.0),
                max_xsec.map_or("not cached".to_owned(), |m| format!("{:.6e}", m * constants::GEV2_TO_CM2)),
            );
            println!(
                "\t<E_lepton> = {:.4} GeV, <removal energy> = {:.2} MeV",
                total.lepton_energy / total.generated.max(1.0),
                1.0e3 * total.removal_energy / total.generated.max(1.0),
            );
            if generator.settings().uniform_over_phase_space {
                println!("\tsum of weights = {:.6e}", total.weight);
            }
        }
    }

    Ok(())
}
