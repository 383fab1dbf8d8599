//! depot-run — smallest example for the fleet_sim delivery framework.
//!
//! Scatters 8 recharge stations and 3 delivery drones across a synthetic
//! 200 × 200 depot yard, assigns each drone one package, and runs the
//! simulation to completion, printing every battery-state transition.

use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use fleet_agent::Drone;
use fleet_core::{EntityId, Vec3};
use fleet_entity::{Details, Entity, Package, RECHARGE_STATION_TYPE};
use fleet_power::{BatteryDecorator, PowerEvent};
use fleet_sim::config::EXPECTED_STATIONS;
use fleet_sim::{SimConfig, SimObserver, SimulationModel};

// ── Constants ─────────────────────────────────────────────────────────────────

const DRONE_COUNT: usize = 3;
const SEED:        u64   = 42;
const DT:          f64   = 1.0;
const TOTAL_TICKS: u64   = 400;
const HALF_EXTENT: f64   = 100.0; // yard spans ±100 scene units on x and z

// ── Transition log ────────────────────────────────────────────────────────────

/// Prints every battery-state transition as it happens and tallies them
/// for the end-of-run summary.
#[derive(Default)]
struct TransitionLog {
    tick: u64,
    transitions: usize,
    diversions: usize,
}

impl SimObserver for TransitionLog {
    fn on_tick_start(&mut self, tick: u64) {
        self.tick = tick;
    }

    fn on_power_event(&mut self, agent: EntityId, event: &PowerEvent) {
        self.transitions += 1;
        if matches!(event, PowerEvent::LowBatteryDiversion { .. }) {
            self.diversions += 1;
        }
        println!("  [tick {:>4}] {agent}: {event:?}", self.tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn random_point(rng: &mut SmallRng) -> Vec3 {
    Vec3::new(
        rng.gen_range(-HALF_EXTENT..HALF_EXTENT),
        0.0,
        rng.gen_range(-HALF_EXTENT..HALF_EXTENT),
    )
}

fn main() -> Result<()> {
    println!("=== depot-run — fleet_sim delivery simulation ===");
    println!("Drones: {DRONE_COUNT}  |  Stations: {EXPECTED_STATIONS}  |  Seed: {SEED}");
    println!();

    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut model = SimulationModel::new(SimConfig::new(DT, TOTAL_TICKS));

    // 1. Scatter the recharge stations.  The routing guard expects exactly
    //    EXPECTED_STATIONS of them, so the roster is ready from tick 0.
    for i in 0..EXPECTED_STATIONS {
        let p = random_point(&mut rng);
        let mut details = Details::new();
        details.insert("type".into(), json!(RECHARGE_STATION_TYPE));
        details.insert("name".into(), json!(format!("station-{i}")));
        details.insert("position".into(), json!([p.x, p.y, p.z]));
        model.add_station(details)?;
    }

    // 2. One package and one battery-wrapped drone per delivery.
    for i in 0..DRONE_COUNT {
        let start = random_point(&mut rng);
        let pickup = random_point(&mut rng);
        let dropoff = random_point(&mut rng);

        let package_id = model.allocate_id();
        model.add_package(Package::at(package_id, pickup));

        let drone_id = model.allocate_id();
        let mut details = Details::new();
        details.insert("type".into(), json!("drone"));
        details.insert("name".into(), json!(format!("drone-{i}")));
        details.insert("position".into(), json!([start.x, start.y, start.z]));
        details.insert("speed".into(), json!(rng.gen_range(1.0..2.0)));
        let mut drone = Drone::from_details(drone_id, details)?;
        drone.assign_delivery(package_id, pickup, dropoff);
        model.add_agent(BatteryDecorator::new(Box::new(drone)));
    }

    println!(
        "Sim: {TOTAL_TICKS} ticks, dt = {DT}, yard ±{HALF_EXTENT} scene units"
    );
    println!();

    // 3. Run.
    let mut log = TransitionLog::default();
    let t0 = Instant::now();
    model.run(&mut log)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} transitions, of which {} low-battery diversions",
        log.transitions, log.diversions
    );
    println!();

    println!("{:<10} {:<8} {:<12} {:<18}", "Drone", "Charge", "State", "Position");
    println!("{}", "-".repeat(50));
    for agent in model.agents() {
        let state = if agent.is_charging() {
            "charging"
        } else if agent.is_standing_by() {
            "standing by"
        } else if agent.is_en_route() {
            "en route"
        } else if agent.charge() <= 0.0 {
            "depleted"
        } else {
            "active"
        };
        let p = agent.position();
        println!(
            "{:<10} {:<8.1} {:<12} ({:>6.1}, {:>6.1})",
            agent.name(),
            agent.charge(),
            state,
            p.x,
            p.z,
        );
    }
    println!();

    println!("{:<12} {:<10}", "Package", "Delivered");
    println!("{}", "-".repeat(22));
    for package in model.packages() {
        println!(
            "{:<12} {:<10}",
            package.id(),
            if package.delivered { "yes" } else { "no" },
        );
    }

    Ok(())
}
