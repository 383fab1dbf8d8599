//! Integration-level tests for the model and driver, using real drones,
//! packages, and stations.

use fleet_agent::Drone;
use fleet_core::{EntityId, Vec3};
use fleet_entity::{Details, Entity, Package, RECHARGE_STATION_TYPE};
use fleet_power::{BatteryDecorator, PowerEvent};
use serde_json::json;

use crate::{NoopObserver, SimConfig, SimError, SimObserver, SimulationModel};

// ── Scenario helpers ──────────────────────────────────────────────────────────

fn station_details(x: f64, y: f64, z: f64) -> Details {
    let mut d = Details::new();
    d.insert("type".into(), json!(RECHARGE_STATION_TYPE));
    d.insert("position".into(), json!([x, y, z]));
    d
}

fn drone_details(x: f64, y: f64, z: f64, speed: f64) -> Details {
    let mut d = Details::new();
    d.insert("type".into(), json!("drone"));
    d.insert("position".into(), json!([x, y, z]));
    d.insert("speed".into(), json!(speed));
    d
}

/// An observer that records every callback for later inspection.
#[derive(Default)]
struct Recorder {
    tick_starts: Vec<u64>,
    tick_ends: Vec<u64>,
    events: Vec<(EntityId, PowerEvent)>,
    sim_end: Option<u64>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: u64) {
        self.tick_starts.push(tick);
    }

    fn on_tick_end(&mut self, tick: u64) {
        self.tick_ends.push(tick);
    }

    fn on_power_event(&mut self, agent: EntityId, event: &PowerEvent) {
        self.events.push((agent, event.clone()));
    }

    fn on_sim_end(&mut self, final_tick: u64) {
        self.sim_end = Some(final_tick);
    }
}

/// The full-roster delivery scenario.
///
/// Eight stations; the one at `(65, 0, 5)` is nearest when the battery goes
/// red (the drone reaches `x = 65` on the same tick its charge hits 35), and
/// the one at `(80, 0, 4)` is nearest to the dropoff for standby.  Returns
/// `(model, drone_id, package_id, red_station_id, standby_station_id)`.
fn delivery_scenario(total_ticks: u64) -> (SimulationModel, EntityId, EntityId, EntityId, EntityId) {
    let mut model = SimulationModel::new(SimConfig::new(1.0, total_ticks));

    let red_station = model.add_station(station_details(65.0, 0.0, 5.0)).unwrap();
    let standby_station = model.add_station(station_details(80.0, 0.0, 4.0)).unwrap();
    for &(x, z) in &[
        (500.0, 0.0),
        (-500.0, 0.0),
        (0.0, 500.0),
        (0.0, -500.0),
        (500.0, 500.0),
        (-500.0, -500.0),
    ] {
        model.add_station(station_details(x, 0.0, z)).unwrap();
    }

    let package_id = model.allocate_id();
    model.add_package(Package::at(package_id, Vec3::new(2.0, 0.0, 0.0)));

    let drone_id = model.allocate_id();
    let mut drone = Drone::from_details(drone_id, drone_details(0.0, 0.0, 0.0, 1.0)).unwrap();
    drone.assign_delivery(package_id, Vec3::new(2.0, 0.0, 0.0), Vec3::new(80.0, 0.0, 0.0));
    model.add_agent(BatteryDecorator::new(Box::new(drone)));

    (model, drone_id, package_id, red_station, standby_station)
}

// ── Population ────────────────────────────────────────────────────────────────

mod population {
    use super::*;

    #[test]
    fn allocated_ids_are_sequential_and_distinct() {
        let mut model = SimulationModel::new(SimConfig::default());
        let a = model.allocate_id();
        let b = model.allocate_id();
        assert_eq!(a, EntityId(0));
        assert_eq!(b, EntityId(1));
    }

    #[test]
    fn eight_stations_make_the_roster_ready() {
        let (model, ..) = delivery_scenario(0);
        assert_eq!(model.world_view().station_count(), 8);
        assert!(model.world_view().roster_ready());
    }

    #[test]
    fn add_station_rejects_a_bad_descriptor() {
        let mut model = SimulationModel::new(SimConfig::default());

        let mut wrong_tag = Details::new();
        wrong_tag.insert("type".into(), json!("vending machine"));
        wrong_tag.insert("position".into(), json!([0.0, 0.0, 0.0]));
        assert!(matches!(
            model.add_station(wrong_tag),
            Err(SimError::Entity(_))
        ));

        let mut no_position = Details::new();
        no_position.insert("type".into(), json!(RECHARGE_STATION_TYPE));
        assert!(matches!(
            model.add_station(no_position),
            Err(SimError::Entity(_))
        ));

        assert!(model.fixtures().is_empty());
    }

    #[test]
    fn packages_are_reachable_by_id() {
        let mut model = SimulationModel::new(SimConfig::default());
        let id = model.allocate_id();
        model.add_package(Package::at(id, Vec3::new(1.0, 2.0, 3.0)));

        let found = model.package(id).unwrap();
        assert_eq!(found.position(), Vec3::new(1.0, 2.0, 3.0));
        assert!(model.package(EntityId(99)).is_none());
    }
}

// ── Driver mechanics ──────────────────────────────────────────────────────────

mod driver {
    use super::*;

    #[test]
    fn run_fires_the_tick_hooks_in_order() {
        let mut model = SimulationModel::new(SimConfig::new(1.0, 5));
        let mut recorder = Recorder::default();

        model.run(&mut recorder).unwrap();
        assert_eq!(recorder.tick_starts, vec![0, 1, 2, 3, 4]);
        assert_eq!(recorder.tick_ends, vec![0, 1, 2, 3, 4]);
        assert_eq!(recorder.sim_end, Some(5));
        assert_eq!(model.current_tick(), 5);
    }

    #[test]
    fn run_ticks_continues_the_tick_counter() {
        let mut model = SimulationModel::new(SimConfig::new(1.0, 0));
        let mut recorder = Recorder::default();

        model.run_ticks(3, &mut recorder).unwrap();
        model.run_ticks(2, &mut recorder).unwrap();
        assert_eq!(recorder.tick_starts, vec![0, 1, 2, 3, 4]);
        assert_eq!(recorder.sim_end, None);
        assert_eq!(model.current_tick(), 5);
    }

    #[test]
    fn invalid_dt_is_rejected_before_any_tick_runs() {
        let mut model = SimulationModel::new(SimConfig::new(0.0, 10));
        let mut recorder = Recorder::default();

        assert!(matches!(
            model.run(&mut recorder),
            Err(SimError::Config(_))
        ));
        assert!(recorder.tick_starts.is_empty());
        assert_eq!(model.current_tick(), 0);
    }
}

// ── End-to-end delivery ───────────────────────────────────────────────────────

mod end_to_end {
    use super::*;

    #[test]
    fn delivery_with_recharge_detour_completes() {
        let (mut model, drone_id, package_id, red_station, standby_station) =
            delivery_scenario(100);
        let mut recorder = Recorder::default();

        model.run(&mut recorder).unwrap();

        let package = model.package(package_id).unwrap();
        assert!(package.picked_up);
        assert!(package.delivered);
        assert_eq!(package.position(), Vec3::new(80.0, 0.0, 0.0));

        // Parked and fully charged at the standby station.
        let agent = model.agent(drone_id).unwrap();
        assert!(agent.is_available());
        assert!(agent.is_standing_by());
        assert!(agent.is_at_facility());
        assert_eq!(agent.charge(), 100.0);
        assert_eq!(agent.position(), Vec3::new(80.0, 0.0, 4.0));

        let events: Vec<PowerEvent> = recorder
            .events
            .iter()
            .map(|(agent, event)| {
                assert_eq!(*agent, drone_id);
                event.clone()
            })
            .collect();
        assert_eq!(
            events,
            vec![
                PowerEvent::LowBatteryDiversion { station: red_station },
                PowerEvent::DockedCharging,
                PowerEvent::FullyCharged,
                PowerEvent::StandbyDiversion { station: standby_station },
                PowerEvent::StandbyDocked,
            ]
        );
    }

    #[test]
    fn package_rides_along_during_the_diversion() {
        let (mut model, drone_id, package_id, red_station, _) = delivery_scenario(0);

        // The charge hits 35 on tick 65 (from 0, that is 65 ticks); two more
        // ticks put the drone partway through the detour.
        model.run_ticks(67, &mut NoopObserver).unwrap();

        let agent = model.agent(drone_id).unwrap();
        assert!(agent.is_en_route());
        assert_eq!(agent.target(), Some(red_station));
        assert_eq!(agent.charge(), 35.0);

        let package = model.package(package_id).unwrap();
        assert!(package.picked_up);
        assert!(!package.delivered);
        assert_eq!(package.position(), agent.position());
    }

    #[test]
    fn pickup_is_reported_before_the_package_moves() {
        let (mut model, _, package_id, ..) = delivery_scenario(0);

        // Two ticks: fly to the pickup point and collect.
        model.run_ticks(2, &mut NoopObserver).unwrap();
        let package = model.package(package_id).unwrap();
        assert!(package.picked_up);
        assert_eq!(package.position(), Vec3::new(2.0, 0.0, 0.0));

        model.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(
            model.package(package_id).unwrap().position(),
            Vec3::new(3.0, 0.0, 0.0)
        );
    }
}

// ── Roster readiness guard ────────────────────────────────────────────────────

mod guard {
    use super::*;

    #[test]
    fn unready_roster_strands_a_delivering_drone() {
        // Two stations against an expected eight: routing never engages.
        let mut model = SimulationModel::new(SimConfig::new(1.0, 150));
        model.add_station(station_details(10.0, 0.0, 0.0)).unwrap();
        model.add_station(station_details(20.0, 0.0, 0.0)).unwrap();

        let package_id = model.allocate_id();
        model.add_package(Package::at(package_id, Vec3::new(1.0, 0.0, 0.0)));

        let drone_id = model.allocate_id();
        let mut drone =
            Drone::from_details(drone_id, drone_details(0.0, 0.0, 0.0, 1.0)).unwrap();
        drone.assign_delivery(package_id, Vec3::new(1.0, 0.0, 0.0), Vec3::new(500.0, 0.0, 0.0));
        model.add_agent(BatteryDecorator::new(Box::new(drone)));

        let mut recorder = Recorder::default();
        model.run(&mut recorder).unwrap();

        // One unit of charge per tick, exhausted after 100; the drone kept
        // flying toward the dropoff the whole way down.
        let agent = model.agent(drone_id).unwrap();
        assert_eq!(agent.charge(), 0.0);
        assert!(!agent.is_en_route());
        assert!(agent.target().is_none());
        assert_eq!(agent.position(), Vec3::new(100.0, 0.0, 0.0));

        let events: Vec<PowerEvent> =
            recorder.events.into_iter().map(|(_, event)| event).collect();
        assert_eq!(events, vec![PowerEvent::Depleted]);

        assert!(!model.package(package_id).unwrap().delivered);
    }

    #[test]
    fn depleted_drone_stays_frozen() {
        let mut model = SimulationModel::new(SimConfig::new(1.0, 0));
        let drone_id = model.allocate_id();
        let mut drone =
            Drone::from_details(drone_id, drone_details(0.0, 0.0, 0.0, 1.0)).unwrap();
        let package_id = model.allocate_id();
        model.add_package(Package::at(package_id, Vec3::new(1.0, 0.0, 0.0)));
        drone.assign_delivery(package_id, Vec3::new(1.0, 0.0, 0.0), Vec3::new(500.0, 0.0, 0.0));
        model.add_agent(BatteryDecorator::new(Box::new(drone)));

        model.run_ticks(100, &mut NoopObserver).unwrap();
        let frozen_at = model.agent(drone_id).unwrap().position();

        let mut recorder = Recorder::default();
        model.run_ticks(50, &mut recorder).unwrap();
        let agent = model.agent(drone_id).unwrap();
        assert_eq!(agent.charge(), 0.0);
        assert_eq!(agent.position(), frozen_at);
        assert!(recorder.events.is_empty());
    }
}
