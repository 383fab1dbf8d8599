//! Entity ownership and the sequential tick driver.

use fleet_core::{EntityId, FleetError};
use fleet_entity::{Details, Effect, Entity, Package, RechargeStation, WorldView};
use fleet_power::BatteryDecorator;
use rustc_hash::FxHashMap;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::observer::SimObserver;

/// Owns every entity in the scenario and drives the tick loop.
///
/// Three arenas with different mutation disciplines:
///
/// - **agents** — battery-wrapped mobile entities, ticked one at a time
///   against a read-only view of the fixture roster.
/// - **fixtures** — stationary entities (recharge stations).  Immutable
///   while any agent is mid-update.
/// - **packages** — deliverables.  Never self-moving; repositioned only by
///   applying the [`Effect`]s agents return.
///
/// Each agent's effects are applied before the next agent runs, so within a
/// tick every agent observes the writes of the agents before it.
pub struct SimulationModel {
    config: SimConfig,
    agents: Vec<BatteryDecorator>,
    fixtures: Vec<Box<dyn Entity>>,
    packages: Vec<Package>,
    package_index: FxHashMap<EntityId, usize>,
    next_id: u32,
    current_tick: u64,
}

impl SimulationModel {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            agents: Vec::new(),
            fixtures: Vec::new(),
            packages: Vec::new(),
            package_index: FxHashMap::default(),
            next_id: 0,
            current_tick: 0,
        }
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Hand out the next unused entity ID.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Build a recharge station from its descriptor and add it to the
    /// fixture roster.
    pub fn add_station(&mut self, details: Details) -> SimResult<EntityId> {
        let id = self.allocate_id();
        let station = RechargeStation::from_details(id, details)?;
        self.fixtures.push(Box::new(station));
        Ok(id)
    }

    /// Add a battery-wrapped agent.  The wrapper's ID is its inner
    /// entity's ID.
    pub fn add_agent(&mut self, agent: BatteryDecorator) -> EntityId {
        let id = agent.id();
        self.agents.push(agent);
        id
    }

    /// Add a package to the deliverable arena.
    pub fn add_package(&mut self, package: Package) -> EntityId {
        let id = package.id();
        self.package_index.insert(id, self.packages.len());
        self.packages.push(package);
        id
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn agents(&self) -> &[BatteryDecorator] {
        &self.agents
    }

    pub fn agent(&self, id: EntityId) -> Option<&BatteryDecorator> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn fixtures(&self) -> &[Box<dyn Entity>] {
        &self.fixtures
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, id: EntityId) -> Option<&Package> {
        self.package_index.get(&id).map(|&slot| &self.packages[slot])
    }

    /// The read-only roster view agents are ticked against.
    pub fn world_view(&self) -> WorldView<'_> {
        WorldView::new(&self.fixtures, self.config.expected_stations)
    }

    // ── Driver ────────────────────────────────────────────────────────────

    /// Run the configured number of ticks, reporting to `observer`.
    pub fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        self.config.validate()?;
        for _ in 0..self.config.total_ticks {
            observer.on_tick_start(self.current_tick);
            self.process_tick(observer)?;
            observer.on_tick_end(self.current_tick);
            self.current_tick += 1;
        }
        observer.on_sim_end(self.current_tick);
        Ok(())
    }

    /// Run `ticks` additional ticks regardless of `total_ticks`.  No
    /// end-of-simulation callback; callers stepping manually decide when
    /// the run is over.
    pub fn run_ticks(&mut self, ticks: u64, observer: &mut dyn SimObserver) -> SimResult<()> {
        self.config.validate()?;
        for _ in 0..ticks {
            observer.on_tick_start(self.current_tick);
            self.process_tick(observer)?;
            observer.on_tick_end(self.current_tick);
            self.current_tick += 1;
        }
        Ok(())
    }

    /// One full tick: agents (with per-agent effect application and event
    /// draining), then fixture and package self-checks.
    fn process_tick(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        let dt = self.config.dt;

        // Split borrows: the view borrows `fixtures` immutably while each
        // agent is updated mutably.
        let Self {
            agents,
            fixtures,
            packages,
            package_index,
            config,
            ..
        } = self;
        let world = WorldView::new(fixtures, config.expected_stations);

        for agent in agents.iter_mut() {
            let effects = agent.update(dt, &world);
            let agent_id = agent.id();

            for effect in effects {
                apply_effect(packages, package_index, effect)?;
            }
            for event in agent.take_events() {
                observer.on_power_event(agent_id, &event);
            }
        }

        // Stationary entities have no behavior beyond self-checks, so an
        // empty view suffices.
        let empty = WorldView::empty();
        for fixture in fixtures.iter_mut() {
            fixture.update(dt, &empty);
        }
        for package in packages.iter_mut() {
            package.update(dt, &empty);
        }

        Ok(())
    }
}

/// Apply one agent-produced effect to the package arena.
///
/// An effect naming a package the model does not own is a scenario bug and
/// surfaces as [`FleetError::UnknownEntity`].
fn apply_effect(
    packages: &mut [Package],
    index: &FxHashMap<EntityId, usize>,
    effect: Effect,
) -> SimResult<()> {
    let package_id = match &effect {
        Effect::PayloadMoved { package, .. }
        | Effect::PayloadPickedUp { package }
        | Effect::PayloadDelivered { package } => *package,
    };
    let slot = index
        .get(&package_id)
        .copied()
        .ok_or(FleetError::UnknownEntity(package_id))?;
    let target = &mut packages[slot];

    match effect {
        Effect::PayloadMoved { position, direction, .. } => {
            target.set_position(position);
            target.set_direction(direction);
        }
        Effect::PayloadPickedUp { .. } => target.picked_up = true,
        Effect::PayloadDelivered { .. } => target.delivered = true,
    }
    Ok(())
}
