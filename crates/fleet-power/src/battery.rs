//! The battery-augmented entity wrapper.

use fleet_core::{Color, EntityId, Vec3};
use fleet_entity::{Details, Effect, Entity, Payload, WorldView};
use fleet_route::{BeelineStrategy, Strategy};

use crate::event::PowerEvent;
use crate::nearest::nearest_station;

/// Charge level at construction and the level at which charging stops.
pub const FULL_CHARGE: f64 = 100.0;

/// Charge gained per simulated time-unit while docked.
pub const CHARGE_RATE: f64 = 20.0;

/// Charge lost per simulated time-unit while operating normally.
pub const DISCHARGE_RATE: f64 = 1.0;

/// Composes a finite energy budget onto one owned mobile entity.
///
/// The wrapper intercepts every tick: it discharges while the inner entity
/// operates, watches for the low-charge threshold, diverts to the nearest
/// recharge facility (carrying a picked-up payload along), docks, recharges,
/// and hands control back once full.  Idle entities are routed to a facility
/// to stand by.  All non-battery behavior delegates to the inner entity.
///
/// # Sub-state flags
///
/// Four flags describe the routing/docking sub-state.  Invariants, upheld by
/// [`update`][Entity::update]:
///
/// - `charge` stays in `[0, 100]`.
/// - `charging` implies `at_facility`.
/// - At most one of `en_route` / `at_facility` is set while not charging.
/// - The trip strategy exists exactly while `en_route`.
///
/// # Depleted charge
///
/// At charge 0 the entity freezes entirely: no discharge, movement, or
/// charging.  There is deliberately no recovery path from a depleted,
/// non-docked battery; recovering one is an external-intervention concern.
pub struct BatteryDecorator {
    inner: Box<dyn Entity>,
    charge: f64,

    /// Facility currently routed to.  Not owned — an ID into the model's
    /// roster.
    target: Option<EntityId>,
    /// Trip in progress.  Recreated per trip, dropped on arrival.
    strategy: Option<BeelineStrategy>,

    standing_by: bool,
    en_route: bool,
    at_facility: bool,
    charging: bool,

    events: Vec<PowerEvent>,
}

impl BatteryDecorator {
    /// Wrap `inner`, taking exclusive ownership of it.  Charge starts full.
    pub fn new(mut inner: Box<dyn Entity>) -> Self {
        inner.set_color(Color::Green);
        Self {
            inner,
            charge: FULL_CHARGE,
            target: None,
            strategy: None,
            standing_by: false,
            en_route: false,
            at_facility: false,
            charging: false,
            events: Vec::new(),
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn is_standing_by(&self) -> bool {
        self.standing_by
    }

    pub fn is_en_route(&self) -> bool {
        self.en_route
    }

    pub fn is_at_facility(&self) -> bool {
        self.at_facility
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// The facility currently routed to, if any.
    pub fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// Read access to the wrapped entity.
    pub fn inner(&self) -> &dyn Entity {
        self.inner.as_ref()
    }

    /// Mutable access to the wrapped entity (e.g. to assign a delivery).
    pub fn inner_mut(&mut self) -> &mut dyn Entity {
        self.inner.as_mut()
    }

    /// Drain the power events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<PowerEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Charge arithmetic ─────────────────────────────────────────────────

    /// Remove `amount` charge, clamped at 0.
    pub fn discharge(&mut self, amount: f64) {
        let was_positive = self.charge > 0.0;
        self.charge = (self.charge - amount).max(0.0);
        if was_positive && self.charge == 0.0 {
            self.events.push(PowerEvent::Depleted);
        }
    }

    /// Add `amount` charge, clamped at [`FULL_CHARGE`].
    pub fn recharge(&mut self, amount: f64) {
        self.charge = (self.charge + amount).min(FULL_CHARGE);
    }

    // ── State-machine branches ────────────────────────────────────────────

    /// Delivering and not charging: recolor by charge pressure; at red,
    /// divert to the nearest facility, dragging a picked-up payload along.
    fn delivery_tick(&mut self, dt: f64, world: &WorldView<'_>, effects: &mut Vec<Effect>) {
        self.at_facility = false;
        self.standing_by = false;

        let color = Color::from_charge(self.charge, true);
        self.inner.set_color(color);
        if color != Color::Red {
            return;
        }

        // The readiness guard: an incompletely initialized roster means no
        // routing at all — the entity keeps discharging where it is.
        if !world.roster_ready() {
            return;
        }

        if self.strategy.is_none() {
            let Some(station) = nearest_station(world, self.inner.position()) else {
                return;
            };
            self.target = Some(station.id());
            self.strategy = Some(BeelineStrategy::new(
                self.inner.position(),
                station.position(),
            ));
            self.en_route = true;
            self.events
                .push(PowerEvent::LowBatteryDiversion { station: station.id() });
        }

        if let Some(mut trip) = self.strategy.take() {
            trip.advance(self.inner.as_mut(), dt);

            // A picked-up payload travels attached during the diversion.
            if let Some(Payload { package, picked_up: true }) = self.inner.payload() {
                effects.push(Effect::PayloadMoved {
                    package,
                    position: self.inner.position(),
                    direction: self.inner.direction(),
                });
            }

            if trip.is_completed() {
                self.target = None;
                self.en_route = false;
                self.at_facility = true;
                self.charging = true;
                self.events.push(PowerEvent::DockedCharging);
            } else {
                self.strategy = Some(trip);
            }
        }
    }

    /// Idle: head to the nearest facility and trickle-charge while parked.
    fn standby_tick(&mut self, dt: f64, world: &WorldView<'_>) {
        if world.roster_ready() {
            if self.strategy.is_none() && !self.at_facility {
                if let Some(station) = nearest_station(world, self.inner.position()) {
                    self.target = Some(station.id());
                    self.strategy = Some(BeelineStrategy::new(
                        self.inner.position(),
                        station.position(),
                    ));
                    self.en_route = true;
                    self.events
                        .push(PowerEvent::StandbyDiversion { station: station.id() });
                }
            }

            if let Some(mut trip) = self.strategy.take() {
                trip.advance(self.inner.as_mut(), dt);
                if trip.is_completed() {
                    self.target = None;
                    self.en_route = false;
                    self.at_facility = true;
                    self.standing_by = true;
                    self.events.push(PowerEvent::StandbyDocked);
                } else {
                    self.strategy = Some(trip);
                }
            }
        }

        if self.at_facility {
            self.recharge(CHARGE_RATE * dt);
        }

        // No deadline pressure while idle: never red.
        let color = Color::from_charge(self.charge, false);
        self.inner.set_color(color);
    }

    /// Docked after a low-battery diversion: charge until exactly full.
    fn charging_tick(&mut self, dt: f64) {
        self.recharge(CHARGE_RATE * dt);
        // Clamping makes the full level exact, so >= only fires at 100.
        if self.charge >= FULL_CHARGE {
            self.charging = false;
            self.en_route = false;
            self.at_facility = false;
            self.events.push(PowerEvent::FullyCharged);
        }
    }
}

impl Entity for BatteryDecorator {
    // ── Delegation surface: pure pass-throughs, no battery semantics ──────

    fn id(&self) -> EntityId {
        self.inner.id()
    }

    fn position(&self) -> Vec3 {
        self.inner.position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.inner.set_position(position);
    }

    fn direction(&self) -> Vec3 {
        self.inner.direction()
    }

    fn set_direction(&mut self, direction: Vec3) {
        self.inner.set_direction(direction);
    }

    fn color(&self) -> Color {
        self.inner.color()
    }

    fn set_color(&mut self, color: Color) {
        self.inner.set_color(color);
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn speed(&self) -> f64 {
        self.inner.speed()
    }

    fn rotate(&mut self, angle: f64) {
        self.inner.rotate(angle);
    }

    fn details(&self) -> &Details {
        self.inner.details()
    }

    fn payload(&self) -> Option<Payload> {
        self.inner.payload()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    // ── The battery state machine ─────────────────────────────────────────

    /// One tick of the power state machine, evaluated in priority order:
    /// frozen-at-zero, normal discharge + inner tick, then the delivering /
    /// standby / charging branch.
    fn update(&mut self, dt: f64, world: &WorldView<'_>) -> Vec<Effect> {
        let mut effects = Vec::new();

        // Degenerate tick: nothing discharges, charges, or moves.
        if dt <= 0.0 {
            return effects;
        }

        // Depleted: frozen until external intervention.
        if self.charge <= 0.0 {
            return effects;
        }

        // Normal operation: drain and let the wrapped entity act.
        if !self.en_route && !self.charging {
            self.discharge(DISCHARGE_RATE * dt);
            effects.extend(self.inner.update(dt, world));
        }

        if !self.charging && !self.inner.is_available() {
            self.delivery_tick(dt, world, &mut effects);
        } else if self.inner.is_available() {
            self.standby_tick(dt, world);
        } else {
            self.charging_tick(dt);
        }

        effects
    }
}
