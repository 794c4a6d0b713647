//! Radar controller: owns the live threats and interceptors and runs one
//! tick of detection, launch and collision resolution.
//!
//! Per-tick order is fixed: movement, arrival, detection + launch,
//! interception, cleanup. Entities are only despawned in the final cleanup
//! pass; earlier passes mark state or queue removals.

use std::collections::HashMap;

use hecs::{Entity, World};

use skyshield_core::config::ScenarioConfig;
use skyshield_core::enums::{SimPhase, ThreatClass, ThreatState};
use skyshield_core::error::SimResult;
use skyshield_core::events::SimEvent;
use skyshield_core::state::{ScoreView, SimSnapshot};
use skyshield_core::types::{Position, SimTime, ThreatId};

use crate::interceptor::Interceptor;
use crate::systems;
use crate::systems::fire_control::Launcher;
use crate::systems::radar::Radar;
use crate::threat::Threat;

/// Running score state tracked by the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub threats_spawned: u32,
    pub threats_intercepted: u32,
    pub threats_arrived: u32,
    pub interceptors_launched: u32,
    pub interceptors_expired: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            threats_spawned: self.threats_spawned,
            threats_intercepted: self.threats_intercepted,
            threats_arrived: self.threats_arrived,
            interceptors_launched: self.interceptors_launched,
            interceptors_expired: self.interceptors_expired,
        }
    }
}

/// The radar/launcher controller. Sole writer of the entity collections.
pub struct RadarController {
    world: World,
    config: ScenarioConfig,
    radar: Radar,
    next_threat_id: u32,
    next_interceptor_id: u32,
    despawn_buffer: Vec<Entity>,
    score: ScoreState,
}

impl RadarController {
    /// Create an empty controller. The config is validated here and is
    /// read-only from then on.
    pub fn new(config: ScenarioConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            radar: Radar::from_config(&config),
            config,
            next_threat_id: 0,
            next_interceptor_id: 0,
            despawn_buffer: Vec::new(),
            score: ScoreState::default(),
        })
    }

    /// Add a threat heading for the protected point.
    pub fn spawn_threat(
        &mut self,
        class: ThreatClass,
        start: Position,
        speed: f64,
        current_tick: u64,
        events: &mut Vec<SimEvent>,
    ) -> SimResult<ThreatId> {
        let threat_id = ThreatId(self.next_threat_id);
        let threat = Threat::new(
            threat_id,
            class,
            start,
            self.config.target,
            speed,
            current_tick,
        )?;
        self.next_threat_id += 1;
        self.world.spawn((threat,));
        self.score.threats_spawned += 1;

        log::debug!("{threat_id} ({class:?}) spawned at {start}, speed {speed:.3}");
        events.push(SimEvent::ThreatSpawned {
            threat_id,
            class,
            position: start,
            speed,
        });
        Ok(threat_id)
    }

    /// Run one tick. Events are appended in emission order.
    pub fn step(&mut self, current_tick: u64, events: &mut Vec<SimEvent>) {
        let dt = self.config.tick_secs;

        // 1. Movement
        systems::movement::run(&mut self.world, dt);
        // 2. Arrival
        systems::arrival::run(
            &mut self.world,
            &self.config.target,
            self.config.arrival_threshold,
            &mut self.score,
            events,
        );
        // 3. Detection + launch
        self.radar.advance_sweep(dt);
        self.detect_and_launch(current_tick, events);
        // 4. Interception, expiry, orphans
        systems::intercept::run(
            &mut self.world,
            self.config.interception_threshold,
            self.config.interceptor_max_range,
            &mut self.score,
            events,
            &mut self.despawn_buffer,
        );
        // 5. Deferred removal
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("internal invariant violation at tick {current_tick}: {violation}");
            }
        }
        log::trace!(
            "tick {current_tick}: {} threats, {} interceptors",
            self.threat_count(),
            self.interceptor_count()
        );
    }

    /// Detection and launch for the current radar state. Idempotent within a
    /// tick: a second call finds every detected threat already engaged.
    pub fn detect_and_launch(&mut self, current_tick: u64, events: &mut Vec<SimEvent>) {
        let contacts = systems::radar::detection::run(&self.world, &self.radar);
        let launcher = Launcher {
            position: self.config.launcher,
            interceptor_speed: self.config.interceptor_speed,
        };
        systems::fire_control::run(
            &mut self.world,
            &contacts,
            &launcher,
            &mut self.next_interceptor_id,
            &mut self.score,
            events,
            current_tick,
        );
    }

    /// Every engaged threat has exactly one interceptor, and no threat has more.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut per_threat: HashMap<ThreatId, u32> = HashMap::new();
        for (_, interceptor) in self.world.query::<&Interceptor>().iter() {
            *per_threat.entry(interceptor.threat_id).or_default() += 1;
        }

        if let Some((threat_id, count)) = per_threat.iter().find(|(_, count)| **count > 1) {
            return Err(format!("{threat_id} has {count} interceptors"));
        }

        for (_, threat) in self.world.query::<&Threat>().iter() {
            let pursued = per_threat.contains_key(&threat.id);
            match threat.state {
                ThreatState::Engaged if !pursued => {
                    return Err(format!("{} is engaged without an interceptor", threat.id));
                }
                ThreatState::Unengaged if pursued => {
                    return Err(format!("{} is pursued but not engaged", threat.id));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Number of threats still in the world.
    pub fn threat_count(&self) -> usize {
        self.world.query::<&Threat>().iter().count()
    }

    /// Number of interceptors still in the world.
    pub fn interceptor_count(&self) -> usize {
        self.world.query::<&Interceptor>().iter().count()
    }

    /// Build a read-only snapshot at the given time and phase.
    pub fn snapshot(&self, time: &SimTime, phase: SimPhase) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            time,
            phase,
            &self.config.target,
            &self.radar,
            &self.score,
        )
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn radar(&self) -> &Radar {
        &self.radar
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to stage odd geometry.
    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
