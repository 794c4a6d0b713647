//! Simulation engine: the clock around the radar controller.
//!
//! `SimulationEngine` owns the controller, the simulation time and the seeded
//! RNG, processes queued commands at tick boundaries, decides when the run is
//! over and hands each tick's snapshot and events to the caller. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skyshield_core::commands::SimCommand;
use skyshield_core::config::ScenarioConfig;
use skyshield_core::enums::{EndReason, SimPhase};
use skyshield_core::error::SimResult;
use skyshield_core::events::{SimEvent, TickEvent};
use skyshield_core::state::SimSnapshot;
use skyshield_core::types::SimTime;

use crate::controller::RadarController;
use crate::world_setup;

/// Everything one tick produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub snapshot: SimSnapshot,
    pub events: Vec<SimEvent>,
}

/// The simulation engine. Owns the controller and all run state.
pub struct SimulationEngine {
    controller: RadarController,
    time: SimTime,
    phase: SimPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    /// Events raised outside a tick (manifest spawns) waiting for the next report.
    pending_events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Validate the scenario, draw the manifest and populate the world.
    pub fn new(config: ScenarioConfig) -> SimResult<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut controller = RadarController::new(config)?;
        let mut pending_events = Vec::new();
        world_setup::populate(&mut controller, &mut rng, &mut pending_events)?;

        log::info!(
            "scenario ready: seed {}, {} threats, sensor radius {}",
            controller.config().seed,
            controller.threat_count(),
            controller.config().sensor_radius
        );

        Ok(Self {
            controller,
            time: SimTime::default(),
            phase: SimPhase::Ready,
            rng,
            command_queue: VecDeque::new(),
            pending_events,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting report.
    ///
    /// Once the run has ended this is a no-op that reports no events.
    pub fn tick(&mut self) -> TickReport {
        if self.phase.is_ended() {
            return self.report(Vec::new());
        }

        let mut events = std::mem::take(&mut self.pending_events);
        self.process_commands(&mut events);

        if matches!(self.phase, SimPhase::Ready | SimPhase::Running) {
            self.phase = SimPhase::Running;
            self.time.advance(self.controller.config().tick_secs);
            self.controller.step(self.time.tick, &mut events);
            self.check_termination(&mut events);
        }

        self.report(events)
    }

    /// Tick until the run ends and return every event stamped with its tick.
    ///
    /// Returns early if the engine is paused with nothing left in the command
    /// queue, since no further tick could change anything.
    pub fn run_to_completion(&mut self) -> Vec<TickEvent> {
        let mut event_log = Vec::new();
        while !self.phase.is_ended() {
            if self.phase == SimPhase::Paused && self.command_queue.is_empty() {
                log::warn!("run_to_completion stopped: engine paused with no commands queued");
                break;
            }
            let report = self.tick();
            let tick = report.snapshot.time.tick;
            event_log.extend(report.events.into_iter().map(|event| TickEvent { tick, event }));
        }
        event_log
    }

    /// Get the current phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn controller(&self) -> &RadarController {
        &self.controller
    }

    pub fn config(&self) -> &ScenarioConfig {
        self.controller.config()
    }

    /// Snapshot of the current state without ticking.
    pub fn snapshot(&self) -> SimSnapshot {
        self.controller.snapshot(&self.time, self.phase)
    }

    fn report(&self, events: Vec<SimEvent>) -> TickReport {
        TickReport {
            snapshot: self.snapshot(),
            events,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self, events: &mut Vec<SimEvent>) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, events);
            if self.phase.is_ended() {
                self.command_queue.clear();
                return;
            }
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand, events: &mut Vec<SimEvent>) {
        match command {
            SimCommand::SpawnThreat { class, start } => {
                let launch = world_setup::resolve(
                    &mut self.rng,
                    self.controller.config(),
                    class,
                    start,
                    None,
                );
                if let Err(err) = self.controller.spawn_threat(
                    launch.class,
                    launch.start,
                    launch.speed,
                    self.time.tick,
                    events,
                ) {
                    log::warn!("spawn command rejected: {err}");
                }
            }
            SimCommand::Pause => {
                if matches!(self.phase, SimPhase::Ready | SimPhase::Running) {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::Stop => self.end(EndReason::StopRequested, events),
        }
    }

    /// End the run once every threat is resolved or the tick budget is spent.
    ///
    /// A world that never had a threat keeps running: spawn commands may still
    /// arrive.
    fn check_termination(&mut self, events: &mut Vec<SimEvent>) {
        let resolved = self.controller.score().threats_spawned > 0
            && self.controller.threat_count() == 0;
        if resolved {
            self.end(EndReason::AllThreatsResolved, events);
        } else if self.time.tick >= self.controller.config().max_ticks {
            self.end(EndReason::TickBudgetExhausted, events);
        }
    }

    fn end(&mut self, reason: EndReason, events: &mut Vec<SimEvent>) {
        let score = self.controller.score();
        log::info!(
            "simulation ended at tick {}: {reason:?} ({} intercepted, {} arrived)",
            self.time.tick,
            score.threats_intercepted,
            score.threats_arrived
        );
        self.phase = SimPhase::Ended(reason);
        events.push(SimEvent::SimulationEnded { reason });
    }
}
