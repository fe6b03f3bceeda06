//! Scripted input for running the simulation without a browser

use crate::sim::{TickInput, TickOutcome, WorldState, tick};
use crate::tuning::Tuning;

/// Hold `input` for `ticks` steps. A jump request only fires on the first.
#[derive(Debug, Clone, Copy)]
pub struct ScriptStep {
    pub label: &'static str,
    pub input: TickInput,
    pub ticks: u32,
}

/// Totals for one script run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub ticks: u64,
    pub blocked_ticks: u64,
    pub scrolled_ticks: u64,
    pub jumps_started: u32,
    pub jumps_landed: u32,
}

impl ScriptReport {
    fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        self.blocked_ticks += outcome.blocked as u64;
        self.scrolled_ticks += outcome.scrolled as u64;
        self.jumps_started += outcome.jump_started as u32;
        self.jumps_landed += outcome.jump_landed as u32;
    }
}

/// Walk off the ground, run to the scroll threshold and beyond, then jump
pub fn demo_script() -> Vec<ScriptStep> {
    let idle = TickInput::default();
    vec![
        ScriptStep {
            label: "walk right into the obstacle",
            input: TickInput {
                right: true,
                ..idle
            },
            ticks: 40,
        },
        ScriptStep {
            label: "jump over it",
            input: TickInput {
                right: true,
                jump: true,
                ..idle
            },
            ticks: 30,
        },
        ScriptStep {
            label: "climb and keep scrolling",
            input: TickInput {
                right: true,
                up: true,
                ..idle
            },
            ticks: 60,
        },
        ScriptStep {
            label: "come back down",
            input: TickInput { down: true, ..idle },
            ticks: 60,
        },
    ]
}

/// Run a script to the end, draining any jump still in flight
pub fn run_script(state: &mut WorldState, script: &[ScriptStep], tuning: &Tuning) -> ScriptReport {
    let mut report = ScriptReport::default();

    for step in script {
        log::info!("{} ({} ticks)", step.label, step.ticks);
        for i in 0..step.ticks {
            let input = TickInput {
                jump: step.input.jump && i == 0,
                ..step.input
            };
            let outcome = tick(state, &input, tuning);
            report.record(&outcome);
        }
    }

    let idle = TickInput::default();
    while state.jump.active {
        let outcome = tick(state, &idle, tuning);
        report.record(&outcome);
    }

    report
}
