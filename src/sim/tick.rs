//! Fixed timestep simulation tick
//!
//! Advances the world by one 10 ms step: horizontal walk or scroll, vertical
//! walk, then one loop of any jump in flight.

use super::collision::block_right;
use super::jump::JumpStep;
use super::state::WorldState;
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    /// Jump was newly pressed this tick
    pub jump: bool,
}

impl TickInput {
    /// No key held and no jump requested
    pub fn is_idle(&self) -> bool {
        !(self.right || self.left || self.up || self.down || self.jump)
    }
}

/// What a tick did, for logging and the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A horizontal move was refused by an obstacle
    pub blocked: bool,
    /// The world scrolled under a stationary character
    pub scrolled: bool,
    pub jump_started: bool,
    pub jump_landed: bool,
}

/// Advance the world state by one fixed timestep
pub fn tick(state: &mut WorldState, input: &TickInput, tuning: &Tuning) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    step_horizontal(state, input, tuning, &mut outcome);
    step_vertical(state, input, tuning);

    if state.jump.active {
        if state.jump.step(&mut state.pos.y, tuning) == JumpStep::Landed {
            log::debug!("Jump landed at y={} (tick {})", state.pos.y, state.time_ticks);
            outcome.jump_landed = true;
        }
    } else if input.jump && state.jump.start(state.pos.y, tuning) {
        log::debug!("Jump started from y={} (tick {})", state.pos.y, state.time_ticks);
        outcome.jump_started = true;
    }

    outcome
}

/// Walk toward the scroll threshold, then scroll the world instead
fn step_horizontal(
    state: &mut WorldState,
    input: &TickInput,
    tuning: &Tuning,
    outcome: &mut TickOutcome,
) {
    let direction = match (input.right, input.left) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => return,
    };

    let obstacles = state.obstacles();
    if block_right(state.pos, input, &obstacles, &state.viewport, tuning) {
        outcome.blocked = true;
        return;
    }

    let vp = state.viewport;
    let fg = tuning.foreground_move_speed;
    let mg = tuning.midground_move_speed;
    let scroll = &mut state.scroll;

    // Tile index comes from the distance before this step
    scroll.ground_tile_index = (scroll.absolute_distance / vp.width()).ceil() as i32;
    scroll.absolute_distance += direction * fg;

    let x = &mut state.pos.x;
    if direction > 0.0 {
        if *x < vp.max_right() {
            *x = (*x + fg).min(vp.max_right());
        } else {
            scroll.background_offset -= mg;
            scroll.foreground_offset -= fg;
            outcome.scrolled = true;
        }
    } else if *x > vp.max_left() {
        *x = (*x - fg).max(vp.max_left());
    } else {
        scroll.background_offset += mg;
        scroll.foreground_offset += fg;
        outcome.scrolled = true;
    }

    if outcome.scrolled {
        log::trace!(
            "Scrolled: background={} foreground={}",
            scroll.background_offset,
            scroll.foreground_offset
        );
    }
}

/// Walk up or down, clamped to the vertical bounds
fn step_vertical(state: &mut WorldState, input: &TickInput, tuning: &Tuning) {
    let vp = state.viewport;
    let speed = tuning.foreground_move_speed;
    let y = &mut state.pos.y;

    if input.up && !input.down {
        if *y > vp.max_up() {
            *y = (*y - speed).max(vp.max_up());
        }
    } else if input.down && !input.up && *y < vp.max_down() {
        *y = (*y + speed).min(vp.max_down());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::block_left;
    use crate::sim::viewport::Viewport;
    use proptest::prelude::*;

    const RIGHT: TickInput = TickInput {
        right: true,
        left: false,
        up: false,
        down: false,
        jump: false,
    };
    const LEFT: TickInput = TickInput {
        right: false,
        left: true,
        up: false,
        down: false,
        jump: false,
    };
    const UP: TickInput = TickInput {
        right: false,
        left: false,
        up: true,
        down: false,
        jump: false,
    };
    const DOWN: TickInput = TickInput {
        right: false,
        left: false,
        up: false,
        down: true,
        jump: false,
    };
    const IDLE: TickInput = TickInput {
        right: false,
        left: false,
        up: false,
        down: false,
        jump: false,
    };

    fn new_world() -> WorldState {
        WorldState::new(Viewport::new(800.0, 600.0).unwrap())
    }

    /// Walk up out of the ground band so obstacles cannot block
    fn lifted_world(tuning: &Tuning) -> WorldState {
        let mut state = new_world();
        for _ in 0..9 {
            tick(&mut state, &UP, tuning);
        }
        assert_eq!(state.pos.y, 396.0);
        assert!(!state.is_grounded());
        state
    }

    fn run(state: &mut WorldState, input: &TickInput, ticks: usize, tuning: &Tuning) {
        for _ in 0..ticks {
            tick(state, input, tuning);
        }
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let tuning = Tuning::default();
        let mut state = new_world();
        let before = state.clone();
        for _ in 0..50 {
            let outcome = tick(&mut state, &IDLE, &tuning);
            assert_eq!(outcome, TickOutcome::default());
        }
        assert_eq!(state.pos, before.pos);
        assert_eq!(state.scroll, before.scroll);
        assert_eq!(state.jump, before.jump);
        assert_eq!(state.time_ticks, 50);
    }

    #[test]
    fn test_walk_right_stops_exactly_at_max_right() {
        let tuning = Tuning::default();
        let mut state = lifted_world(&tuning);
        assert_eq!(state.pos.x, 400.0);

        for _ in 0..34 {
            tick(&mut state, &RIGHT, &tuning);
            assert!(state.pos.x <= 600.0);
        }
        assert_eq!(state.pos.x, 600.0);
        assert_eq!(state.scroll.absolute_distance, 204.0);
        assert_eq!(state.scroll.foreground_offset, 0.0);
        assert_eq!(state.scroll.background_offset, 0.0);
    }

    #[test]
    fn test_world_scrolls_past_max_right() {
        let tuning = Tuning::default();
        let mut state = lifted_world(&tuning);
        run(&mut state, &RIGHT, 34, &tuning);

        for _ in 0..20 {
            let before = state.scroll.clone();
            let outcome = tick(&mut state, &RIGHT, &tuning);
            assert!(outcome.scrolled);
            assert_eq!(state.pos.x, 600.0);
            assert_eq!(state.scroll.foreground_offset, before.foreground_offset - 6.0);
            assert_eq!(state.scroll.background_offset, before.background_offset - 3.0);
        }
    }

    #[test]
    fn test_walk_left_and_scroll() {
        let tuning = Tuning::default();
        let mut state = lifted_world(&tuning);
        run(&mut state, &LEFT, 34, &tuning);
        assert_eq!(state.pos.x, 200.0);
        assert_eq!(state.scroll.foreground_offset, 0.0);

        let outcome = tick(&mut state, &LEFT, &tuning);
        assert!(outcome.scrolled);
        assert_eq!(state.pos.x, 200.0);
        assert_eq!(state.scroll.foreground_offset, 6.0);
        assert_eq!(state.scroll.background_offset, 3.0);
        assert_eq!(state.scroll.absolute_distance, -210.0);
    }

    #[test]
    fn test_ground_tile_index_lags_one_tick() {
        let tuning = Tuning::default();
        let mut state = lifted_world(&tuning);

        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.scroll.absolute_distance, 6.0);
        assert_eq!(state.scroll.ground_tile_index, 0);

        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.scroll.ground_tile_index, 1);

        // 134 ticks walk 804 px; the index still reflects 798
        run(&mut state, &RIGHT, 132, &tuning);
        assert_eq!(state.scroll.absolute_distance, 804.0);
        assert_eq!(state.scroll.ground_tile_index, 1);
        tick(&mut state, &RIGHT, &tuning);
        assert_eq!(state.scroll.ground_tile_index, 2);
    }

    #[test]
    fn test_opposing_presses_cancel() {
        let tuning = Tuning::default();
        let mut state = new_world();
        let input = TickInput {
            right: true,
            left: true,
            up: true,
            down: true,
            jump: false,
        };
        run(&mut state, &input, 10, &tuning);
        assert_eq!(state.pos.x, 400.0);
        assert_eq!(state.pos.y, 450.0);
        assert_eq!(state.scroll.absolute_distance, 0.0);
    }

    #[test]
    fn test_vertical_walk_is_clamped() {
        let tuning = Tuning::default();
        let mut state = new_world();
        run(&mut state, &UP, 60, &tuning);
        assert_eq!(state.pos.y, 150.0);
        run(&mut state, &DOWN, 60, &tuning);
        assert_eq!(state.pos.y, 450.0);
    }

    #[test]
    fn test_grounded_walk_right_hits_obstacle() {
        let tuning = Tuning::default();
        let mut state = new_world();
        let mut blocked = false;
        for _ in 0..40 {
            blocked |= tick(&mut state, &RIGHT, &tuning).blocked;
        }
        assert!(blocked);
        assert_eq!(state.pos.x, 586.0);
        assert_eq!(state.scroll.foreground_offset, 0.0);
        assert_eq!(state.scroll.absolute_distance, 186.0);
    }

    #[test]
    fn test_left_walk_passes_through_far_obstacle() {
        let tuning = Tuning::default();
        let mut state = new_world();
        let mut stricter_check_fired = false;

        for _ in 0..150 {
            let obstacles = state.obstacles();
            stricter_check_fired |=
                block_left(state.pos, &LEFT, &obstacles, &state.viewport, &tuning);
            let outcome = tick(&mut state, &LEFT, &tuning);
            assert!(!outcome.blocked);
        }

        assert!(stricter_check_fired);
        assert_eq!(state.pos.x, 200.0);
        assert_eq!(state.scroll.foreground_offset, 6.0 * 116.0);
    }

    #[test]
    fn test_jump_runs_to_completion_without_keys() {
        let tuning = Tuning::default();
        let mut state = new_world();

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        let outcome = tick(&mut state, &jump, &tuning);
        assert!(outcome.jump_started);
        assert!(state.jump.active);
        assert_eq!(state.pos.y, 450.0);

        let mut ticks = 0;
        let mut landed = false;
        while !landed {
            let outcome = tick(&mut state, &IDLE, &tuning);
            landed = outcome.jump_landed;
            ticks += 1;
            assert!(state.pos.y <= 450.0);
            assert_eq!(state.pos.x, 400.0);
            assert!(ticks <= 36);
        }

        assert_eq!(ticks, 36);
        assert!(!state.jump.active);
        assert_eq!(state.jump.velocity, 0.0);
        assert_eq!(state.pos.y, 450.0);
    }

    #[test]
    fn test_jump_request_ignored_mid_air() {
        let tuning = Tuning::default();
        let mut state = new_world();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, &tuning);
        run(&mut state, &IDLE, 5, &tuning);
        let loops = state.jump.loop_count;

        let outcome = tick(&mut state, &jump, &tuning);
        assert!(!outcome.jump_started);
        assert_eq!(state.jump.loop_count, loops + 1);
        assert_eq!(state.jump.ground, 450.0);
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let tuning = Tuning::default();
        let mut state = new_world();
        run(&mut state, &RIGHT, 40, &tuning);
        assert_eq!(state.pos.x, 586.0);

        let jump_right = TickInput {
            jump: true,
            ..RIGHT
        };
        tick(&mut state, &jump_right, &tuning);
        run(&mut state, &RIGHT, 10, &tuning);

        assert_eq!(state.pos.x, 600.0);
        assert!(state.scroll.foreground_offset < 0.0);
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(right, left, up, down, jump)| TickInput {
                right,
                left,
                up,
                down,
                jump,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_character_stays_in_bounds(inputs in prop::collection::vec(arb_input(), 1..400)) {
            let tuning = Tuning::default();
            let mut state = new_world();
            let vp = state.viewport;
            for input in &inputs {
                tick(&mut state, input, &tuning);
                prop_assert!(state.pos.x >= vp.max_left() && state.pos.x <= vp.max_right());
                prop_assert!(state.pos.y <= vp.max_down());
            }
        }

        #[test]
        fn prop_walking_without_jumps_stays_in_vertical_bounds(
            inputs in prop::collection::vec(arb_input(), 1..400)
        ) {
            let tuning = Tuning::default();
            let mut state = new_world();
            let vp = state.viewport;
            for input in &inputs {
                let input = TickInput { jump: false, ..*input };
                tick(&mut state, &input, &tuning);
                prop_assert!(state.pos.y >= vp.max_up() && state.pos.y <= vp.max_down());
            }
        }

        #[test]
        fn prop_jump_always_terminates(
            gravity in 0.2f32..3.0,
            launch_velocity in 1.0f32..12.0,
            jump_time_step in 0.1f32..1.0,
        ) {
            let tuning = Tuning { gravity, launch_velocity, jump_time_step, ..Tuning::default() };
            let mut state = new_world();
            let jump = TickInput { jump: true, ..Default::default() };
            tick(&mut state, &jump, &tuning);

            let bound = (2.0 * launch_velocity / (gravity * jump_time_step)).ceil() as u32 + 3;
            let mut ticks = 0;
            while state.jump.active {
                tick(&mut state, &IDLE, &tuning);
                ticks += 1;
                prop_assert!(ticks <= bound);
                prop_assert!(state.pos.y <= state.jump.ground.max(450.0));
            }
            prop_assert_eq!(state.jump.velocity, 0.0);
        }
    }
}
