//! Cycle-level simulation with a single clock.

use tracing::{debug, trace};

use crate::*;

/// Signals observed in one clock cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle<O> {
    /// Cycle number, counted from the last reset.
    pub cycle: u64,

    /// Output forward signals.
    pub o_fwd: Valid<O>,

    /// Input backward signal.
    pub i_bwd: Ready,

    /// An input was transferred.
    pub admitted: bool,

    /// An output was transferred.
    pub emitted: bool,
}

impl<O> Cycle<O> {
    /// Returns whether the output was presented but not taken.
    pub fn stalled(&self) -> bool { self.o_fwd.valid && !self.emitted }

    /// Returns the transferred output, if any.
    pub fn emitted_value(self) -> Option<O> {
        if self.emitted {
            Some(self.o_fwd.inner)
        } else {
            None
        }
    }
}

/// Simulator of an FSM.
///
/// The simulator is the only owner of the FSM's registers: each call to [`Sim::cycle`] evaluates the logic with the
/// current registers and then commits the next-cycle registers, as a clock edge does.
#[derive(Debug)]
pub struct Sim<M: Fsm> {
    module: M,
    state: M::State,
    cycle: u64,
}

impl<M: Fsm> Sim<M> {
    /// Creates a simulator with the module's registers at their initial value.
    pub fn new(module: M) -> Self {
        let state = module.init();
        Self { module, state, cycle: 0 }
    }

    /// Returns the simulated module.
    pub fn module(&self) -> &M { &self.module }

    /// Returns the current registers.
    pub fn state(&self) -> &M::State { &self.state }

    /// Number of cycles since the last reset.
    pub fn cycles(&self) -> u64 { self.cycle }

    /// Resets the registers. In-flight data is discarded.
    pub fn reset(&mut self) {
        debug!(cycle = self.cycle, "reset");
        self.state = self.module.init();
        self.cycle = 0;
    }

    /// Simulates one cycle: presents `i_fwd` and `o_bwd`, samples the module's outputs, and commits the next state.
    pub fn cycle(&mut self, i_fwd: Valid<M::In>, o_bwd: Ready) -> Cycle<M::Out> {
        let i_valid = i_fwd.valid;
        let (o_fwd, i_bwd, state_next) = self.module.logic(i_fwd, o_bwd, &self.state);
        let admitted = i_valid && i_bwd.ready;
        let emitted = o_fwd.fire(o_bwd);

        trace!(cycle = self.cycle, admitted, emitted, stalled = o_fwd.valid && !o_bwd.ready, "cycle");

        self.state = state_next;
        let cycle = Cycle { cycle: self.cycle, o_fwd, i_bwd, admitted, emitted };
        self.cycle += 1;
        cycle
    }

    /// Streams `inputs` through the module and collects the transferred outputs with the cycle they left in.
    ///
    /// Each input is presented until it is admitted, back-to-back. `out_ready` gives the output ready signal for a
    /// cycle number. The module must produce one output per admitted input; the run ends when every admitted input
    /// has left or after `max_cycles` cycles.
    pub fn run<I, R>(&mut self, inputs: I, mut out_ready: R, max_cycles: u64) -> Vec<(u64, M::Out)>
    where
        I: IntoIterator<Item = M::In>,
        R: FnMut(u64) -> bool,
        M::In: Clone + Default,
    {
        let mut pending = inputs.into_iter().peekable();
        let mut admitted = 0;
        let mut outputs = Vec::new();

        for _ in 0..max_cycles {
            if pending.peek().is_none() && outputs.len() == admitted {
                break;
            }

            let i_fwd = Valid::from(pending.peek().cloned());
            let o_bwd = Ready::from(out_ready(self.cycle));
            let cycle = self.cycle(i_fwd, o_bwd);

            if cycle.admitted {
                let _ = pending.next();
                admitted += 1;
            }
            let at = cycle.cycle;
            let output = crate::some_or!(cycle.emitted_value(), continue);
            outputs.push((at, output));
        }

        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Negate;

    impl StageLogic for Negate {
        type Value = i32;

        fn eval(&self, _index: usize, value: &i32) -> i32 { -value }
    }

    #[test]
    fn cycle_reports_transfers() {
        let mut sim = Sim::new(Pipeline::<Negate, 4>::new(Negate, 1));

        let first = sim.cycle(Valid::valid(5), Ready::new(false));
        assert!(first.admitted);
        assert!(!first.stalled());

        let _ = sim.cycle(Valid::invalid(), Ready::new(false));
        let held = sim.cycle(Valid::valid(6), Ready::new(false));
        assert!(held.stalled());
        assert!(!held.admitted);
        assert_eq!(held.o_fwd, Valid::valid(-5));

        let taken = sim.cycle(Valid::invalid(), Ready::new(true));
        assert_eq!(taken.emitted_value(), Some(-5));
        assert_eq!(sim.cycles(), 4);

        sim.reset();
        assert_eq!(sim.cycles(), 0);
        assert!(sim.state().iter().all(|reg| !reg.valid));
    }

    #[test]
    fn run_preserves_order_under_backpressure() {
        let mut sim = Sim::new(Pipeline::<Negate, 4>::new(Negate, 2));
        let outputs = sim.run(1..=5, |cycle| cycle % 3 == 0, 100);
        let values = outputs.iter().map(|(_, value)| *value).collect::<Vec<_>>();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert!(outputs.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
