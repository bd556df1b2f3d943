//! Stall-able systolic pipeline for valid-ready channels.
//!
//! The pipeline is a chain of `depth + 1` registers. Register 0 latches the input channel, register `k + 1` latches
//! stage `k`'s logic applied to register `k`, and register `depth` drives the output channel. All registers share one
//! enable: when the output is valid but not taken, the whole chain holds.

use std::fmt::Debug;
use std::iter;

use arrayvec::ArrayVec;

use crate::*;

/// Combinational logic between two pipeline registers.
pub trait StageLogic: Debug {
    /// Value carried by every register.
    type Value: Clone + Debug + Default;

    /// Computes the value latched by register `index + 1` from the value held by register `index`.
    fn eval(&self, index: usize, value: &Self::Value) -> Self::Value;
}

/// Registers of a pipeline with capacity `N`.
pub type Registers<V, const N: usize> = ArrayVec<Valid<V>, N>;

/// Pipeline of `depth` stages.
///
/// `N` bounds the number of registers; it is a property of the logic (e.g. the size of its constant tables), while
/// `depth` is chosen per instance.
#[derive(Debug, Clone)]
pub struct Pipeline<L: StageLogic, const N: usize> {
    logic: L,
    depth: usize,
}

impl<L: StageLogic, const N: usize> Pipeline<L, N> {
    /// Creates a pipeline of `depth` stages.
    ///
    /// # Panics
    ///
    /// Panics if `depth + 1` registers do not fit in `N`.
    pub fn new(logic: L, depth: usize) -> Self {
        assert!(depth < N, "pipeline of depth {} needs more than {} registers", depth, N);
        Self { logic, depth }
    }

    /// Returns the stage logic.
    pub fn stage_logic(&self) -> &L { &self.logic }

    /// Number of stages.
    pub fn depth(&self) -> usize { self.depth }

    /// Unstalled cycles from the transfer of an input to the transfer of its output.
    pub fn latency(&self) -> usize { self.depth + 1 }

    /// Returns the register driving the output channel.
    pub fn head<'s>(&self, state: &'s Registers<L::Value, N>) -> &'s Valid<L::Value> { &state[self.depth] }

    /// Returns whether the pipeline holds in a cycle where the consumer presents `o_bwd`.
    pub fn is_stalled(&self, state: &Registers<L::Value, N>, o_bwd: Ready) -> bool {
        self.head(state).valid && !o_bwd.ready
    }

    /// Number of valid registers.
    pub fn occupancy(state: &Registers<L::Value, N>) -> usize { state.iter().filter(|reg| reg.valid).count() }
}

impl<L: StageLogic, const N: usize> Fsm for Pipeline<L, N> {
    type In = L::Value;
    type Out = L::Value;
    type State = Registers<L::Value, N>;

    fn init(&self) -> Self::State { iter::repeat_with(Valid::invalid).take(self.depth + 1).collect() }

    fn logic(
        &self, i_fwd: Valid<L::Value>, o_bwd: Ready, state: &Self::State,
    ) -> (Valid<L::Value>, Ready, Self::State) {
        let o_fwd = self.head(state).clone();
        let stall = self.is_stalled(state, o_bwd);
        let i_bwd = Ready::new(!stall);

        let state_next = if stall {
            state.clone()
        } else {
            let input = Valid::new(i_fwd.fire(i_bwd), i_fwd.inner);
            let advanced = state[..self.depth]
                .iter()
                .enumerate()
                .map(|(index, reg)| Valid::new(reg.valid, self.logic.eval(index, &reg.inner)));
            iter::once(input).chain(advanced).collect()
        };

        (o_fwd, i_bwd, state_next)
    }
}
