//! Finite state machine (Mealy machine).

use std::fmt::Debug;

use crate::*;

/// Finite state machine (Mealy machine) with a valid-ready input channel and a valid-ready output channel.
///
/// The machine is described by [`Fsm::logic`], which generates (1) the current-cycle output forward signals,
/// (2) the current-cycle input backward signal and (3) the next-cycle state, from the input forward signals,
/// the output backward signal and the current-cycle state. The state is committed at the clock edge by the driver
/// (see [`Sim`]).
pub trait Fsm: Debug {
    /// Input payload.
    type In;

    /// Output payload.
    type Out;

    /// Registers.
    type State: Clone + Debug;

    /// Initial value of registers in the FSM.
    fn init(&self) -> Self::State;

    /// Combinational logic of the FSM.
    fn logic(
        &self, i_fwd: Valid<Self::In>, o_bwd: Ready, state: &Self::State,
    ) -> (Valid<Self::Out>, Ready, Self::State);
}

/// Stateless combinational logic.
pub trait Comb: Debug {
    /// Input value.
    type I;

    /// Output value.
    type O;

    /// Evaluates the logic.
    fn eval(&self, input: Self::I) -> Self::O;
}

/// FSM whose input data lines pass through combinational logic first.
///
/// The logic adds no register, so it adds no latency and does not touch the handshake.
#[derive(Debug, Clone)]
pub struct MapInput<M, C> {
    inner: M,
    comb: C,
}

impl<M, C> MapInput<M, C> {
    /// Returns the wrapped FSM.
    pub fn inner(&self) -> &M { &self.inner }

}

impl<M: Fsm, C: Comb<O = M::In>> Fsm for MapInput<M, C> {
    type In = C::I;
    type Out = M::Out;
    type State = M::State;

    fn init(&self) -> Self::State { self.inner.init() }

    fn logic(&self, i_fwd: Valid<C::I>, o_bwd: Ready, state: &Self::State) -> (Valid<M::Out>, Ready, Self::State) {
        self.inner.logic(i_fwd.map_inner(|input| self.comb.eval(input)), o_bwd, state)
    }
}

/// FSM whose output data lines pass through combinational logic.
#[derive(Debug, Clone)]
pub struct MapOutput<M, C> {
    inner: M,
    comb: C,
}

impl<M, C> MapOutput<M, C> {
    /// Returns the wrapped FSM.
    pub fn inner(&self) -> &M { &self.inner }

}

impl<M: Fsm, C: Comb<I = M::Out>> Fsm for MapOutput<M, C> {
    type In = M::In;
    type Out = C::O;
    type State = M::State;

    fn init(&self) -> Self::State { self.inner.init() }

    fn logic(&self, i_fwd: Valid<M::In>, o_bwd: Ready, state: &Self::State) -> (Valid<C::O>, Ready, Self::State) {
        let (o_fwd, i_bwd, state_next) = self.inner.logic(i_fwd, o_bwd, state);
        (o_fwd.map_inner(|output| self.comb.eval(output)), i_bwd, state_next)
    }
}

/// Combinators for FSMs.
pub trait FsmExt: Fsm + Sized {
    /// Feeds the input through `comb` before it reaches `self`.
    fn map_input<C: Comb<O = Self::In>>(self, comb: C) -> MapInput<Self, C> { MapInput { inner: self, comb } }

    /// Feeds the output of `self` through `comb`.
    fn map_output<C: Comb<I = Self::Out>>(self, comb: C) -> MapOutput<Self, C> { MapOutput { inner: self, comb } }
}

impl<M: Fsm> FsmExt for M {}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-register buffer that holds its value until it is taken.
    #[derive(Debug)]
    struct Slice;

    impl Fsm for Slice {
        type In = u32;
        type Out = u32;
        type State = Valid<u32>;

        fn init(&self) -> Self::State { Valid::invalid() }

        fn logic(&self, i_fwd: Valid<u32>, o_bwd: Ready, state: &Valid<u32>) -> (Valid<u32>, Ready, Valid<u32>) {
            let remaining = state.valid && !o_bwd.ready;
            let state_next = if remaining { *state } else { Valid::new(i_fwd.valid, i_fwd.inner) };
            (*state, Ready::new(!remaining), state_next)
        }
    }

    #[derive(Debug)]
    struct Double;

    impl Comb for Double {
        type I = u32;
        type O = u32;

        fn eval(&self, input: u32) -> u32 { input * 2 }
    }

    #[derive(Debug)]
    struct Describe;

    impl Comb for Describe {
        type I = u32;
        type O = String;

        fn eval(&self, input: u32) -> String { format!("#{}", input) }
    }

    #[test]
    fn combinators_keep_the_handshake() {
        let m = Slice.map_input(Double).map_output(Describe);
        let s0 = m.init();

        let (o_fwd, i_bwd, s1) = m.logic(Valid::valid(4), Ready::new(true), &s0);
        assert!(!o_fwd.valid);
        assert!(i_bwd.ready);

        let (o_fwd, i_bwd, s2) = m.logic(Valid::invalid(), Ready::new(false), &s1);
        assert_eq!(o_fwd, Valid::valid("#8".to_string()));
        assert!(!i_bwd.ready);
        assert_eq!(s2, s1);
    }
}
