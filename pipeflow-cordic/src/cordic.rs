//! CORDIC core: preprocessor, stage pipeline and output stage behind one valid-ready interface.

use pipeflow::*;
use tracing::debug;

use crate::*;

/// Stage pipeline of a CORDIC core.
pub type CordicPipeline = Pipeline<CordicStage, PIPELINE_REGISTERS>;

/// Module simulated by a CORDIC core.
pub type CordicModule<P, F> = MapOutput<MapInput<CordicPipeline, P>, F>;

/// CORDIC core with preprocessor `P` and output stage `F`.
///
/// The core owns its registers and is advanced by [`CordicCore::cycle`], one clock cycle per call. An input is
/// transferred when it is valid and the core is ready; an output is transferred when it is valid and the consumer is
/// ready. When the output is valid but not taken, every register holds and the core is not ready.
#[derive(Debug)]
pub struct CordicCore<P: Comb<O = StageState>, F: Comb<I = StageState>> {
    config: CordicConfig,
    sim: Sim<CordicModule<P, F>>,
}

impl<P: Comb<O = StageState>, F: Comb<I = StageState>> CordicCore<P, F> {
    pub(crate) fn from_parts(
        config: CordicConfig, table: ConstantTable, mode: Mode, preprocessor: P, output: F,
    ) -> Self {
        let pipeline = CordicPipeline::new(CordicStage::new(mode, table), config.iterations);
        debug!(
            ?mode,
            xy_width = config.xy_width,
            angle_width = config.angle_width,
            iterations = config.iterations,
            guard_bits = config.guard_bits,
            gain_comp = config.gain_comp,
            latency = pipeline.latency(),
            "built cordic core"
        );

        let module = pipeline.map_input(preprocessor).map_output(output);
        Self { config, sim: Sim::new(module) }
    }

    fn pipeline(&self) -> &CordicPipeline { self.sim.module().inner().inner() }

    /// Returns the configuration.
    pub fn config(&self) -> &CordicConfig { &self.config }

    /// Returns the constant table.
    pub fn table(&self) -> &ConstantTable { self.pipeline().stage_logic().table() }

    /// Returns the mode.
    pub fn mode(&self) -> Mode { self.pipeline().stage_logic().mode() }

    /// Unstalled cycles from the transfer of an input to the transfer of its output: one for the preprocessor and
    /// one per iteration.
    pub fn latency(&self) -> usize { self.pipeline().latency() }

    /// Number of samples in flight.
    pub fn occupancy(&self) -> usize { CordicPipeline::occupancy(self.sim.state()) }

    /// Number of cycles since the last reset.
    pub fn cycles(&self) -> u64 { self.sim.cycles() }

    /// Returns whether the core holds in a cycle where the consumer presents `o_bwd`. The core is ready for input
    /// exactly when it does not hold.
    pub fn is_stalled(&self, o_bwd: Ready) -> bool { self.pipeline().is_stalled(self.sim.state(), o_bwd) }

    /// Discards every sample in flight.
    pub fn reset(&mut self) { self.sim.reset() }

    /// Simulates one clock cycle.
    pub fn cycle(&mut self, i_fwd: Valid<P::I>, o_bwd: Ready) -> Cycle<F::O> { self.sim.cycle(i_fwd, o_bwd) }

    /// Streams `inputs` through the core. See [`Sim::run`].
    pub fn run<I, R>(&mut self, inputs: I, out_ready: R, max_cycles: u64) -> Vec<(u64, F::O)>
    where
        I: IntoIterator<Item = P::I>,
        R: FnMut(u64) -> bool,
        P::I: Clone + Default,
    {
        self.sim.run(inputs, out_ready, max_cycles)
    }

    /// Computes a single sample: admits `input` into the empty core and clocks it to the output with the consumer
    /// always ready.
    pub fn process(&mut self, input: P::I) -> Result<F::O, CoreError>
    where P::I: Default {
        let in_flight = self.occupancy();
        if in_flight > 0 {
            return Err(CoreError::PipelineBusy { in_flight });
        }

        let admitted = self.cycle(Valid::valid(input), Ready::new(true));
        assert!(admitted.admitted, "an empty pipeline must accept input");

        for _ in 0..self.latency() {
            let cycle = self.cycle(Valid::invalid(), Ready::new(true));
            if let Some(output) = cycle.emitted_value() {
                return Ok(output);
            }
        }
        Err(CoreError::NoOutput { cycles: self.latency() as u64 + 1 })
    }
}
