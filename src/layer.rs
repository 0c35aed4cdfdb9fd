//! A single layer of a feedforward network.

use crate::activator::Activator;
use crate::error::{LayerError, Result};
use crate::logging::Logging;
use crate::units::Units;

use itertools::multizip;
use std::convert::TryFrom;
use std::fmt;

/// Value held by every layer's bias unit.
pub const BIAS: f64 = 1.0;

/// The activations of one layer of a network and their backpropagated
/// error signal.
///
/// Both buffers are laid out with the bias unit first, so `output()[0]` is
/// always `BIAS` and `output()[i + 1]` is the activation of unit `i`.
/// `delta()` shares that layout; its bias slot is never written.
///
/// The layer does not know about its neighbours. The caller feeds it inputs,
/// reads its outputs into the next layer, and reads its deltas back into the
/// previous one.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Rank of this layer in the network, with 0 the input layer.
    id: usize,
    /// Activation used by every unit, needed here for its derivative.
    activator: Activator,
    logging: Logging,
    output: Units,
    delta: Units,
    /// Number of successful `compute_error_and_gradient` calls.
    passes: usize,
}

/// A copy of a layer's buffers, for dumping diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub id: usize,
    pub output: Vec<f64>,
    pub delta: Vec<f64>,
}

impl Layer {
    /// Creates layer `id` with `length` units plus a bias unit.
    ///
    /// All units and deltas start at zero, with a sigmoid activation and no
    /// logging. Fails if `length` is zero or too large to allocate.
    pub fn new(id: usize, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(LayerError::Configuration(format!(
                "layer {} must have at least one unit",
                id
            )));
        }
        let too_large = || {
            LayerError::Configuration(format!(
                "layer {} cannot hold {} units",
                id, length
            ))
        };
        let output = Units::with_bias(length, BIAS).ok_or_else(too_large)?;
        let delta = Units::zeros(length).ok_or_else(too_large)?;
        Ok(Layer {
            id,
            activator: Activator::default(),
            logging: Logging::default(),
            output,
            delta,
            passes: 0,
        })
    }

    /// Like `new`, for callers holding signed values.
    ///
    /// Negative ids and non-positive lengths are configuration errors.
    pub fn from_signed(id: i64, length: i64) -> Result<Self> {
        let id = usize::try_from(id).map_err(|_| {
            LayerError::Configuration(format!("layer id {} is negative", id))
        })?;
        if length <= 0 {
            return Err(LayerError::Configuration(format!(
                "layer {} must have at least one unit, got {}",
                id, length
            )));
        }
        let length = usize::try_from(length).map_err(|_| {
            LayerError::Configuration(format!("layer length {} is too large", length))
        })?;
        Layer::new(id, length)
    }

    /// Sets the activation function whose derivative drives the deltas.
    pub fn activator(mut self, activator: Activator) -> Self {
        self.activator = activator;
        self
    }

    /// Sets the type of logging emitted by this layer.
    pub fn logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the number of units, excluding the bias.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Always false; construction rejects empty layers.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_activator(&self) -> Activator {
        self.activator
    }

    /// Returns the number of times this layer's deltas have been computed.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the activations, bias first.
    pub fn output(&self) -> &[f64] {
        self.output.as_slice()
    }

    /// Returns the deltas, with an unused slot in the bias position.
    pub fn delta(&self) -> &[f64] {
        self.delta.as_slice()
    }

    /// Returns the activations, indexed by unit from zero.
    pub fn units(&self) -> &Units {
        &self.output
    }

    /// Returns the deltas, indexed by unit from zero.
    pub fn unit_deltas(&self) -> &Units {
        &self.delta
    }

    /// Returns true if this is the last layer of a network whose last layer
    /// has id `last_id`.
    pub fn is_output(&self, last_id: usize) -> bool {
        self.id == last_id
    }

    /// Loads `input` as this layer's activations, leaving the bias alone.
    ///
    /// `input` must hold exactly one value per unit.
    pub fn set(&mut self, input: &[f64]) -> Result<()> {
        let checked = self.check_input(input);
        self.report(checked)?;
        self.output.copy_from(input);
        Ok(())
    }

    /// Applies this layer's activation to the weighted sums
    /// `pre_activations` and loads the results as its activations.
    pub fn activate(&mut self, pre_activations: &[f64]) -> Result<()> {
        let checked = self.check_input(pre_activations);
        self.report(checked)?;
        let activator = self.activator;
        for (y, &x) in self.output.units_mut().iter_mut().zip(pre_activations) {
            *y = activator.f(x);
        }
        Ok(())
    }

    /// Computes the deltas of an output layer against the expected `labels`,
    /// returning half the sum of squared errors.
    ///
    /// For each unit `i`, with activation `a` and error `e = labels[i] - a`,
    /// the delta is `f'(a) * e`; for a sigmoid layer, `a * (1 - a) * e`.
    /// Halving the squared error makes its derivative with respect to `a`
    /// exactly `e`.
    pub fn compute_error_and_gradient(&mut self, labels: &[f64]) -> Result<f64> {
        let checked = self.check_labels(labels);
        self.report(checked)?;

        let activator = self.activator;
        let mut sum = 0.0;
        for (&label, &y, d) in multizip((
            labels.iter(),
            self.output.iter(),
            self.delta.units_mut().iter_mut(),
        )) {
            let err = label - y;
            *d = activator.fprime(y) * err;
            sum += err * err;
        }
        let sse = sum / 2.0;

        self.passes += 1;
        self.logging.pass(self.id, self.passes, sse);
        Ok(sse)
    }

    /// Zeroes every activation and delta, keeping the bias.
    pub fn reset(&mut self) {
        self.output.zero_out();
        self.delta.zero_out();
    }

    /// Copies out the current buffers.
    pub fn state(&self) -> LayerSnapshot {
        LayerSnapshot {
            id: self.id,
            output: self.output.as_slice().to_vec(),
            delta: self.delta.as_slice().to_vec(),
        }
    }

    fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.is_empty() {
            return Err(LayerError::invalid_input(self.id, "input is empty"));
        }
        if input.len() != self.len() {
            return Err(LayerError::invalid_input(
                self.id,
                format!("expected {} inputs, got {}", self.len(), input.len()),
            ));
        }
        Ok(())
    }

    fn check_labels(&self, labels: &[f64]) -> Result<()> {
        if labels.is_empty() {
            return Err(LayerError::invalid_input(self.id, "labels are empty"));
        }
        if self.output.as_slice().len() != labels.len() + 1 {
            return Err(LayerError::DimensionMismatch {
                layer: self.id,
                expected: self.len(),
                actual: labels.len(),
            });
        }
        Ok(())
    }

    /// Passes `result` through, logging it first if it is an error.
    fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(ref e) = result {
            self.logging.rejection(self.id, e);
        }
        result
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Layer {}: {}", self.id, self.output)
    }
}
