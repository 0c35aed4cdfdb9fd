//! A single layer of a [multilayer perceptron]
//! (https://en.wikipedia.org/wiki/Multilayer_perceptron).
//!
//! A `Layer` holds the activations of one stage of a network, prefixed by a
//! constant bias unit, together with the per-unit error signal computed
//! during backpropagation. Wiring layers together, weights and the training
//! loop belong to the caller.
//!
//! # Example
//!
//! ```
//! # use neurons_layer::*;
//! let mut output = Layer::new(1, 2).unwrap();
//! output.set(&[0.6, 0.3]).unwrap();
//!
//! let sse = output.compute_error_and_gradient(&[1.0, 0.0]).unwrap();
//! assert!((sse - 0.125).abs() < 1e-12);
//! assert!((output.delta()[1] - 0.096).abs() < 1e-12);
//! assert!((output.delta()[2] + 0.063).abs() < 1e-12);
//!
//! // The bias unit is never touched.
//! assert_eq!(output.output()[0], 1.0);
//! assert!(output.is_output(1));
//! ```

#[macro_use]
extern crate serde_derive;

pub mod activator;
pub mod config;
pub mod error;
pub mod layer;
pub mod logging;

mod units;

pub use crate::activator::Activator;
pub use crate::config::LayerConfig;
pub use crate::error::{LayerError, Result};
pub use crate::layer::{Layer, LayerSnapshot};
pub use crate::logging::Logging;
pub use crate::units::Units;
