//! Layer configuration.
//!
//! Layers can be described in JSON, with everything but the id and length
//! optional:
//!
//! ```json
//! {
//!   "id": 2,
//!   "length": 10,
//!   "activator": "sigmoid",
//!   "logging": { "passes": 1000 }
//! }
//! ```

use crate::activator::Activator;
use crate::error::{LayerError, Result};
use crate::layer::Layer;
use crate::logging::Logging;

use std::convert::TryFrom;
use std::fs;
use std::path::Path;

/// Describes a layer to be built.
///
/// `id` and `length` are signed so that negative values in a configuration
/// file surface as configuration errors from `build`, not as parse errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub id: i64,
    pub length: i64,
    #[serde(default)]
    pub activator: Activator,
    #[serde(default)]
    pub logging: Logging,
}

impl LayerConfig {
    /// Describes layer `id` with `length` sigmoid units and no logging.
    ///
    /// Fails if either value does not fit the signed configuration fields.
    pub fn new(id: usize, length: usize) -> Result<Self> {
        let signed = |name: &str, value: usize| {
            i64::try_from(value).map_err(|_| {
                LayerError::Configuration(format!("layer {} {} is too large", name, value))
            })
        };
        Ok(LayerConfig {
            id: signed("id", id)?,
            length: signed("length", length)?,
            activator: Activator::default(),
            logging: Logging::default(),
        })
    }

    /// Describes every layer of a network from its layer sizes, input layer
    /// first, numbering them from zero.
    pub fn for_sizes(sizes: &[usize], activator: Activator) -> Result<Vec<Self>> {
        sizes
            .iter()
            .enumerate()
            .map(|(id, &length)| {
                Ok(LayerConfig {
                    activator,
                    ..LayerConfig::new(id, length)?
                })
            })
            .collect()
    }

    /// Parses a single layer description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a list of layer descriptions.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a list of layer descriptions from the file at `path`.
    pub fn list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let contents = fs::read_to_string(path)?;
        LayerConfig::list_from_json(&contents)
    }

    /// Builds the described layer.
    pub fn build(&self) -> Result<Layer> {
        Ok(Layer::from_signed(self.id, self.length)?
            .activator(self.activator)
            .logging(self.logging))
    }

    /// Builds every described layer, failing on the first bad one.
    pub fn build_all(configs: &[LayerConfig]) -> Result<Vec<Layer>> {
        configs.iter().map(LayerConfig::build).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = LayerConfig::from_json(r#"{"id": 1, "length": 4}"#).unwrap();
        assert_eq!(config, LayerConfig::new(1, 4).unwrap());
        let layer = config.build().unwrap();
        assert_eq!(layer.id(), 1);
        assert_eq!(layer.len(), 4);
        assert_eq!(layer.get_activator(), Activator::Sigmoid);
    }

    #[test]
    fn full_description() {
        let config = LayerConfig::from_json(
            r#"{"id": 2, "length": 3, "activator": "tanh", "logging": {"passes": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.activator, Activator::TanH);
        assert_eq!(config.logging, Logging::Passes(10));
        assert_eq!(config.build().unwrap().get_activator(), Activator::TanH);
    }

    #[test]
    fn negative_values_are_configuration_errors() {
        let config = LayerConfig::from_json(r#"{"id": -1, "length": 4}"#).unwrap();
        match config.build() {
            Err(LayerError::Configuration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        let config = LayerConfig::from_json(r#"{"id": 0, "length": 0}"#).unwrap();
        assert!(config.build().is_err());
    }

    #[test]
    fn sizes_beyond_signed_range() {
        match LayerConfig::new(usize::MAX, 3) {
            Err(LayerError::Configuration(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(LayerConfig::new(0, usize::MAX).is_err());
        assert!(LayerConfig::for_sizes(&[2, usize::MAX], Activator::Sigmoid).is_err());

        let config = LayerConfig::new(i64::MAX as usize, 3).unwrap();
        assert_eq!(config.build().unwrap().id(), i64::MAX as usize);
    }

    #[test]
    fn malformed_json() {
        match LayerConfig::from_json(r#"{"id": 0}"#) {
            Err(LayerError::Parse(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn network_shape() {
        let configs = LayerConfig::for_sizes(&[2, 3, 1], Activator::Sigmoid).unwrap();
        let layers = LayerConfig::build_all(&configs).unwrap();
        let last = layers.len() - 1;
        assert_eq!(layers.len(), 3);
        assert!(!layers[0].is_output(last));
        assert!(layers[2].is_output(last));
        assert_eq!(layers[1].len(), 3);

        let configs = LayerConfig::for_sizes(&[2, 0, 1], Activator::Sigmoid).unwrap();
        assert!(LayerConfig::build_all(&configs).is_err());
    }

    #[test]
    fn list_round_trip() {
        let configs = LayerConfig::for_sizes(&[4, 2], Activator::ReLU).unwrap();
        let json = serde_json::to_string(&configs).unwrap();
        assert_eq!(LayerConfig::list_from_json(&json).unwrap(), configs);
    }

    #[test]
    fn missing_file() {
        match LayerConfig::list_from_file("/nonexistent/layers.json") {
            Err(LayerError::Io(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
