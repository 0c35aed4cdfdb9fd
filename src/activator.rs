//! Activation functions a layer's units may use.

/// [Activation function](https://en.wikipedia.org/wiki/Activation_function)
/// applied by every unit of a layer.
///
/// A layer only needs the derivative during backpropagation, and only ever
/// has the activated value at hand, so `fprime` is expressed in terms of the
/// *output* of the function.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activator {
    /// Logistic sigmoid, `1 / (1 + e^-x)`.
    Sigmoid,
    /// Hyperbolic tangent.
    #[serde(rename = "tanh")]
    TanH,
    /// Rectified Linear Unit
    #[serde(rename = "relu")]
    ReLU,
    /// Leaky Rectified Linear Unit
    ///
    /// Takes an `alpha` value to use for negative inputs.
    #[serde(rename = "leaky_relu")]
    LeakyReLU(f64),
    /// No activation; the unit passes its weighted sum through unchanged.
    Identity,
}

impl Default for Activator {
    fn default() -> Self {
        Activator::Sigmoid
    }
}

impl Activator {
    /// Evaluates `f(x)`.
    pub fn f(self, x: f64) -> f64 {
        match self {
            Activator::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activator::TanH => x.tanh(),
            Activator::ReLU => x.max(0.0),
            Activator::LeakyReLU(alpha) => {
                if x > 0.0 {
                    x
                } else {
                    alpha * x
                }
            }
            Activator::Identity => x,
        }
    }

    /// Evaluates the derivative `f'(x)`, where `y = f(x)`.
    ///
    /// For the sigmoid this is the familiar `y * (1 - y)`.
    pub fn fprime(self, y: f64) -> f64 {
        match self {
            Activator::Sigmoid => y * (1.0 - y),
            Activator::TanH => 1.0 - y * y,
            Activator::ReLU => {
                if y > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activator::LeakyReLU(alpha) => {
                if y > 0.0 {
                    1.0
                } else {
                    alpha
                }
            }
            Activator::Identity => 1.0,
        }
    }
}
