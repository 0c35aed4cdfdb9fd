//! Diagnostic output for a layer.

use crate::error::LayerError;

/// How much a layer reports about its own activity.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Logging {
    /// No logs will be printed
    Silent,
    /// Every rejected call is reported on stderr
    Rejections,
    /// Rejections, plus the SSE after every `n` backward passes
    Passes(usize),
}

impl Default for Logging {
    fn default() -> Self {
        Logging::Silent
    }
}

impl Logging {
    /// Reports an error returned from layer `id`.
    pub(crate) fn rejection(self, id: usize, error: &LayerError) {
        if let Logging::Silent = self {
            return;
        }
        eprintln!("Layer {}: rejected: {}", id, error);
    }

    /// Performs logging after backward pass number `pass` of layer `id`.
    pub(crate) fn pass(self, id: usize, pass: usize, sse: f64) {
        if self.reports_pass(pass) {
            println!("Layer {} pass {}:\tSSE={}", id, pass, sse);
        }
    }

    fn reports_pass(self, pass: usize) -> bool {
        match self {
            Logging::Passes(freq) => freq > 0 && pass % freq == 0,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_frequency() {
        assert!(!Logging::Silent.reports_pass(10));
        assert!(!Logging::Rejections.reports_pass(10));
        assert!(Logging::Passes(5).reports_pass(10));
        assert!(!Logging::Passes(5).reports_pass(11));
        assert!(!Logging::Passes(0).reports_pass(10));
    }

    #[test]
    fn print_paths() {
        let error = LayerError::invalid_input(2, "input is empty");
        for &logging in &[Logging::Silent, Logging::Rejections, Logging::Passes(2)] {
            logging.rejection(2, &error);
            logging.pass(2, 1, 0.5);
            logging.pass(2, 2, 0.25);
        }
    }

    #[test]
    fn deserializes() {
        let l: Logging = serde_json::from_str("{\"passes\": 100}").unwrap();
        assert_eq!(l, Logging::Passes(100));
        let l: Logging = serde_json::from_str("\"rejections\"").unwrap();
        assert_eq!(l, Logging::Rejections);
    }
}
