use std::fmt;
use std::ops::Index;
use std::slice;

/// A layer's unit values, preceded by a slot for the bias unit.
///
/// Real units are addressed from zero; the wrapper applies the offset past
/// the bias slot internally. The buffer is allocated once and never resized.
#[derive(Clone, Debug, PartialEq)]
pub struct Units {
    data: Vec<f64>, // data[0] is the bias slot
}

impl Units {
    /// Allocates `len` zeroed units plus a zeroed bias slot.
    ///
    /// Returns `None` if `len + 1` values cannot be allocated.
    pub(crate) fn zeros(len: usize) -> Option<Self> {
        let size = len.checked_add(1)?;
        let mut data = Vec::new();
        data.try_reserve_exact(size).ok()?;
        data.resize(size, 0.0);
        Some(Units { data })
    }

    /// Allocates `len` zeroed units with the bias slot fixed at `bias`.
    pub(crate) fn with_bias(len: usize, bias: f64) -> Option<Self> {
        let mut units = Units::zeros(len)?;
        units.data[0] = bias;
        Some(units)
    }

    /// Returns the number of real units, excluding the bias.
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Always false; a layer has at least one unit.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value held in the bias slot.
    pub fn bias(&self) -> f64 {
        self.data[0]
    }

    /// Returns the `i`th real unit, if there is one.
    pub fn get(&self, i: usize) -> Option<f64> {
        i.checked_add(1).and_then(|j| self.data.get(j)).cloned()
    }

    /// Returns every slot, bias first.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the real units only.
    pub fn real(&self) -> &[f64] {
        &self.data[1..]
    }

    /// Iterates over the real units.
    pub fn iter(&self) -> slice::Iter<f64> {
        self.real().iter()
    }

    pub(crate) fn units_mut(&mut self) -> &mut [f64] {
        &mut self.data[1..]
    }

    /// Overwrites the real units. `values` must already match `len()`.
    pub(crate) fn copy_from(&mut self, values: &[f64]) {
        self.units_mut().copy_from_slice(values);
    }

    /// Zeroes the real units, leaving the bias slot alone.
    pub(crate) fn zero_out(&mut self) {
        for x in self.units_mut() {
            *x = 0.0;
        }
    }
}

impl Index<usize> for Units {
    type Output = f64;

    /// Indexes real units from zero; panics past `len()`.
    fn index(&self, i: usize) -> &f64 {
        &self.real()[i]
    }
}

impl<'a> IntoIterator for &'a Units {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", x)?;
        }
        write!(f, "]")
    }
}
