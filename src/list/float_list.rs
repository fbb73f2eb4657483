use std::ops::{Index, IndexMut};

use super::{
    error::{self, IndexError},
    index,
};

pub type Value = f64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatList {
    values: Vec<Value>,
}

impl FloatList {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Returns the element at `index`, where `-1` is the last element.
    ///
    /// An out-of-range index is fatal: the error is printed and the process exits.
    pub fn get(&self, index: isize) -> Value {
        self.try_get(index).unwrap_or_else(|err| error::fatal(err))
    }

    /// Overwrites the element at `index`, where `-1` is the last element.
    ///
    /// An out-of-range index is fatal: the error is printed and the process exits.
    pub fn set(&mut self, index: isize, value: Value) {
        if let Err(err) = self.try_set(index, value) {
            error::fatal(err)
        }
    }

    pub fn try_get(&self, index: isize) -> Result<Value, IndexError> {
        let index = index::check(index, self.len())?;
        Ok(self.values[index])
    }

    pub fn try_set(&mut self, index: isize, value: Value) -> Result<(), IndexError> {
        let index = index::check(index, self.len())?;
        self.values[index] = value;
        Ok(())
    }
}

impl From<Vec<Value>> for FloatList {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for FloatList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Index<isize> for FloatList {
    type Output = Value;

    fn index(&self, index: isize) -> &Self::Output {
        match index::check(index, self.len()) {
            Ok(index) => &self.values[index],
            Err(err) => panic!("{}", err),
        }
    }
}

impl IndexMut<isize> for FloatList {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match index::check(index, self.len()) {
            Ok(index) => &mut self.values[index],
            Err(err) => panic!("{}", err),
        }
    }
}
