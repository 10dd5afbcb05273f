use crate::error_handling::*;

#[allow(clippy::approx_constant)]
const CONSTANTS: [(&str, f64); 2] = [("pi", 3.1415926535), ("e", 2.7182818284)];

#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

/// Variables in the order they were defined. A name can only be defined once.
#[derive(Debug, Default)]
pub struct VarTable {
    variables: Vec<Variable>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in `pi` and `e`.
    pub fn with_constants() -> Self {
        let variables = CONSTANTS
            .iter()
            .map(|&(name, value)| Variable{name: name.into(), value})
            .collect();
        Self{variables}
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|variable| variable.name == name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value)
    }

    pub fn define(&mut self, name: &str, value: f64) -> Result<f64> {
        if self.is_declared(name) {
            return Err(CalcError::declared_twice(name.into()));
        }
        self.variables.push(Variable{name: name.into(), value});
        Ok(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
