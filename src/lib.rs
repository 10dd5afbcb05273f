#![allow(nonstandard_style)]

pub mod config;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;
pub mod variables;

pub use config::Config;
pub use error_handling::{CalcError, Result};
pub use evaluating::{Calculator, Outcome};
pub use variables::{VarTable, Variable};
