#![doc = include_str!("../README.md")]

pub mod adder;
pub mod greeter;
pub mod jobfile;

pub use adder::{Operand, TypeError, calculate, try_calculate};
pub use greeter::{greet, greet_stdout, greeting};
pub use jobfile::{Job, JobFile};
