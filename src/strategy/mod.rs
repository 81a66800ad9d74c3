pub mod grouper;
pub mod runner;
pub mod selector;
