pub mod bootstrap;
pub mod catalog;
pub mod contact;
pub mod counselor;
pub mod diagnostics;
pub mod quiz;
pub mod saved;
