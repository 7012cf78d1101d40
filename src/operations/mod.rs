pub mod label;

pub use label::{polylabel, Cell, LabelParams, Pole, Polylabel};
