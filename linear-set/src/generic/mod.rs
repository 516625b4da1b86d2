pub mod algebra;
pub mod equivalence;
pub mod linear_set;
