pub mod error;
pub mod graph;
pub mod io;
pub mod report;
pub mod solver;
pub mod union_find;
