pub mod bfhl;
