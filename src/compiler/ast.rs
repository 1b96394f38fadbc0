pub mod syntax;
pub mod bound;
