pub mod entities;
pub mod parsing;
