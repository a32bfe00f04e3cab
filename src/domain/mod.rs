pub mod entities;
pub mod rules;
