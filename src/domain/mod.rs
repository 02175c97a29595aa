// Domain layer - Core types and filename rules

pub mod model;
pub mod rules;
