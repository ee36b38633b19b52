pub mod model;

pub mod node;

pub mod resolver;
