mod wire;

pub use wire::*;
