//! A simplified property-trading board game played by four computer
//! players with fixed purchasing strategies, and the tooling to run it
//! many times over and see which strategy comes out on top.

pub mod game;
pub mod simulation;
