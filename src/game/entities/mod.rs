//! Game entities module.
//!
//! This module organizes the waypoint, home and player entities. Enemies live in
//! [`crate::game::enemies`].

pub mod home;
pub mod player;
pub mod waypoint;

pub use home::*;
pub use player::*;
pub use waypoint::*;
