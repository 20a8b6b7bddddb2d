//! Game core: elements, enemies, the spawn generator and the tick loop.
//!
//! Nothing in here knows about the network. A session only needs a [`canvas::Canvas`]
//! to draw on and a [`scheduler::Clock`] to read time from.

pub mod canvas;
pub mod element;
pub mod enemies;
pub mod entities;
pub mod game_loop;
pub mod generator;
pub mod scheduler;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
