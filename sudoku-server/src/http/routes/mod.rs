//! Route handlers organized by resource

pub mod health;
pub mod puzzles;
pub mod leaderboard;
pub mod rooms;
