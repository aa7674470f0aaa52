//! Classic lobby minigames.

pub mod arena;
pub mod paintball;
pub mod quakecraft;
pub mod tkr;
pub mod vampirez;
pub mod walls;
