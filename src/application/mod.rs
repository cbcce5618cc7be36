pub mod auction;
pub mod games;
pub mod roster;
