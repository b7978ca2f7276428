pub mod direction;
pub mod movement;
pub mod threshold;
