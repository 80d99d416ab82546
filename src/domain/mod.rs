// Domain layer - Flight models and pure view state
pub mod detail;
pub mod display;
pub mod flight;
pub mod map;
pub mod route;
pub mod table;
