pub mod doctor;
pub mod gateway;
pub mod generate;
pub mod onboard;
