mod helpers;

pub mod health;
pub mod section;
