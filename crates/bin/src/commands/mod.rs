pub mod health;
pub mod info;
pub mod papers;
pub mod serve;
