pub mod project;
pub mod service;
pub mod staff;
pub mod user;
pub mod vacancy;
