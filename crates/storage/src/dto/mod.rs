pub mod athlete;
pub mod auth;
pub mod common;
pub mod event;
pub mod follow;
pub mod news;
pub mod participant;
pub mod review;
pub mod search;
pub mod stats;
pub mod user;
