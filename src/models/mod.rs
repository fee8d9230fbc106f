pub mod admin;
pub mod booking;
pub mod customer;
pub mod house;
pub mod promo;
pub mod rooms;
pub mod schedule;
pub mod service;
