#![warn(non_snake_case)]

pub mod config;
pub mod grid;
pub mod io;
pub mod options;
pub mod render;
pub mod sim;
