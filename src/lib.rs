pub mod config;
pub mod controller;
pub mod errors;
pub mod io;
pub mod logging;
pub mod network;
pub mod population;
pub mod scenario;
pub mod signals;
