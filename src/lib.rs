//! Terminal front-end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Engine**: game rules, turn sequencing, scores and the computer
//!   opponent live in `tictac_engine`
//! - **Orchestrator**: owns a session, reads commands, plays the computer
//!   after a thinking pause
//! - **Render**: turns orchestrator events into text
//! - **Simulate**: headless computer-vs-computer runs

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod render;
mod simulate;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{AppConfig, ConfigError};
pub use orchestrator::{Command as InputCommand, Orchestrator, UiEvent};
pub use render::{HELP, describe, render, status_line};
pub use simulate::{SimulationReport, simulate};
