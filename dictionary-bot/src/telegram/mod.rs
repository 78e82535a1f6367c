//! Telegram layer: conversion of handler output to teloxide types, and the update dispatcher.

mod adapters;
mod runner;

pub use adapters::{start_button, to_inline_result, to_inline_results, try_keyboard};
pub use runner::{build_handler, run_dispatcher, send_answer, Command};
