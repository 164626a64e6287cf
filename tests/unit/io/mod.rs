mod cli;
mod progress;
mod viewer;
