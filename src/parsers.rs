pub mod predictive;
mod reader;
