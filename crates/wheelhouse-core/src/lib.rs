pub mod config;
pub mod logging;

pub mod checksum;
pub mod generate;
pub mod html;
pub mod manifest;
pub mod name;
pub mod output;
