pub mod config;
pub mod normalize;
pub mod output;
pub mod process;
pub mod serve;
