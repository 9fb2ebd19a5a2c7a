//! Command implementations for surgeon-cli

pub mod excise;
pub mod pack;
pub mod rename;
pub mod repair;

pub use excise::run_excise;
pub use pack::run_pack;
pub use rename::run_rename;
pub use repair::run_repair;
