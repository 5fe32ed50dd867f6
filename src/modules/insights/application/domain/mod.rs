pub mod blocks;
pub mod charts;
pub mod derivations;
pub mod preprocessing;
pub mod report;
