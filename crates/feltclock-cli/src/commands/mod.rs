pub mod payouts;
pub mod run;
pub mod schedule;
