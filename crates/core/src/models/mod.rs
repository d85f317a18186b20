pub mod amount;
pub mod chart;
pub mod period;
pub mod settings;
pub mod stats;
pub mod transaction;
pub mod view;
