//! Month-over-month trend series and savings forecast.

pub mod trend;
pub mod types;

pub use trend::{forecast, trend};
pub use types::{MonthFlow, SavingsForecast, TrendReport};
