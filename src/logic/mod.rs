pub mod eto;
pub mod preprocess;
pub mod simulator;
pub mod summary;

pub use eto::hargreaves_eto;
pub use preprocess::{preprocess, PreparedDay};
pub use simulator::Simulator;
pub use summary::{summarize, FixedIntervalBaseline, SavingsBaseline, StressDayBuckets, YieldPolicy};
