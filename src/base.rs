pub mod aggregate;
pub mod amount;
pub mod chart;
pub mod charset;
pub mod config;
pub mod customer;
pub mod dataset;
pub mod date;
pub mod fs;
pub mod join;
pub mod table;
pub mod transaction;
pub mod util;
pub mod view;

pub use aggregate::Aggregate;
pub use aggregate::ChartPoint;
pub use amount::Amount;
pub use charset::Charset;
pub use config::Config;
pub use customer::Customer;
pub use customer::CustomerId;
pub use dataset::Dataset;
pub use date::Date;
pub use fs::Fs;
pub use join::JoinedRecord;
pub use join::Joinlist;
pub use transaction::Transaction;
pub use transaction::TransactionId;
pub use view::Query;
pub use view::Viewmodel;
