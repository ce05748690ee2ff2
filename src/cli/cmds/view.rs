use crate::base;
use crate::cli;

/// View joined transactions as a table
#[derive(clap::Parser)]
pub struct View {
    /// Keep rows whose customer name contains this substring
    /// (case-insensitive)
    #[arg(short, long, default_value = "", hide_default_value = true)]
    name: String,

    /// Keep rows whose amount contains this substring
    ///
    /// Matching is textual: "50" matches amounts 500 and 2500 but not 1000.
    #[arg(short, long, default_value = "", hide_default_value = true)]
    amount: String,
}

impl View {
    pub fn run(self, ds: base::Dataset, config: &base::Config) -> anyhow::Result<cli::Output> {
        let query = base::Query {
            name_filter: self.name,
            amount_filter: self.amount,
            selected: None,
        };
        let vm = query.evaluate(&ds);
        let table_config = base::table::Config {
            charset: cli::util::charset_from_config(config),
            rows: vm.filtered,
        };
        Ok(cli::Output::Table(table_config))
    }
}
