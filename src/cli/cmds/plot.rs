use crate::base;
use crate::cli;

/// Plot a customer's per-day transaction totals
#[derive(clap::Parser)]
pub struct Plot {
    /// Customer to plot, as listed by `customers`
    customer: Option<base::CustomerId>,
}

impl Plot {
    pub fn run(self, ds: base::Dataset, config: &base::Config) -> anyhow::Result<cli::Output> {
        let Some(customer) = self.customer else {
            return Ok(cli::Output::Str("No customer selected.".to_string()));
        };
        let query = base::Query {
            name_filter: String::new(),
            amount_filter: String::new(),
            selected: Some(customer),
        };
        let vm = query.evaluate(&ds);
        let chart_config = base::chart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: cli::util::term_width(),
            points: vm.points,
        };
        Ok(cli::Output::Chart(chart_config))
    }
}
