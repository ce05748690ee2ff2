use crate::base;
use crate::cli;

/// List customers
#[derive(clap::Parser)]
pub struct Customers {}

impl Customers {
    pub fn run(&self, ds: base::Dataset) -> anyhow::Result<cli::Output> {
        let customers = ds.customers();
        Ok(if customers.is_empty() {
            cli::Output::Str("No customers.".to_string())
        } else {
            let id_width = customers
                .iter()
                .map(|c| c.id().to_string().len())
                .max()
                .unwrap_or_default();
            let lines = customers
                .iter()
                .map(|c| format!("{:>id_width$} {}", c.id().to_string(), c.name()))
                .collect::<Vec<_>>();
            cli::Output::Str(lines.join("\n"))
        })
    }
}
