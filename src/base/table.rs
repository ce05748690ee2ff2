use crate::base;

const HEADERS: [&str; 5] = ["ID", "NAME", "TXN", "DATE", "AMOUNT"];

/// Renders the filtered joined relation as a flat table: one row per joined
/// record, columns sized to their widest cell.
pub struct Table {
    rows: base::Joinlist,
    widths: [usize; 5],
    dash: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub rows: base::Joinlist,
}

impl Config {
    pub fn to_table(&self) -> Table {
        let mut widths = HEADERS.map(str::len);
        for r in self.rows.iter() {
            widths[0] = widths[0].max(base::util::count_digits(u32::from(r.customer_id()) as u64));
            widths[1] = widths[1].max(r.customer_name().chars().count());
            widths[2] =
                widths[2].max(base::util::count_digits(u32::from(r.transaction_id()) as u64));
            widths[3] = widths[3].max(10); // yyyy-mm-dd
            widths[4] = widths[4].max(r.amount().charlen());
        }
        Table {
            rows: self.rows.clone(),
            widths,
            dash: self.charset.dash,
        }
    }
}

impl Table {
    fn write_row(&self, f: &mut std::fmt::Formatter<'_>, cells: [&str; 5]) -> std::fmt::Result {
        let [w0, w1, w2, w3, w4] = self.widths;
        writeln!(
            f,
            "{:>w0$}  {:<w1$}  {:>w2$}  {:<w3$}  {:>w4$}",
            cells[0], cells[1], cells[2], cells[3], cells[4],
        )
    }
}

impl std::fmt::Display for Table {
    /// Writes a terminating newline. Renders nothing for an empty row set.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }
        self.write_row(f, HEADERS)?;
        let total_width = self.widths.iter().sum::<usize>()
            + (HEADERS.len() - 1) * base::util::BOUNDING_SPACES_COUNT;
        writeln!(f, "{}", self.dash.to_string().repeat(total_width))?;
        for r in self.rows.iter() {
            self.write_row(
                f,
                [
                    r.customer_id().to_string().as_str(),
                    r.customer_name(),
                    r.transaction_id().to_string().as_str(),
                    r.date().to_string().as_str(),
                    r.amount().to_string().as_str(),
                ],
            )?;
        }
        Ok(())
    }
}
