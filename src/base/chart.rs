use crate::base;

/// Width of a `yyyy-mm-dd` row label.
const LABEL_CHARLEN: usize = 10;

/// The chart collaborator: accepts a sequence of per-day points plus layout
/// configuration, and renders a horizontal bar per point.
pub struct Chart {
    charset: base::Charset,
    points: Vec<base::ChartPoint>,
    max_abs_val: base::Amount,
    max_barlen: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    pub points: Vec<base::ChartPoint>,
}

impl Config {
    pub fn to_chart(&self) -> Chart {
        let max_abs_val = self
            .points
            .iter()
            .map(|p| p.total_amount.abs())
            .max()
            .unwrap_or_default();
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - LABEL_CHARLEN
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // vertical axis just before the bar
            - (-max_abs_val).charlen();
        Chart {
            charset: self.charset.clone(),
            points: self.points.clone(),
            max_abs_val,
            max_barlen,
        }
    }
}

impl Chart {
    fn barlen(&self, val: base::Amount) -> usize {
        if self.max_abs_val.0 == 0 {
            return 0;
        }
        let x = (val.abs().0 as f64) / (self.max_abs_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }

    fn draw(&self, w: &mut impl std::fmt::Write, p: &base::ChartPoint) -> std::fmt::Result {
        write!(w, "{} {}", p.date, self.charset.chart_axis)?;
        let barlen = self.barlen(p.total_amount);
        if barlen > 0 {
            let (bar_char, colorize): (char, fn(&str) -> colored::ColoredString) =
                if p.total_amount >= base::Amount(0) {
                    (self.charset.chart_bar_pos, (|s| colored::Colorize::green(s)) as fn(&str) -> colored::ColoredString)
                } else {
                    (self.charset.chart_bar_neg, (|s| colored::Colorize::red(s)) as fn(&str) -> colored::ColoredString)
                };
            let mut bars = bar_char.to_string().repeat(barlen);
            if self.charset.color {
                bars = colorize(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", p.total_amount)
    }
}

impl std::fmt::Display for Chart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in &self.points {
            self.draw(f, p)?;
        }
        Ok(())
    }
}
