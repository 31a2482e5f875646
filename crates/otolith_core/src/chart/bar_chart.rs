//! Bar chart model and text renderer.

use super::ChartResult;
use crate::model::field::RecordField;
use crate::repo::record_repo::FieldCount;
use std::io::Write;

const COUNT_AXIS_LABEL: &str = "Count";
const DEFAULT_MAX_HEIGHT: usize = 10;
const BAR_GLYPH: &str = "███";
const EMPTY_GLYPH: &str = "   ";

/// Renderable description of a count-per-category chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<FieldCount>,
}

impl BarChart {
    /// Builds a chart of `counts` labeled after `field`.
    pub fn for_field(field: RecordField, counts: Vec<FieldCount>) -> Self {
        let x_label = field.display_name();
        Self {
            title: format!("Count of {x_label}"),
            x_label: x_label.to_string(),
            y_label: COUNT_AXIS_LABEL.to_string(),
            bars: counts,
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.count).max().unwrap_or(0)
    }
}

/// Displays a bar chart.
pub trait ChartRenderer {
    fn render(&mut self, chart: &BarChart) -> ChartResult<()>;
}

/// Vertical bar chart drawn with block glyphs on a text sink.
///
/// Bars are numbered under the axis; a legend maps numbers to values.
pub struct TextBarChartRenderer<W: Write> {
    out: W,
    max_height: usize,
}

impl<W: Write> TextBarChartRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    /// Caps the tallest bar at `rows` lines (minimum 1).
    pub fn with_max_height(mut self, rows: usize) -> Self {
        self.max_height = rows.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar_height(&self, count: usize, max_count: usize) -> usize {
        if max_count <= self.max_height {
            return count;
        }
        // Round up so every non-zero count stays visible.
        (count * self.max_height).div_ceil(max_count)
    }
}

impl<W: Write> ChartRenderer for TextBarChartRenderer<W> {
    fn render(&mut self, chart: &BarChart) -> ChartResult<()> {
        writeln!(self.out, "{}", chart.title)?;

        let max_count = chart.max_count();
        if chart.bars.is_empty() {
            writeln!(self.out, "(no data)")?;
            self.out.flush()?;
            return Ok(());
        }

        let heights: Vec<usize> = chart
            .bars
            .iter()
            .map(|bar| self.bar_height(bar.count, max_count))
            .collect();
        let rows = heights.iter().copied().max().unwrap_or(0);
        let axis_width = max_count.to_string().len().max(chart.y_label.len());

        writeln!(self.out, "{:>axis_width$}", chart.y_label)?;
        for row in (1..=rows).rev() {
            let tick = if row == rows {
                max_count.to_string()
            } else {
                String::new()
            };
            let mut line = format!("{tick:>axis_width$} |");
            for height in &heights {
                line.push(' ');
                line.push_str(if *height >= row { BAR_GLYPH } else { EMPTY_GLYPH });
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }

        let axis_len = chart.bars.len() * 4;
        writeln!(self.out, "{:>axis_width$} +{}", 0, "-".repeat(axis_len))?;

        let mut numbers = format!("{:>axis_width$}  ", "");
        for position in 1..=chart.bars.len() {
            numbers.push_str(&format!("{position:^3} "));
        }
        writeln!(self.out, "{}", numbers.trim_end())?;
        writeln!(self.out, "{:>axis_width$}  {}", "", chart.x_label)?;

        for (position, bar) in chart.bars.iter().enumerate() {
            writeln!(self.out, "{:>3}. {} ({})", position + 1, bar.value, bar.count)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BarChart, ChartRenderer, TextBarChartRenderer};
    use crate::model::field::RecordField;
    use crate::repo::record_repo::FieldCount;

    fn count(value: &str, count: usize) -> FieldCount {
        FieldCount {
            value: value.to_string(),
            count,
        }
    }

    fn render(chart: &BarChart, max_height: usize) -> String {
        let mut renderer = TextBarChartRenderer::new(Vec::new()).with_max_height(max_height);
        renderer.render(chart).expect("render to memory");
        String::from_utf8(renderer.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn for_field_uses_display_labels() {
        let chart = BarChart::for_field(RecordField::NumberOtoliths, vec![count("3", 1)]);
        assert_eq!(chart.title, "Count of Number of Otoliths");
        assert_eq!(chart.x_label, "Number of Otoliths");
        assert_eq!(chart.y_label, "Count");
    }

    #[test]
    fn renders_one_column_per_value_with_legend() {
        let chart = BarChart::for_field(
            RecordField::Year,
            vec![count("2020", 2), count("2021", 1)],
        );
        let text = render(&chart, 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Count of Year");
        assert_eq!(lines[1], "Count");
        assert_eq!(lines[2], "    2 | ███");
        assert_eq!(lines[3], "      | ███ ███");
        assert!(lines[4].ends_with("+--------"));
        assert!(text.contains("  1. 2020 (2)"));
        assert!(text.contains("  2. 2021 (1)"));
        assert!(text.contains("Year"));
    }

    #[test]
    fn scales_tall_bars_and_keeps_small_ones_visible() {
        let chart = BarChart::for_field(
            RecordField::Month,
            vec![count("May", 100), count("June", 1)],
        );
        let text = render(&chart, 4);
        let bar_rows: Vec<&str> = text.lines().filter(|line| line.contains(" |")).collect();

        assert_eq!(bar_rows.len(), 4);
        assert!(bar_rows[3].ends_with("███ ███"));
        assert!(bar_rows[0].trim_end().ends_with("| ███"));
    }

    #[test]
    fn empty_chart_reports_no_data() {
        let chart = BarChart::for_field(RecordField::Source, Vec::new());
        assert_eq!(render(&chart, 10), "Count of Source\n(no data)\n");
    }
}
