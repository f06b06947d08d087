use crate::chart::Chart;

/// Ordered stack of charts sharing one render area.
///
/// Height is split evenly with integer division; any remainder rows stay
/// unused rather than being handed to one chart.
#[derive(Debug, Clone, Default)]
pub struct ChartSet {
    charts: Vec<Chart>,
    width: i32,
    height: i32,
}

impl ChartSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chart; charts render top to bottom in insertion order.
    pub fn add_chart(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    /// Give every chart the full `width` and `height / count` rows.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;

        if self.charts.is_empty() {
            return;
        }
        let chart_height = height / self.charts.len() as i32;
        tracing::debug!(
            width,
            height,
            chart_count = self.charts.len(),
            chart_height,
            "ChartSet::set_size"
        );
        for chart in &mut self.charts {
            chart.set_size(width, chart_height);
        }
    }

    /// Render every chart, separated by one blank line.
    pub fn render(&self) -> String {
        self.charts
            .iter()
            .map(Chart::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn chart(&self, idx: usize) -> Option<&Chart> {
        self.charts.get(idx)
    }

    pub fn chart_mut(&mut self, idx: usize) -> Option<&mut Chart> {
        self.charts.get_mut(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battop_theme::ColorTag;

    fn three_charts() -> ChartSet {
        let mut set = ChartSet::new();
        set.add_chart(Chart::new("Voltage", "V", ColorTag::Yellow, 120));
        set.add_chart(Chart::new("Power", "W", ColorTag::Green, 120));
        set.add_chart(Chart::new("Charge", "%", ColorTag::Cyan, 120));
        set
    }

    #[test]
    fn height_is_split_evenly() {
        let mut set = three_charts();
        set.set_size(100, 30);
        assert!(set.charts().iter().all(|c| c.size() == (100, 10)));
        assert_eq!(set.size(), (100, 30));
    }

    #[test]
    fn remainder_rows_are_not_redistributed() {
        let mut set = three_charts();
        set.set_size(100, 31);
        assert!(set.charts().iter().all(|c| c.size() == (100, 10)));
    }

    #[test]
    fn empty_set_is_harmless() {
        let mut set = ChartSet::new();
        set.set_size(80, 24);
        assert!(set.is_empty());
        assert_eq!(set.render(), "");
    }

    #[test]
    fn charts_render_in_order_with_blank_separator() {
        let mut set = three_charts();
        set.set_size(60, 30);
        let out = set.render();

        let voltage = out.find("Voltage").unwrap();
        let power = out.find("Power").unwrap();
        let charge = out.find("Charge").unwrap();
        assert!(voltage < power && power < charge);
        assert_eq!(out.matches("\n\n").count(), 2);
        assert!(!out.starts_with('\n'));
        assert!(!out.ends_with('\n'));

        // Each chart uses height - 1 lines; the separators fill the rest.
        assert_eq!(out.lines().count(), 3 * 9 + 2);
    }

    #[test]
    fn chart_mut_reaches_members() {
        let mut set = three_charts();
        if let Some(power) = set.chart_mut(1) {
            power.add_value(-12.5);
        }
        assert_eq!(set.chart(1).map(|c| c.buffer().len()), Some(1));
        assert_eq!(set.chart(0).map(|c| c.buffer().len()), Some(0));
        assert!(set.chart_mut(7).is_none());
    }
}
