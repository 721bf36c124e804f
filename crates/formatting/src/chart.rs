use core_types::Profit;
use serde::Serialize;

/// Labels for the revenue chart's vertical axis, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YAxis {
    pub labels: Vec<String>,
    pub top_label: i64,
}

/// Rounds the best month up to the next thousand and labels every thousand
/// down to zero, e.g. a 4,600 peak gives `$5K, $4K, … $0K`.
pub fn generate_y_axis(revenue: &[Profit]) -> YAxis {
    let highest = revenue.iter().map(|p| p.revenue).max().unwrap_or(0).max(0);
    let top_label = (highest + 999) / 1000 * 1000;
    let labels = (0..=top_label / 1000)
        .rev()
        .map(|thousands| format!("${thousands}K"))
        .collect();
    YAxis { labels, top_label }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(month: &str, revenue: i64) -> Profit {
        Profit { month: month.to_string(), revenue }
    }

    #[test]
    fn rounds_peak_up_to_thousand() {
        let axis = generate_y_axis(&[month("Jan", 2000), month("Feb", 4600), month("Mar", 1800)]);
        assert_eq!(axis.top_label, 5000);
        assert_eq!(axis.labels, vec!["$5K", "$4K", "$3K", "$2K", "$1K", "$0K"]);
    }

    #[test]
    fn exact_thousand_is_not_bumped() {
        let axis = generate_y_axis(&[month("Jan", 3000)]);
        assert_eq!(axis.top_label, 3000);
        assert_eq!(axis.labels.len(), 4);
    }

    #[test]
    fn empty_report_has_a_single_zero_label() {
        let axis = generate_y_axis(&[]);
        assert_eq!(axis.top_label, 0);
        assert_eq!(axis.labels, vec!["$0K"]);
    }
}
