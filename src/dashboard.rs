//! Fabricated analytics data for the dashboard page.
//!
//! Nothing here is measured; the stat cards, chart series, and activity
//! feed are fixed demo values rendered by the (out-of-process) view layer.

use serde::{Deserialize, Serialize};

/// Direction of a stat card's change indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Trending up.
    Positive,
    /// Trending down.
    Negative,
}

/// One headline metric card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatCard {
    /// Display name, e.g. "Total Revenue".
    pub name: String,
    /// Pre-formatted display value, e.g. "$45,231".
    pub value: String,
    /// Pre-formatted change, e.g. "+20.1%".
    pub change: String,
    /// Whether the change reads as good or bad.
    pub change_kind: ChangeKind,
    /// Progress bar fill, 0-100.
    pub progress: u8,
}

/// A labelled series within a chart.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label.
    pub label: String,
    /// Data points, one per chart label.
    pub data: Vec<f64>,
}

/// Labels plus one or more series.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis (or segment) labels.
    pub labels: Vec<String>,
    /// Series drawn against the labels.
    pub datasets: Vec<ChartSeries>,
}

/// What a recent-activity entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A completed purchase.
    Purchase,
    /// A new signup.
    Signup,
    /// A profile update.
    Update,
    /// A submitted review.
    Review,
    /// Shared content.
    Share,
}

/// One row in the recent-activity feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Display name of the user.
    pub user: String,
    /// What they did, e.g. "completed a purchase".
    pub action: String,
    /// How many minutes ago it happened.
    pub minutes_ago: u32,
    /// Category used for the feed icon.
    pub kind: ActivityKind,
}

/// Everything the dashboard page renders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardData {
    /// Headline metric cards.
    pub stats: Vec<StatCard>,
    /// Monthly performance bar chart.
    pub monthly_performance: ChartData,
    /// Weekly users/revenue line chart.
    pub weekly_trend: ChartData,
    /// Desktop/mobile/tablet doughnut split, in percent.
    pub device_split: ChartData,
    /// Recent activity feed, newest first.
    pub recent_activity: Vec<ActivityEntry>,
}

impl DashboardData {
    /// The demo data set.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            stats: sample_stats(),
            monthly_performance: ChartData {
                labels: labels(&["Jan", "Feb", "Mar", "Apr", "May", "Jun"]),
                datasets: vec![ChartSeries {
                    label: "Monthly Performance".to_string(),
                    data: vec![400.0, 300.0, 600.0, 800.0, 500.0, 900.0],
                }],
            },
            weekly_trend: ChartData {
                labels: labels(&["Week 1", "Week 2", "Week 3", "Week 4"]),
                datasets: vec![
                    ChartSeries {
                        label: "Users".to_string(),
                        data: vec![1200.0, 1900.0, 3000.0, 2780.0],
                    },
                    ChartSeries {
                        label: "Revenue".to_string(),
                        data: vec![2400.0, 1398.0, 9800.0, 3908.0],
                    },
                ],
            },
            device_split: ChartData {
                labels: labels(&["Desktop", "Mobile", "Tablet"]),
                datasets: vec![ChartSeries {
                    label: "Devices".to_string(),
                    data: vec![45.0, 35.0, 20.0],
                }],
            },
            recent_activity: sample_activity(),
        }
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn sample_stats() -> Vec<StatCard> {
    vec![
        StatCard {
            name: "Total Revenue".to_string(),
            value: "$45,231".to_string(),
            change: "+20.1%".to_string(),
            change_kind: ChangeKind::Positive,
            progress: 85,
        },
        StatCard {
            name: "Active Users".to_string(),
            value: "2,345".to_string(),
            change: "+15.3%".to_string(),
            change_kind: ChangeKind::Positive,
            progress: 72,
        },
        StatCard {
            name: "Conversion Rate".to_string(),
            value: "3.24%".to_string(),
            change: "+2.5%".to_string(),
            change_kind: ChangeKind::Positive,
            progress: 68,
        },
        StatCard {
            name: "Server Uptime".to_string(),
            value: "99.9%".to_string(),
            change: "+0.1%".to_string(),
            change_kind: ChangeKind::Positive,
            progress: 99,
        },
    ]
}

fn sample_activity() -> Vec<ActivityEntry> {
    let entries = [
        ("Kaviyarasan", "completed a purchase", 2, ActivityKind::Purchase),
        ("Naveen", "signed up for premium", 5, ActivityKind::Signup),
        ("Sany", "updated profile", 10, ActivityKind::Update),
        ("Sri Prakash", "left a review", 15, ActivityKind::Review),
        ("Venkatesh", "shared content", 20, ActivityKind::Share),
    ];
    entries
        .into_iter()
        .map(|(user, action, minutes_ago, kind)| ActivityEntry {
            user: user.to_string(),
            action: action.to_string(),
            minutes_ago,
            kind,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let data = DashboardData::sample();
        assert_eq!(data.stats.len(), 4);
        assert_eq!(data.monthly_performance.labels.len(), 6);
        assert_eq!(data.weekly_trend.datasets.len(), 2);
        assert_eq!(data.recent_activity.len(), 5);
    }

    #[test]
    fn test_series_lengths_match_labels() {
        let data = DashboardData::sample();
        for chart in [
            &data.monthly_performance,
            &data.weekly_trend,
            &data.device_split,
        ] {
            for series in &chart.datasets {
                assert_eq!(series.data.len(), chart.labels.len());
            }
        }
    }

    #[test]
    fn test_device_split_sums_to_hundred() {
        let data = DashboardData::sample();
        let total: f64 = data
            .device_split
            .datasets
            .iter()
            .flat_map(|s| s.data.iter())
            .sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_activity_is_newest_first() {
        let data = DashboardData::sample();
        for pair in data.recent_activity.windows(2) {
            assert!(pair[0].minutes_ago <= pair[1].minutes_ago);
        }
    }
}
