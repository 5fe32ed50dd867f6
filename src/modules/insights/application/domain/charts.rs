//! Chart descriptions serialized as Plotly figures (`{"data": [...], "layout": {...}}`).

use chrono::NaiveDate;
use serde::Serialize;

use crate::insights::application::domain::derivations::{CategoryCount, HistogramBin};

pub mod palette {
    pub const PASTEL: [&str; 11] = [
        "rgb(102, 197, 204)",
        "rgb(246, 207, 113)",
        "rgb(248, 156, 116)",
        "rgb(220, 176, 242)",
        "rgb(135, 197, 95)",
        "rgb(158, 185, 243)",
        "rgb(254, 136, 177)",
        "rgb(201, 219, 116)",
        "rgb(139, 224, 164)",
        "rgb(180, 151, 231)",
        "rgb(179, 179, 179)",
    ];

    pub const SET2: [&str; 8] = [
        "rgb(102,194,165)",
        "rgb(252,141,98)",
        "rgb(141,160,203)",
        "rgb(231,138,195)",
        "rgb(166,216,84)",
        "rgb(255,217,47)",
        "rgb(229,196,148)",
        "rgb(179,179,179)",
    ];

    pub const VIVID: [&str; 11] = [
        "rgb(229, 134, 6)",
        "rgb(93, 105, 177)",
        "rgb(82, 188, 163)",
        "rgb(153, 201, 69)",
        "rgb(204, 97, 176)",
        "rgb(36, 121, 108)",
        "rgb(218, 165, 27)",
        "rgb(47, 138, 196)",
        "rgb(118, 78, 159)",
        "rgb(237, 100, 90)",
        "rgb(165, 170, 153)",
    ];

    /// Colours for `n` categories, cycling through `palette`.
    pub fn cycle(palette: &[&str], n: usize) -> Vec<String> {
        palette
            .iter()
            .cycle()
            .take(n)
            .map(|color| color.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AxisValues {
    Labels(Vec<String>),
    Numbers(Vec<f64>),
    Counts(Vec<u64>),
    Dates(Vec<NaiveDate>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        hole: f64,
        textposition: &'static str,
        textinfo: &'static str,
        hovertext: Vec<String>,
        hoverinfo: &'static str,
        marker: Marker,
        sort: bool,
    },
    Bar {
        x: AxisValues,
        y: AxisValues,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<Vec<f64>>,
        marker: Marker,
    },
    Funnel {
        x: AxisValues,
        y: AxisValues,
        text: Vec<String>,
        marker: Marker,
    },
    Scatter {
        x: AxisValues,
        y: AxisValues,
        mode: &'static str,
    },
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTitle {
    pub text: String,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(AxisTitle {
                text: text.to_string(),
            }),
            range: None,
        }
    }

    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.range = Some([low, high]);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bargap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub title: AxisTitle,
}

impl Layout {
    pub fn sized(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn axes(mut self, x_title: &str, y_title: &str) -> Self {
        self.xaxis = Some(Axis::titled(x_title));
        self.yaxis = Some(Axis::titled(y_title));
        self
    }

    pub fn legend_title(mut self, text: &str) -> Self {
        self.legend = Some(Legend {
            title: AxisTitle {
                text: text.to_string(),
            },
        });
        self
    }
}

impl ChartSpec {
    /// Donut chart with percentage and label printed inside each slice.
    pub fn donut(slices: &[CategoryCount], palette: &[&str], width: u32, height: u32) -> Self {
        let colors = palette::cycle(palette, slices.len());
        Self {
            data: vec![Trace::Pie {
                labels: slices.iter().map(|s| s.label.clone()).collect(),
                values: slices.iter().map(|s| s.count).collect(),
                hole: 0.4,
                textposition: "inside",
                textinfo: "percent+label",
                hovertext: slices
                    .iter()
                    .map(|s| format!("{}: {} ({:.1}%)", s.label, s.count, s.percent))
                    .collect(),
                hoverinfo: "text",
                marker: Marker {
                    color: Color::PerPoint(colors),
                },
                sort: false,
            }],
            layout: Layout::sized(Some(width), Some(height)),
        }
    }

    /// Pre-binned histogram drawn as touching bars.
    pub fn histogram(bins: &[HistogramBin], color: &str, layout: Layout) -> Self {
        Self {
            data: vec![Trace::Bar {
                x: AxisValues::Numbers(bins.iter().map(HistogramBin::center).collect()),
                y: AxisValues::Counts(bins.iter().map(|b| b.count).collect()),
                name: None,
                text: None,
                width: Some(bins.iter().map(HistogramBin::width).collect()),
                marker: Marker {
                    color: Color::Single(color.to_string()),
                },
            }],
            layout,
        }
    }

    /// One bar per category, each in its own colour, labelled with its count.
    pub fn labelled_bar(
        labels: Vec<String>,
        counts: Vec<u64>,
        palette: &[&str],
        layout: Layout,
    ) -> Self {
        let colors = palette::cycle(palette, labels.len());
        let text = counts.iter().map(u64::to_string).collect();
        Self {
            data: vec![Trace::Bar {
                x: AxisValues::Labels(labels),
                y: AxisValues::Counts(counts),
                name: None,
                text: Some(text),
                width: None,
                marker: Marker {
                    color: Color::PerPoint(colors),
                },
            }],
            layout,
        }
    }

    /// Side-by-side bars: one trace per series, sharing the group axis.
    pub fn grouped_bar(
        series: Vec<(String, Vec<String>, Vec<u64>)>,
        palette: &[&str],
        mut layout: Layout,
    ) -> Self {
        let colors = palette::cycle(palette, series.len());
        layout.barmode = Some("group");
        Self {
            data: series
                .into_iter()
                .zip(colors)
                .map(|((name, groups, counts), color)| Trace::Bar {
                    x: AxisValues::Labels(groups),
                    y: AxisValues::Counts(counts),
                    name: Some(name),
                    text: None,
                    width: None,
                    marker: Marker {
                        color: Color::Single(color),
                    },
                })
                .collect(),
            layout,
        }
    }

    pub fn funnel(stages: &[(&str, u64)], palette: &[&str], layout: Layout) -> Self {
        Self {
            data: vec![Trace::Funnel {
                x: AxisValues::Counts(stages.iter().map(|(_, count)| *count).collect()),
                y: AxisValues::Labels(stages.iter().map(|(label, _)| label.to_string()).collect()),
                text: stages.iter().map(|(_, count)| count.to_string()).collect(),
                marker: Marker {
                    color: Color::PerPoint(palette::cycle(palette, stages.len())),
                },
            }],
            layout,
        }
    }

    pub fn line_with_markers(dates: Vec<NaiveDate>, counts: Vec<u64>, layout: Layout) -> Self {
        Self {
            data: vec![Trace::Scatter {
                x: AxisValues::Dates(dates),
                y: AxisValues::Counts(counts),
                mode: "lines+markers",
            }],
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn donut_serializes_as_plotly_pie_with_hole() {
        let slices = vec![
            CategoryCount {
                label: "Logged In".into(),
                count: 3,
                percent: 75.0,
            },
            CategoryCount {
                label: "Never Logged In".into(),
                count: 1,
                percent: 25.0,
            },
        ];
        let chart = ChartSpec::donut(&slices, &palette::PASTEL, 550, 400);

        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["hole"], 0.4);
        assert_eq!(value["data"][0]["labels"], json!(["Logged In", "Never Logged In"]));
        assert_eq!(value["data"][0]["values"], json!([3, 1]));
        assert_eq!(value["data"][0]["textinfo"], "percent+label");
        assert_eq!(value["data"][0]["hovertext"][1], "Never Logged In: 1 (25.0%)");
        assert_eq!(value["layout"], json!({ "width": 550, "height": 400 }));
    }

    #[test]
    fn histogram_uses_bin_centers_and_widths() {
        let bins = vec![
            HistogramBin {
                start: 0.0,
                end: 2.0,
                count: 4,
            },
            HistogramBin {
                start: 2.0,
                end: 4.0,
                count: 1,
            },
        ];

        let chart = ChartSpec::histogram(&bins, "#00bcd4", Layout::default());
        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["data"][0]["type"], "bar");
        assert_eq!(value["data"][0]["x"], json!([1.0, 3.0]));
        assert_eq!(value["data"][0]["y"], json!([4, 1]));
        assert_eq!(value["data"][0]["width"], json!([2.0, 2.0]));
        assert_eq!(value["data"][0]["marker"]["color"], "#00bcd4");
        assert!(value["data"][0].get("name").is_none());
    }

    #[test]
    fn grouped_bar_emits_one_trace_per_series() {
        let chart = ChartSpec::grouped_bar(
            vec![
                ("Logged In".into(), vec!["Verified".into()], vec![5]),
                ("Never Logged In".into(), vec!["Verified".into()], vec![1]),
            ],
            &palette::SET2,
            Layout::default(),
        );

        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["data"].as_array().unwrap().len(), 2);
        assert_eq!(value["data"][1]["name"], "Never Logged In");
        assert_eq!(value["layout"]["barmode"], "group");
    }

    #[test]
    fn line_serializes_dates_as_iso_strings() {
        let chart = ChartSpec::line_with_markers(
            vec![NaiveDate::from_ymd_opt(2016, 1, 5).unwrap()],
            vec![7],
            Layout::default().axes("Date", "Number of Registrations"),
        );

        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["data"][0]["type"], "scatter");
        assert_eq!(value["data"][0]["x"], json!(["2016-01-05"]));
        assert_eq!(value["data"][0]["mode"], "lines+markers");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Date");
    }

    #[test]
    fn axis_range_is_serialized_as_pair() {
        let axis = Axis::titled("Number of Logins").with_range(0.0, 10.0);

        let value = serde_json::to_value(&axis).unwrap();

        assert_eq!(value["range"], json!([0.0, 10.0]));
    }

    #[test]
    fn palette_cycle_repeats_when_categories_exceed_colors() {
        let colors = palette::cycle(&["a", "b"], 5);

        assert_eq!(colors, vec!["a", "b", "a", "b", "a"]);
    }
}
