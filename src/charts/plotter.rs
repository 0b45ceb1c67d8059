//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot.

use super::model::{self, MapPoint};
use crate::data::{CategoryLabel, DerivedView, GeoPoint, StationLocation};
use egui::{Color32, RichText};
use egui_plot::{
    Bar, BarChart, Corner, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const TREND_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
pub const STATION_COLOR: Color32 = Color32::from_rgb(46, 134, 222);
pub const HOTSPOT_COLOR: Color32 = Color32::from_rgb(233, 30, 99); // Pink

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

const CHART_HEIGHT: f32 = 320.0;
const PIE_HEIGHT: f32 = 420.0;
const MAP_HEIGHT: f32 = 380.0;

/// Message shown in place of a chart whose view has no rows.
pub const NO_DATA: &str = "No data to display.";

/// Creates the dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a pie slice.
    pub fn slice_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the placeholder used for empty views.
    pub fn draw_no_data(ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(format!("ℹ {NO_DATA}")).color(Color32::GRAY));
            });
    }

    /// Bar chart of the top stations.
    pub fn draw_station_bars(ui: &mut egui::Ui, view: &DerivedView<String>) {
        let entries = model::station_bars(view);
        if entries.is_empty() {
            Self::draw_no_data(ui);
            return;
        }

        ui.label(RichText::new("Top 15 Police Stations by Crime Volume").strong());
        let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();
        let bars: Vec<Bar> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| Bar::new(i as f64, e.value).name(&e.label).width(0.6))
            .collect();

        Plot::new("station_totals")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .include_y(0.0)
            .y_axis_label("Total Crime Count")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("Crime count"));
            });
    }

    /// Pie chart of crime categories with a side legend and percentage labels.
    pub fn draw_category_pie(ui: &mut egui::Ui, view: &DerivedView<CategoryLabel>) {
        let slices = model::category_slices(view);
        if slices.is_empty() {
            Self::draw_no_data(ui);
            return;
        }

        ui.label(RichText::new("Crime Distribution by Category (Top Categories)").strong());
        Plot::new("category_totals")
            .height(PIE_HEIGHT)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .include_x(-1.1)
            .include_x(1.1)
            .include_y(-1.1)
            .include_y(1.1)
            .legend(Legend::default().position(Corner::RightTop))
            .show(ui, |plot_ui| {
                for (i, slice) in slices.iter().enumerate() {
                    let color = Self::slice_color(i);
                    for polygon in slice.polygons() {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(polygon))
                                .fill_color(color)
                                .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                                .name(&slice.label),
                        );
                    }
                }
                for slice in &slices {
                    let [x, y] = slice.label_position();
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(&slice.percent_label).color(Color32::WHITE).strong(),
                        )
                        .name(&slice.label),
                    );
                }
            });
    }

    /// Line chart with markers of the yearly totals.
    pub fn draw_yearly_trend(ui: &mut egui::Ui, view: &DerivedView<i64>) {
        let points = model::trend_points(view);
        if points.is_empty() {
            Self::draw_no_data(ui);
            return;
        }

        ui.label(RichText::new("Yearly Crime Trend").strong());
        Plot::new("yearly_trend")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Total Crimes")
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract().abs() < 1e-6 {
                    format!("{:.0}", mark.value)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .color(TREND_COLOR)
                        .width(2.0)
                        .name("Total crimes"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .radius(4.0)
                        .color(TREND_COLOR),
                );
            });
    }

    /// Point map of every station coordinate.
    pub fn draw_station_map(ui: &mut egui::Ui, view: &DerivedView<StationLocation>) {
        Self::draw_point_map(ui, "station_map", &model::station_map_points(view), STATION_COLOR);
    }

    /// Point map of the top hotspots.
    pub fn draw_hotspot_map(ui: &mut egui::Ui, view: &DerivedView<GeoPoint>) {
        Self::draw_point_map(ui, "hotspot_map", &model::hotspot_map_points(view), HOTSPOT_COLOR);
    }

    /// Scatter of points with longitude on x and latitude on y.
    fn draw_point_map(ui: &mut egui::Ui, id: &str, points: &[MapPoint], color: Color32) {
        if points.is_empty() {
            Self::draw_no_data(ui);
            return;
        }

        Plot::new(id)
            .height(MAP_HEIGHT)
            .data_aspect(1.0)
            .allow_scroll(false)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .label_formatter(|name, value| {
                if name.is_empty() {
                    format!("lat {:.4}\nlon {:.4}", value.y, value.x)
                } else {
                    format!("{name}\nlat {:.4}\nlon {:.4}", value.y, value.x)
                }
            })
            .show(ui, |plot_ui| {
                for point in points {
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[point.lon, point.lat]]))
                            .radius(5.0)
                            .color(color)
                            .name(format!("{} ({})", point.label, point.crime_count)),
                    );
                }
            });
    }
}
