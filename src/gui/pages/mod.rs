//! Navigation pages.
//!
//! Selecting a [`Page`] builds its [`PageContent`] once (loading the dataset,
//! aggregating, listing screenshots) and every frame afterwards only draws
//! that content.

mod about;
mod analysis;
mod home;
mod overview;
mod screenshots;

pub use analysis::{AnalysisMemo, AnalysisPanel};
pub use overview::OverviewPanel;

use super::gallery::GalleryListing;
use super::images::ImageCache;
use crate::data::DatasetLoader;
use std::path::Path;

/// Sidebar entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    DatasetOverview,
    DataAnalysis,
    Screenshots,
    AboutResearch,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::DatasetOverview,
        Page::DataAnalysis,
        Page::Screenshots,
        Page::AboutResearch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::DatasetOverview => "Dataset Overview",
            Page::DataAnalysis => "Data Analysis",
            Page::Screenshots => "Screenshots",
            Page::AboutResearch => "About Research",
        }
    }

    /// Gather everything this page shows.
    pub fn build(self, sources: &mut PageSources<'_>) -> PageContent {
        match self {
            Page::Home => PageContent::Home,
            Page::DatasetOverview => {
                PageContent::Overview(OverviewPanel::build(&sources.loader.dataset()))
            }
            Page::DataAnalysis => PageContent::Analysis(AnalysisPanel::build(
                &sources.loader.dataset(),
                sources.memo,
            )),
            Page::Screenshots => {
                PageContent::Screenshots(GalleryListing::scan(sources.screenshots_dir))
            }
            Page::AboutResearch => PageContent::About,
        }
    }
}

/// Inputs a page may draw from when it is built.
pub struct PageSources<'a> {
    pub loader: &'a mut DatasetLoader,
    pub memo: &'a mut AnalysisMemo,
    pub screenshots_dir: &'a Path,
}

/// The built body of the selected page.
#[derive(Debug, Clone)]
pub enum PageContent {
    Home,
    Overview(OverviewPanel),
    Analysis(AnalysisPanel),
    Screenshots(GalleryListing),
    About,
}

impl PageContent {
    pub fn show(&self, ui: &mut egui::Ui, images: &mut ImageCache, cover_image: &Path) {
        match self {
            PageContent::Home => home::show(ui, images, cover_image),
            PageContent::Overview(panel) => overview::show(ui, panel),
            PageContent::Analysis(panel) => analysis::show(ui, panel),
            PageContent::Screenshots(listing) => screenshots::show(ui, images, listing),
            PageContent::About => about::show(ui),
        }
    }

    /// Warning the page displays instead of its data, if any.
    pub fn warning(&self) -> Option<&str> {
        match self {
            PageContent::Overview(OverviewPanel::Unavailable(msg))
            | PageContent::Analysis(AnalysisPanel::Unavailable(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }
}

/// Footer drawn under every page.
pub fn footer(ui: &mut egui::Ui) {
    ui.add_space(20.0);
    ui.separator();
    ui.label(
        egui::RichText::new("© 2026 | Crime Data Analysis Dashboard").color(egui::Color32::GRAY),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
station,category,location_x,location_y,year,crime_count
A,Theft,30.1,-25.4,2020,5
A,Theft,30.1,-25.4,2021,3
B,Fraud,29.9,-26.0,2020,7
";

    const HEADER_ONLY: &str = "station,category,location_x,location_y,year,crime_count\n";

    struct Fixture {
        _dir: TempDir,
        loader: DatasetLoader,
        memo: AnalysisMemo,
        screenshots: std::path::PathBuf,
    }

    impl Fixture {
        fn new(csv: Option<&str>) -> Self {
            let dir = TempDir::new().unwrap();
            let data = dir.path().join("data").join("crime_data.csv");
            if let Some(contents) = csv {
                fs::create_dir_all(data.parent().unwrap()).unwrap();
                fs::write(&data, contents).unwrap();
            }
            let screenshots = dir.path().join("screenshots");
            Self {
                loader: DatasetLoader::new(data),
                memo: AnalysisMemo::default(),
                screenshots,
                _dir: dir,
            }
        }

        fn build(&mut self, page: Page) -> PageContent {
            let mut sources = PageSources {
                loader: &mut self.loader,
                memo: &mut self.memo,
                screenshots_dir: &self.screenshots,
            };
            page.build(&mut sources)
        }
    }

    fn render(content: &PageContent) {
        let ctx = egui::Context::default();
        let mut images = ImageCache::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                content.show(ui, &mut images, Path::new("assets/missing-cover.jpeg"));
                footer(ui);
            });
        });
    }

    #[test]
    fn test_page_labels_are_unique() {
        let mut labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Page::ALL.len());
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_absent_dataset_degrades_data_pages_only() {
        let mut fixture = Fixture::new(None);

        let overview = fixture.build(Page::DatasetOverview);
        let analysis = fixture.build(Page::DataAnalysis);
        assert!(overview.warning().unwrap().contains("Dataset not found"));
        assert!(analysis.warning().unwrap().contains("Dataset not found"));

        let home = fixture.build(Page::Home);
        let about = fixture.build(Page::AboutResearch);
        assert!(home.warning().is_none());
        assert!(about.warning().is_none());

        for content in [&home, &overview, &analysis, &about] {
            render(content);
        }
    }

    #[test]
    fn test_loaded_dataset_builds_panels() {
        let mut fixture = Fixture::new(Some(SAMPLE));

        match fixture.build(Page::DataAnalysis) {
            PageContent::Analysis(AnalysisPanel::Ready(views)) => {
                assert_eq!(views.grand_total, 15);
                assert_eq!(views.station_totals.rows[0].key, "A");
            }
            other => panic!("expected analysis views, got {other:?}"),
        }

        match fixture.build(Page::DatasetOverview) {
            PageContent::Overview(OverviewPanel::Ready(overview)) => {
                assert_eq!(overview.rows, 3);
            }
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_dataset_renders_placeholders() {
        let mut fixture = Fixture::new(Some(HEADER_ONLY));

        let content = fixture.build(Page::DataAnalysis);
        match &content {
            PageContent::Analysis(AnalysisPanel::Ready(views)) => {
                assert_eq!(views.grand_total, 0);
                assert!(views.station_totals.is_empty());
                assert!(views.category_totals.is_empty());
                assert!(views.yearly_trend.is_empty());
                assert!(views.station_locations.is_empty());
                assert!(views.hotspots.is_empty());
            }
            other => panic!("expected empty analysis views, got {other:?}"),
        }
        assert!(content.warning().is_none());
        render(&content);

        let overview = fixture.build(Page::DatasetOverview);
        assert!(matches!(
            overview,
            PageContent::Overview(OverviewPanel::Ready(_))
        ));
        render(&overview);
    }

    #[test]
    fn test_every_page_renders_with_data() {
        let mut fixture = Fixture::new(Some(SAMPLE));
        for page in Page::ALL {
            render(&fixture.build(page));
        }
    }

    #[test]
    fn test_screenshots_page_without_folder() {
        let mut fixture = Fixture::new(None);

        let content = fixture.build(Page::Screenshots);
        assert!(matches!(
            content,
            PageContent::Screenshots(GalleryListing::MissingFolder(_))
        ));
        render(&content);
    }
}
