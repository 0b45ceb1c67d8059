//! Crime Data Analysis Dashboard main application
//! Main window with navigation panel and page body.

use crate::config::Config;
use crate::data::DatasetLoader;
use crate::gui::images::ImageCache;
use crate::gui::nav_panel::{NavAction, NavPanel};
use crate::gui::pages::{self, AnalysisMemo, Page, PageContent, PageSources};
use egui::SidePanel;
use tracing::{debug, warn};

/// Main application window.
pub struct DashboardApp {
    config: Config,
    loader: DatasetLoader,
    memo: AnalysisMemo,
    images: ImageCache,
    nav_panel: NavPanel,
    content: PageContent,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: Config) -> Self {
        let loader = DatasetLoader::new(config.dataset.path.clone());
        let mut app = Self {
            config,
            loader,
            memo: AnalysisMemo::default(),
            images: ImageCache::default(),
            nav_panel: NavPanel::new(),
            content: PageContent::Home,
        };
        app.navigate(Page::default());
        app
    }

    /// Rebuild the page body for `page`.
    fn navigate(&mut self, page: Page) {
        debug!(page = page.label(), "navigating");
        self.nav_panel.selected = page;

        let mut sources = PageSources {
            loader: &mut self.loader,
            memo: &mut self.memo,
            screenshots_dir: &self.config.assets.screenshots_dir,
        };
        self.content = page.build(&mut sources);

        if let Some(message) = self.content.warning() {
            warn!(page = page.label(), "{message}");
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Navigation
        let action = SidePanel::left("navigation")
            .min_width(200.0)
            .max_width(260.0)
            .show(ctx, |ui| self.nav_panel.show(ui))
            .inner;

        if let NavAction::Navigate(page) = action {
            self.navigate(page);
        }

        // Central panel - selected page
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.content
                        .show(ui, &mut self.images, &self.config.assets.cover_image);
                    pages::footer(ui);
                });
        });
    }
}
