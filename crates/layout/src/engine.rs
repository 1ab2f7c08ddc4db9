use crate::config::LayoutConfig;
use crate::nodes::chapter::ChapterRenderer;
use crate::nodes::front_matter::FrontMatter;
use crate::nodes::image::{decodable_content_images, usable};
use crate::nodes::index::IndexRenderer;
use crate::output::{LaidOutDocument, Page, PageKind};
use crate::pagination::PaginationController;
use crate::{ImageKey, LayoutEnvironment, LayoutError};
use quire_style::FontFamily;
use quire_traits::{AverageAdvanceMeasurer, TextMeasurer};
use quire_types::Manuscript;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Turns a manuscript into a complete, ordered page list.
///
/// Layout runs in two passes. The first builds the front matter, reserves a
/// placeholder index page and lays out every chapter while recording the page
/// each one starts on. The second fills the placeholder from those records,
/// appending overflow index pages at the end of the document.
pub struct LayoutEngine {
    config: LayoutConfig,
    measurer: Arc<dyn TextMeasurer>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self { config, measurer }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn measurer(&self) -> &Arc<dyn TextMeasurer> {
        &self.measurer
    }

    /// # Errors
    ///
    /// Returns `LayoutError::Structural` when the manuscript has no title or the
    /// configuration leaves no room for content. Image problems are never errors.
    pub fn layout(&self, manuscript: &Manuscript) -> Result<LaidOutDocument, LayoutError> {
        self.config.validate()?;
        if manuscript.title.trim().is_empty() {
            return Err(LayoutError::Structural(
                "Manuscript has no title".to_string(),
            ));
        }

        let started = Instant::now();
        let mut resources = HashMap::new();

        let background = usable(&ImageKey::Background, manuscript.background_image.as_ref());
        let cover = usable(&ImageKey::Cover, manuscript.cover_image.as_ref());

        let env = LayoutEnvironment {
            config: &self.config,
            measurer: self.measurer.as_ref(),
            theme: manuscript.theme_color.clone(),
            family: FontFamily::from_id(&manuscript.font_family),
            labels: manuscript.language.labels(),
            has_background: background.is_some(),
        };
        if let Some(data) = background {
            resources.insert(ImageKey::Background, data);
        }

        // Pass 1: front matter, reserved index page, chapters.
        let mut pages = Vec::new();
        let front = FrontMatter::new(&env);
        if let Some(data) = cover {
            pages.push(front.cover_page(1));
            resources.insert(ImageKey::Cover, data);
        }
        pages.push(front.title_page(
            pages.len() + 1,
            &manuscript.title,
            manuscript.author.as_deref(),
        ));
        let index_page = pages.len() + 1;
        pages.push(Page::new(index_page, PageKind::Index, env.page_size()));

        let images = decodable_content_images(manuscript);
        let renderer = ChapterRenderer::new(&env, &images);
        let mut records = Vec::with_capacity(manuscript.chapters.len());
        {
            let mut pager = PaginationController::new(&env, &mut pages, index_page + 1);
            for (i, chapter) in manuscript.chapters.iter().enumerate() {
                records.push(renderer.render(i + 1, chapter, &mut pager, &mut resources));
            }
        }

        // Pass 2: every start page is known, fill the index.
        let index_entries = IndexRenderer::new(&env).fill(&mut pages, index_page, &records)?;

        log::info!(
            "Laid out '{}': {} chapters on {} pages in {:.2?} ({} measurer)",
            manuscript.title,
            records.len(),
            pages.len(),
            started.elapsed(),
            self.measurer.name()
        );

        Ok(LaidOutDocument {
            pages,
            resources,
            chapter_records: records,
            index_entries,
            index_page,
        })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(
            LayoutConfig::default(),
            Arc::new(AverageAdvanceMeasurer::default()),
        )
    }
}
