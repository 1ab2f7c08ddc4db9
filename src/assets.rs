//! Concurrent resolution of content image payloads.
//!
//! Runs before layout. Every referenced tag is fetched on its own task so that a
//! failing or slow tag never holds up or fails the others; a failed tag simply maps
//! to an absent payload, which the engine renders as nothing.

use quire_layout::ContentBlock;
use quire_traits::{ImageProvider, ResourceError};
use quire_types::{ImageTag, Manuscript, SharedImageData};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};

/// Outcome of one resolution run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    pub resolved: usize,
    /// Tags whose fetch failed, sorted.
    pub failed: Vec<ImageTag>,
}

/// Every image reference token in the manuscript, in first-appearance order, deduplicated.
pub fn collect_image_tags(manuscript: &Manuscript) -> Vec<ImageTag> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for chapter in &manuscript.chapters {
        for line in &chapter.lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let ContentBlock::ImageRef { token, .. } = ContentBlock::classify(line)
                && seen.insert(token.clone())
            {
                tags.push(token);
            }
        }
    }
    tags
}

/// Fetches the payload of every referenced tag that does not have one yet.
///
/// At most `max_in_flight` provider calls run at once. Provider calls may block, so
/// each runs on the blocking pool.
pub async fn resolve_image_payloads(
    manuscript: &mut Manuscript,
    provider: Arc<dyn ImageProvider>,
    max_in_flight: usize,
) -> ResolutionReport {
    let pending: Vec<ImageTag> = collect_image_tags(manuscript)
        .into_iter()
        .filter(|tag| manuscript.image_payload(tag).is_none())
        .collect();
    if pending.is_empty() {
        return ResolutionReport::default();
    }
    log::info!(
        "Resolving {} image(s) through {}.",
        pending.len(),
        provider.name()
    );

    let permits = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut tasks: JoinSet<(ImageTag, Result<SharedImageData, ResourceError>)> = JoinSet::new();
    for tag in pending {
        let provider = Arc::clone(&provider);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let result = fetch_one(provider, permits, &tag).await;
            (tag, result)
        });
    }

    let mut report = ResolutionReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((tag, Ok(data))) => {
                log::debug!("Resolved image '{}' ({} bytes).", tag, data.len());
                manuscript.content_images.insert(tag, Some(data));
                report.resolved += 1;
            }
            Ok((tag, Err(e))) => {
                log::warn!("Image '{}' could not be fetched, rendering without it: {}", tag, e);
                manuscript.content_images.insert(tag.clone(), None);
                report.failed.push(tag);
            }
            Err(e) => log::warn!("Image fetch task did not complete: {}", e),
        }
    }
    report.failed.sort();
    report
}

async fn fetch_one(
    provider: Arc<dyn ImageProvider>,
    permits: Arc<Semaphore>,
    tag: &ImageTag,
) -> Result<SharedImageData, ResourceError> {
    let _permit = permits
        .acquire_owned()
        .await
        .map_err(|e| ResourceError::LoadFailed {
            path: tag.to_string(),
            message: e.to_string(),
        })?;
    let owned = tag.clone();
    task::spawn_blocking(move || provider.fetch(&owned))
        .await
        .map_err(|e| ResourceError::LoadFailed {
            path: tag.to_string(),
            message: e.to_string(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_traits::InMemoryImageProvider;
    use quire_types::Chapter;

    fn book() -> Manuscript {
        Manuscript::new("Atlas")
            .with_chapter(Chapter::new(
                "One",
                "[IMAGE_PROMPT: harbour]\ntext\n  [IMAGE_PROMPT: harbour]  \n",
            ))
            .with_chapter(Chapter::new("Two", "Look: [IMAGE_PROMPT: lighthouse]"))
    }

    #[test]
    fn test_collect_tags_deduplicates_in_order() {
        let tags = collect_image_tags(&book());
        assert_eq!(
            tags,
            vec![
                ImageTag::from("[IMAGE_PROMPT: harbour]"),
                ImageTag::from("[IMAGE_PROMPT: lighthouse]"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_tag_does_not_affect_others() {
        let provider = InMemoryImageProvider::new();
        provider.add("[IMAGE_PROMPT: harbour]", vec![1, 2, 3]).unwrap();

        let mut manuscript = book();
        let report = resolve_image_payloads(&mut manuscript, Arc::new(provider), 1).await;

        assert_eq!(report.resolved, 1);
        assert_eq!(report.failed, vec![ImageTag::from("[IMAGE_PROMPT: lighthouse]")]);
        assert!(manuscript
            .image_payload(&ImageTag::from("[IMAGE_PROMPT: harbour]"))
            .is_some());
        assert!(manuscript
            .content_images
            .get(&ImageTag::from("[IMAGE_PROMPT: lighthouse]"))
            .is_some_and(|p| p.is_none()));
    }

    #[tokio::test]
    async fn test_existing_payloads_are_not_refetched() {
        let mut manuscript = book().with_image("[IMAGE_PROMPT: harbour]", vec![9]);
        let report =
            resolve_image_payloads(&mut manuscript, Arc::new(InMemoryImageProvider::new()), 4)
                .await;

        assert_eq!(report.resolved, 0);
        assert_eq!(report.failed.len(), 1);
        let kept = manuscript
            .image_payload(&ImageTag::from("[IMAGE_PROMPT: harbour]"))
            .unwrap();
        assert_eq!(**kept, vec![9]);
    }
}
