//! Sequential classification pipeline
//!
//! Record source feeds the fetcher, the fetcher feeds the classifier, the
//! classifier feeds the reporter. One record is fully processed before the
//! next begins; there is no concurrency anywhere in this loop.

pub mod report;

use crate::classify::Classifier;
use crate::fetch::PageFetcher;
use crate::llm::CompletionProvider;
use crate::records::Record;
use anyhow::Result;
use report::Reporter;
use std::io::Write;

/// Drives the whole run: fetch each record's page and classify it.
pub struct ClassifyPipeline<F, P> {
    fetcher: F,
    classifier: Classifier<P>,
}

impl<F: PageFetcher, P: CompletionProvider> ClassifyPipeline<F, P> {
    pub fn new(fetcher: F, classifier: Classifier<P>) -> Self {
        Self {
            fetcher,
            classifier,
        }
    }

    /// Process every record in order.
    ///
    /// A record whose page cannot be fetched is logged and skipped. Every
    /// other failure (an unreadable row, any classification-call failure)
    /// aborts the run. The progress counter ticks once per read record,
    /// before its outcome is known.
    pub async fn run<W: Write>(
        &self,
        records: impl IntoIterator<Item = Result<Record>>,
        reporter: &mut Reporter<W>,
    ) -> Result<()> {
        for record in records {
            let record = record?;
            reporter.tick();

            match self.fetcher.fetch(&record.url).await {
                Ok(page) => {
                    let verdict = self.classifier.classify(&page).await?;
                    reporter.classification(&record.name, verdict);
                }
                Err(err) => reporter.fetch_failed(&record.url, &err),
            }
        }

        reporter.finish();
        Ok(())
    }
}
