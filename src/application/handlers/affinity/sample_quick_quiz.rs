//! SampleQuickQuiz - Query handler drawing the popular-majors quiz questions.

use rand::Rng;
use std::sync::Arc;

use crate::domain::catalog::Question;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogSource;

/// Handler for drawing quick-quiz questions.
pub struct SampleQuickQuizHandler {
    catalog: Arc<dyn CatalogSource>,
    quiz_size: usize,
}

impl SampleQuickQuizHandler {
    pub fn new(catalog: Arc<dyn CatalogSource>, quiz_size: usize) -> Self {
        Self { catalog, quiz_size }
    }

    /// Draws `quiz_size` distinct questions with the thread-local RNG.
    pub async fn handle(&self) -> Result<Vec<Question>, DomainError> {
        let catalog = self.catalog.load_questions().await?;
        let mut rng = rand::thread_rng();
        Ok(catalog.sample(self.quiz_size, &mut rng))
    }

    /// Same as `handle`, with a caller-supplied RNG.
    pub async fn handle_with_rng<R: Rng + Send>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Question>, DomainError> {
        let catalog = self.catalog.load_questions().await?;
        Ok(catalog.sample(self.quiz_size, rng))
    }
}
