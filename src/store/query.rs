//! # Question List Queries
//!
//! A list query is an ordered set of stages applied to the `questions`
//! collection: the category match always comes first, followed by at most one
//! selection stage.

/// How many matching questions to return, and which ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every matching question, in store order
    #[default]
    All,
    /// The first `n` matching questions
    First(u64),
    /// `n` distinct questions chosen at random
    Sample(u64),
}

/// A single pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Keep questions listing this category; `None` keeps everything
    Match { category: Option<String> },
    /// Random sample of the given size
    Sample(u64),
    /// Truncate to the given count
    Limit(u64),
}

/// Filtered, limited or randomized question listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionQuery {
    pub category: Option<String>,
    pub selection: Selection,
}

impl QuestionQuery {
    /// Query returning every question
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Stages in execution order
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![Stage::Match {
            category: self.category.clone(),
        }];

        match self.selection {
            Selection::All => {}
            Selection::First(n) => stages.push(Stage::Limit(n)),
            Selection::Sample(n) => stages.push(Stage::Sample(n)),
        }

        stages
    }
}
