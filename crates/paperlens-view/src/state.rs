//! View-model for the search page.
//!
//! One `PageState` holds the whole page: the current search view plus one
//! `CardState` per rendered paper. All mutation goes through transition
//! methods; completions carry the generation they started under, and a
//! completion for a stale generation is dropped. That replaces the
//! last-response-wins race the DOM version had with a deterministic
//! last-submission-wins rule.

use paperlens_common::model::{PaperAnalysis, PaperSummary};

/// Abstract preview length in characters. Longer abstracts get a
/// Read More control; shorter ones render without one.
pub const ABSTRACT_PREVIEW_CHARS: usize = 500;

/// Visibility of one card's abstract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbstractView {
    Collapsed,
    Expanded,
}

/// State of one card's analysis panel.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPanel {
    Hidden,
    Loading,
    Shown(PaperAnalysis),
    Errored,
}

impl AnalysisPanel {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisPanel::Loading)
    }
}

/// One rendered paper result block, the unit of per-paper UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub paper: PaperSummary,
    pub abstract_view: AbstractView,
    pub analysis: AnalysisPanel,
}

impl CardState {
    pub fn new(paper: PaperSummary) -> Self {
        Self {
            paper,
            abstract_view: AbstractView::Collapsed,
            analysis: AnalysisPanel::Hidden,
        }
    }

    /// Whether this card's abstract exceeds the preview length. An absent
    /// abstract counts as its short fallback text and is never truncated.
    pub fn abstract_truncated(&self) -> bool {
        self.paper
            .abstract_text
            .as_deref()
            .is_some_and(|a| a.chars().nth(ABSTRACT_PREVIEW_CHARS).is_some())
    }
}

/// The search region of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchView {
    #[default]
    Idle,
    Loaded {
        query: String,
        cards: Vec<CardState>,
    },
    Failed {
        message: String,
    },
}

/// Whole-page state. Lives behind the web layer's shared state; every
/// handler mutates it through these methods and re-projects the page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    generation: u64,
    loading: bool,
    view: SearchView,
}

impl PageState {
    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new search: clear prior results and error state, raise the
    /// loading flag, and hand out the generation the caller must present
    /// when committing.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.view = SearchView::Idle;
        self.generation
    }

    /// Commit search results. Returns false (and changes nothing) when a
    /// newer submission has superseded `generation`.
    pub fn commit_results(
        &mut self,
        generation: u64,
        query: String,
        papers: Vec<PaperSummary>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.view = SearchView::Loaded {
            query,
            cards: papers.into_iter().map(CardState::new).collect(),
        };
        true
    }

    /// Record a failed search. Stale generations are dropped like stale
    /// commits.
    pub fn fail_search(&mut self, generation: u64, message: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.view = SearchView::Failed { message };
        true
    }

    pub fn cards(&self) -> &[CardState] {
        match &self.view {
            SearchView::Loaded { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn card(&self, paper_id: &str) -> Option<&CardState> {
        self.cards().iter().find(|c| c.paper.id == paper_id)
    }

    fn card_mut(&mut self, paper_id: &str) -> Option<&mut CardState> {
        match &mut self.view {
            SearchView::Loaded { cards, .. } => {
                cards.iter_mut().find(|c| c.paper.id == paper_id)
            }
            _ => None,
        }
    }

    /// Flip one card's abstract between collapsed and expanded. No-op for
    /// unknown ids and for cards whose abstract was never truncated.
    pub fn toggle_abstract(&mut self, paper_id: &str) -> bool {
        let Some(card) = self.card_mut(paper_id) else {
            return false;
        };
        if !card.abstract_truncated() {
            return false;
        }
        card.abstract_view = match card.abstract_view {
            AbstractView::Collapsed => AbstractView::Expanded,
            AbstractView::Expanded => AbstractView::Collapsed,
        };
        true
    }

    /// Move one card's analysis panel to Loading and return the generation
    /// the completion must present. Returns None (no-op, no network call
    /// warranted) for an empty or unknown paper id, or when that card is
    /// already mid-analysis. Other cards are unaffected.
    pub fn begin_analysis(&mut self, paper_id: &str) -> Option<u64> {
        if paper_id.is_empty() {
            return None;
        }
        let generation = self.generation;
        let card = self.card_mut(paper_id)?;
        if card.analysis.is_loading() {
            return None;
        }
        card.analysis = AnalysisPanel::Loading;
        Some(generation)
    }

    /// Commit a finished analysis to its own card. Dropped when the card
    /// set has been replaced since the fetch started.
    pub fn complete_analysis(
        &mut self,
        generation: u64,
        paper_id: &str,
        analysis: PaperAnalysis,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.card_mut(paper_id) {
            Some(card) => {
                card.analysis = AnalysisPanel::Shown(analysis);
                true
            }
            None => false,
        }
    }

    /// Record a failed analysis: the panel becomes Errored and the trigger
    /// re-renders as an enabled Retry control.
    pub fn fail_analysis(&mut self, generation: u64, paper_id: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.card_mut(paper_id) {
            Some(card) => {
                card.analysis = AnalysisPanel::Errored;
                true
            }
            None => false,
        }
    }
}
