use crate::points::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single placed design screenshot with its own canvas position and
/// optional AI feedback text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignIteration {
    pub id: String,
    pub label: String,
    #[serde(rename = "pageId")]
    pub page_id: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub position: Point,
    pub timestamp: String,
    pub feedback: Option<String>,
    /// True while an analysis request for this card is outstanding.
    #[serde(skip)]
    pub analysis_pending: bool,
}

impl DesignIteration {
    /// Whether the Analyze affordance should be offered. Suppressed once
    /// feedback exists and while a request is in flight.
    pub fn can_analyze(&self) -> bool {
        self.feedback.is_none() && !self.analysis_pending
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no card with id {0}")]
    UnknownCard(String),
    #[error("an analysis is already in flight for card {0}")]
    AlreadyPending(String),
    #[error("card {0} already has feedback")]
    AlreadyAnalyzed(String),
}

/// Insertion-ordered collection of design cards across all pages.
///
/// Cards are partitioned for display by `page_id`; there is no delete-card
/// operation. Every card's `page_id` references an existing page (callers
/// only add cards to the page they are looking at).
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<DesignIteration>,
    next_id: u64,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card on a page at an initial canvas position. The caller
    /// supplies the timestamp so this stays pure (the UI layer passes the
    /// current `Date` as an ISO string).
    pub fn add_card(
        &mut self,
        page_id: &str,
        image_url: &str,
        position: Point,
        timestamp: &str,
    ) -> &DesignIteration {
        self.next_id += 1;
        let card = DesignIteration {
            id: format!("card-{}", self.next_id),
            label: format!("Design {}", self.next_id),
            page_id: page_id.to_string(),
            image_url: image_url.to_string(),
            position,
            timestamp: timestamp.to_string(),
            feedback: None,
            analysis_pending: false,
        };
        self.cards.push(card);
        self.cards.last().expect("card was just pushed")
    }

    pub fn get(&self, id: &str) -> Option<&DesignIteration> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut DesignIteration> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Cards belonging to a page, in insertion order.
    pub fn cards_for_page<'a>(
        &'a self,
        page_id: &'a str,
    ) -> impl Iterator<Item = &'a DesignIteration> {
        self.cards.iter().filter(move |c| c.page_id == page_id)
    }

    /// Move a card by a canvas-space delta. Unknown ids are ignored (the
    /// drag that produced the delta referenced a live card; a stale id can
    /// only mean the page changed mid-gesture).
    pub fn move_card(&mut self, id: &str, delta: Point) {
        if let Some(card) = self.get_mut(id) {
            card.position = card.position.add(&delta);
        }
    }

    /// Mark an analysis as in flight. At most one outstanding analysis per
    /// card; a card that already has feedback is not re-analyzed.
    pub fn begin_analysis(&mut self, id: &str) -> Result<(), AnalysisError> {
        let card = self
            .get_mut(id)
            .ok_or_else(|| AnalysisError::UnknownCard(id.to_string()))?;
        if card.analysis_pending {
            return Err(AnalysisError::AlreadyPending(id.to_string()));
        }
        if card.feedback.is_some() {
            return Err(AnalysisError::AlreadyAnalyzed(id.to_string()));
        }
        card.analysis_pending = true;
        Ok(())
    }

    /// Attach feedback text to a card and settle the in-flight request.
    /// Idempotent; never changes selection or position.
    pub fn attach_feedback(&mut self, id: &str, text: &str) {
        if let Some(card) = self.get_mut(id) {
            card.feedback = Some(text.to_string());
            card.analysis_pending = false;
        }
    }

    /// Settle a failed analysis without touching any other card state.
    pub fn fail_analysis(&mut self, id: &str) {
        if let Some(card) = self.get_mut(id) {
            card.analysis_pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_card() -> (CardRegistry, String) {
        let mut reg = CardRegistry::new();
        let id = reg
            .add_card("page-1", "data:image/png;base64,AAAA", Point::ZERO, "2026-08-30T12:00:00Z")
            .id
            .clone();
        (reg, id)
    }

    #[test]
    fn add_card_appends_in_insertion_order() {
        let mut reg = CardRegistry::new();
        reg.add_card("page-1", "a.png", Point::ZERO, "t0");
        reg.add_card("page-2", "b.png", Point::ZERO, "t1");
        reg.add_card("page-1", "c.png", Point::new(5.0, 5.0), "t2");

        let urls: Vec<&str> = reg
            .cards_for_page("page-1")
            .map(|c| c.image_url.as_str())
            .collect();
        assert_eq!(urls, ["a.png", "c.png"]);
    }

    #[test]
    fn ids_and_labels_are_unique_and_sequential() {
        let mut reg = CardRegistry::new();
        let a = reg.add_card("p", "a.png", Point::ZERO, "t").id.clone();
        let b = reg.add_card("p", "b.png", Point::ZERO, "t").id.clone();
        assert_ne!(a, b);
        assert_eq!(reg.get(&b).unwrap().label, "Design 2");
    }

    #[test]
    fn move_card_accumulates_canvas_deltas() {
        let (mut reg, id) = registry_with_card();
        reg.move_card(&id, Point::new(10.0, -4.0));
        reg.move_card(&id, Point::new(-2.0, 1.0));
        assert_eq!(reg.get(&id).unwrap().position, Point::new(8.0, -3.0));
    }

    #[test]
    fn attach_feedback_is_idempotent_and_leaves_position() {
        let (mut reg, id) = registry_with_card();
        reg.move_card(&id, Point::new(3.0, 3.0));
        reg.attach_feedback(&id, "Nice hierarchy.");
        reg.attach_feedback(&id, "Nice hierarchy.");
        let card = reg.get(&id).unwrap();
        assert_eq!(card.feedback.as_deref(), Some("Nice hierarchy."));
        assert_eq!(card.position, Point::new(3.0, 3.0));
        assert!(!card.analysis_pending);
    }

    #[test]
    fn begin_analysis_guards_against_concurrent_requests() {
        let (mut reg, id) = registry_with_card();
        assert!(reg.begin_analysis(&id).is_ok());
        assert_eq!(
            reg.begin_analysis(&id),
            Err(AnalysisError::AlreadyPending(id.clone()))
        );
        assert!(!reg.get(&id).unwrap().can_analyze());
    }

    #[test]
    fn card_with_feedback_suppresses_analyze() {
        let (mut reg, id) = registry_with_card();
        reg.attach_feedback(&id, "done");
        assert!(!reg.get(&id).unwrap().can_analyze());
        assert_eq!(
            reg.begin_analysis(&id),
            Err(AnalysisError::AlreadyAnalyzed(id.clone()))
        );
    }

    #[test]
    fn failed_analysis_restores_the_analyze_affordance() {
        let (mut reg, id) = registry_with_card();
        reg.begin_analysis(&id).unwrap();
        reg.fail_analysis(&id);
        let card = reg.get(&id).unwrap();
        assert!(card.can_analyze());
        assert_eq!(card.feedback, None);
    }

    #[test]
    fn begin_analysis_on_unknown_card_errors() {
        let mut reg = CardRegistry::new();
        assert_eq!(
            reg.begin_analysis("card-404"),
            Err(AnalysisError::UnknownCard("card-404".into()))
        );
    }
}
