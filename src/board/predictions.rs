// src/board/predictions.rs
use super::Board;
use crate::{
    config::options::PageKind,
    filter::rank_predictions,
    model::PredictionRecord,
    render::{Card, PredictionCard},
};

/// Ranking is fixed (accuracy cut, then probability), so the view is `()`.
#[derive(Clone, Debug, Default)]
pub struct PredictionsBoard {
    records: Vec<PredictionRecord>,
}

impl Board for PredictionsBoard {
    type Record = PredictionRecord;
    type View = ();

    const KIND: PageKind = PageKind::Predictions;
    const TITLE: &'static str = "Predictions";

    fn from_records(records: Vec<PredictionRecord>) -> Self { Self { records } }
    fn records(&self) -> &[PredictionRecord] { &self.records }

    fn cards(&self, _view: ()) -> Vec<Card> {
        rank_predictions(&self.records)
            .into_iter()
            .map(|r| Card::Prediction(PredictionCard::from_record(r)))
            .collect()
    }

    fn headers(&self) -> &'static [&'static str] { &PredictionCard::HEADERS }
}
