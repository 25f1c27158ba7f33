// src/board/props.rs
use super::Board;
use crate::{
    config::options::{BucketFilter, PageKind},
    filter::filter_props,
    model::PropRecord,
    render::{Card, PropCard},
};

#[derive(Clone, Debug, Default)]
pub struct PropsBoard {
    records: Vec<PropRecord>,
}

impl Board for PropsBoard {
    type Record = PropRecord;
    type View = BucketFilter;

    const KIND: PageKind = PageKind::Props;
    const TITLE: &'static str = "Prop Analysis";

    fn from_records(records: Vec<PropRecord>) -> Self { Self { records } }
    fn records(&self) -> &[PropRecord] { &self.records }

    fn cards(&self, filter: BucketFilter) -> Vec<Card> {
        filter_props(&self.records, filter)
            .into_iter()
            .map(|r| Card::Prop(PropCard::from_record(r)))
            .collect()
    }

    fn headers(&self) -> &'static [&'static str] { &PropCard::HEADERS }
}
