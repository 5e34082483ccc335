use serde::Serialize;
use crate::tracker::structs::search_response::SearchResponse;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum TrackerResponse {
    Status { status: String },
    Search(SearchResponse),
}
