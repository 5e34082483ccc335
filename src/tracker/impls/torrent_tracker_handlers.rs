use log::{debug, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::tracker_request::TrackerRequest;
use crate::tracker::enums::tracker_response::TrackerResponse;
use crate::tracker::structs::node_key::NodeKey;
use crate::tracker::structs::search_response::SearchResponse;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Parses a raw request body and dispatches it. Rejections are counted and
    /// returned to the caller; nothing is retried here.
    pub fn handle_message(&self, data: &[u8]) -> Result<TrackerResponse, TrackerError>
    {
        match TrackerRequest::from_slice(data) {
            Ok(request) => Ok(self.handle_request(request)),
            Err(error) => {
                match error {
                    TrackerError::InvalidMode(_) => self.update_stats(StatsEvent::InvalidModes, 1),
                    _ => self.update_stats(StatsEvent::InvalidRequests, 1),
                };
                debug!("[REQUEST] Rejected: {error}");
                Err(error)
            }
        }
    }

    pub fn handle_request(&self, request: TrackerRequest) -> TrackerResponse
    {
        match request {
            TrackerRequest::Own { node_id, address, filename } => {
                self.update_stats(StatsEvent::OwnHandled, 1);
                self.add_ownership(&filename, NodeKey::new(node_id, address));
                TrackerResponse::status("File owner added")
            }
            TrackerRequest::Need { node_id, filename } => {
                self.update_stats(StatsEvent::NeedHandled, 1);
                info!("[NEED] Node {node_id} is searching for {filename}");
                let search_result = self.search_owners(&filename);
                TrackerResponse::Search(SearchResponse {
                    dest_node_id: node_id,
                    search_result,
                    filename,
                })
            }
            TrackerRequest::Update { node_id } => {
                self.update_stats(StatsEvent::UpdateHandled, 1);
                self.record_request(node_id);
                TrackerResponse::status("Database updated")
            }
            TrackerRequest::Register { node_id, address } => {
                self.update_stats(StatsEvent::RegisterHandled, 1);
                let key = NodeKey::new(node_id, address);
                if self.check_in(&key) {
                    debug!("[REGISTER] Node {key} checked in");
                } else {
                    self.register(key.clone());
                    info!("[REGISTER] Node {key} registered");
                }
                TrackerResponse::status("Node registered")
            }
            TrackerRequest::Exit { node_id, address } => {
                self.update_stats(StatsEvent::ExitHandled, 1);
                self.exit_node(&NodeKey::new(node_id, address));
                TrackerResponse::status("Node removed")
            }
        }
    }
}
