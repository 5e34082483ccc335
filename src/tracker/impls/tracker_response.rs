use crate::tracker::enums::tracker_response::TrackerResponse;

impl TrackerResponse {
    pub fn status(message: &str) -> TrackerResponse
    {
        TrackerResponse::Status { status: message.to_string() }
    }
}
