use serde_json::Value;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::tracker_mode::TrackerMode;
use crate::tracker::enums::tracker_request::TrackerRequest;
use crate::tracker::structs::request_payload::RequestPayload;

impl TrackerRequest {
    pub fn from_slice(data: &[u8]) -> Result<TrackerRequest, TrackerError>
    {
        let value: Value = serde_json::from_slice(data)
            .map_err(|error| TrackerError::InvalidRequest(error.to_string()))?;
        Self::from_value(value)
    }

    /// Validates a decoded JSON body. The mode is checked first so an unknown
    /// mode is reported as such even when the rest of the payload is broken.
    pub fn from_value(value: Value) -> Result<TrackerRequest, TrackerError>
    {
        let Value::Object(mut body) = value else {
            return Err(TrackerError::InvalidRequest(String::from("request body must be a JSON object")));
        };
        if body.is_empty() {
            return Err(TrackerError::InvalidRequest(String::from("empty request")));
        }

        let mode: TrackerMode = match body.remove("mode") {
            Some(Value::String(mode)) => mode.parse()?,
            Some(other) => return Err(TrackerError::InvalidMode(other.to_string())),
            None => return Err(TrackerError::InvalidMode(String::from("missing mode"))),
        };

        let payload: RequestPayload = serde_json::from_value(Value::Object(body))
            .map_err(|error| TrackerError::InvalidRequest(error.to_string()))?;

        fn required<T>(field: Option<T>, name: &str) -> Result<T, TrackerError> {
            field.ok_or_else(|| TrackerError::InvalidRequest(format!("missing {name}")))
        }

        let node_id = required(payload.node_id, "node_id")?;
        match mode {
            TrackerMode::Own => Ok(TrackerRequest::Own {
                node_id,
                address: required(payload.address, "address")?,
                filename: required(payload.filename, "filename")?,
            }),
            TrackerMode::Need => Ok(TrackerRequest::Need {
                node_id,
                filename: required(payload.filename, "filename")?,
            }),
            TrackerMode::Update => Ok(TrackerRequest::Update { node_id }),
            TrackerMode::Register => Ok(TrackerRequest::Register {
                node_id,
                address: required(payload.address, "address")?,
            }),
            TrackerMode::Exit => Ok(TrackerRequest::Exit {
                node_id,
                address: required(payload.address, "address")?,
            }),
        }
    }

    pub fn mode(&self) -> TrackerMode
    {
        match self {
            TrackerRequest::Own { .. } => TrackerMode::Own,
            TrackerRequest::Need { .. } => TrackerMode::Need,
            TrackerRequest::Update { .. } => TrackerMode::Update,
            TrackerRequest::Register { .. } => TrackerMode::Register,
            TrackerRequest::Exit { .. } => TrackerMode::Exit,
        }
    }
}
