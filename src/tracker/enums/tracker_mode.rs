use serde::{Deserialize, Serialize};

/// The `mode` field of a coordination request.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrackerMode {
    /// A node announces it holds a file.
    Own,
    /// A node looks for holders of a file.
    Need,
    /// A node reports it served a request.
    Update,
    /// A node registers, or checks in again.
    Register,
    /// A node leaves on purpose.
    Exit,
}
