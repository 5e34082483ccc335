use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::tracker_mode::TrackerMode;

impl TrackerMode {
    pub fn as_str(&self) -> &'static str
    {
        match self {
            TrackerMode::Own => "OWN",
            TrackerMode::Need => "NEED",
            TrackerMode::Update => "UPDATE",
            TrackerMode::Register => "REGISTER",
            TrackerMode::Exit => "EXIT",
        }
    }
}

impl FromStr for TrackerMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWN" => Ok(TrackerMode::Own),
            "NEED" => Ok(TrackerMode::Need),
            "UPDATE" => Ok(TrackerMode::Update),
            "REGISTER" => Ok(TrackerMode::Register),
            "EXIT" => Ok(TrackerMode::Exit),
            _ => Err(TrackerError::InvalidMode(s.to_string()))
        }
    }
}

impl fmt::Display for TrackerMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
