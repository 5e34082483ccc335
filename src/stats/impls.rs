//! Statistics implementation blocks.

/// `get_stats`, `update_stats` and `set_stats` on the tracker.
pub mod torrent_tracker;
