//! The paginated response payload.

use serde::{Deserialize, Serialize};

use super::MeteorRecord;

/// One page of filtered records, plus the pre-pagination match count.
///
/// This is both the wire shape of `/meteors` and the payload stored in the
/// response cache, so a cache hit replays exactly the bytes a miss produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeteorPage {
    /// The records of the requested page, in source order.
    pub data: Vec<MeteorRecord>,
    /// Number of records matching the filters, independent of paging.
    pub total: u64,
}
