//! Per-form reference-data snapshots.
//!
//! Each form fetches its own snapshot at mount time and never shares it:
//! a snapshot reflects server state at fetch time only, and mutations in
//! sibling forms do not invalidate it. That staleness window is a
//! documented property of the system, not an oversight.

use tracing::warn;

use crate::api::RegistryApi;
use crate::types::{Land, Owner};

/// Which listings a snapshot should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kinds {
    pub owners: bool,
    pub lands: bool,
}

impl Kinds {
    pub const OWNERS: Kinds = Kinds {
        owners: true,
        lands: false,
    };
    pub const LANDS: Kinds = Kinds {
        owners: false,
        lands: true,
    };
    pub const ALL: Kinds = Kinds {
        owners: true,
        lands: true,
    };
}

/// Point-in-time copy of the owner and land listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceSnapshot {
    pub owners: Vec<Owner>,
    pub lands: Vec<Land>,
}

impl ReferenceSnapshot {
    /// Fetch the requested listings, concurrently when both are needed.
    ///
    /// Returns once every outstanding request has settled. A failed read
    /// leaves that kind empty and is logged; it never blocks the other
    /// kind. The two reads are independent, so a torn snapshot (one list
    /// populated, one empty) is possible and callers must tolerate it.
    pub async fn fetch(api: &dyn RegistryApi, kinds: Kinds) -> Self {
        let owners_fut = async {
            if kinds.owners {
                Some(api.owners().await)
            } else {
                None
            }
        };
        let lands_fut = async {
            if kinds.lands {
                Some(api.lands().await)
            } else {
                None
            }
        };
        let (owners_res, lands_res) = tokio::join!(owners_fut, lands_fut);

        let owners = match owners_res {
            Some(Ok(owners)) => owners,
            Some(Err(err)) => {
                warn!(error = %err, "failed to fetch owners");
                Vec::new()
            }
            None => Vec::new(),
        };
        let lands = match lands_res {
            Some(Ok(lands)) => lands,
            Some(Err(err)) => {
                warn!(error = %err, "failed to fetch lands");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self { owners, lands }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MockRegistry};

    fn owner(id: &str) -> Owner {
        Owner {
            id: id.into(),
            name: "Asha Verma".into(),
            contact: "9876543210".into(),
            email: "asha@example.com".into(),
            proof_id: "AADH-4411".into(),
        }
    }

    fn land(id: &str) -> Land {
        Land {
            id: id.into(),
            location: "Pune, MH".into(),
            area: "2 Acres".into(),
            market_value: 4_500_000.0,
            property_type: "Residential".into(),
            survey_number: "SRV-101".into(),
            current_owner_id: "o1".into(),
        }
    }

    #[tokio::test]
    async fn fetches_both_kinds() {
        let api = MockRegistry::new()
            .with_owners(vec![owner("o1")])
            .with_lands(vec![land("l1")]);

        let snapshot = ReferenceSnapshot::fetch(&api, Kinds::ALL).await;

        assert_eq!(snapshot.owners.len(), 1);
        assert_eq!(snapshot.lands.len(), 1);
    }

    #[tokio::test]
    async fn partial_failure_leaves_the_failed_kind_empty() {
        // Owners fail, lands succeed: the snapshot is torn but usable.
        let api = MockRegistry::new().with_lands(vec![land("l1")]);

        let snapshot = ReferenceSnapshot::fetch(&api, Kinds::ALL).await;

        assert!(snapshot.owners.is_empty());
        assert_eq!(snapshot.lands.len(), 1);
    }

    #[tokio::test]
    async fn unrequested_kinds_are_not_fetched() {
        let api = MockRegistry::new().with_owners(vec![owner("o1")]);

        let snapshot = ReferenceSnapshot::fetch(&api, Kinds::OWNERS).await;

        assert_eq!(snapshot.owners.len(), 1);
        assert!(snapshot.lands.is_empty());
        assert_eq!(api.calls(Endpoint::Lands), 0);
    }

    #[tokio::test]
    async fn every_mount_is_a_fresh_read() {
        let api = MockRegistry::new().with_owners(vec![owner("o1")]);

        ReferenceSnapshot::fetch(&api, Kinds::OWNERS).await;
        ReferenceSnapshot::fetch(&api, Kinds::OWNERS).await;

        assert_eq!(api.calls(Endpoint::Owners), 2);
    }
}
