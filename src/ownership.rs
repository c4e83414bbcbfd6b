// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ownership checks for instance-level resources.
//!
//! Two resource kinds exist with different authorization policies:
//! catalog resources (certification definitions) are shared and carry no
//! owner, while instance resources (a user's earned certifications) belong
//! to exactly one user. Every read or mutation of an instance resource
//! must pass the single ownership predicate below.
//!
//! A failed check renders as "not found", never "forbidden": the service
//! does not reveal whether a row exists under another owner.

use crate::auth::AuthenticatedUser;

/// Trait for resources that belong to a single user.
pub trait OwnedResource {
    /// The owning user's id.
    fn owner_id(&self) -> i64;
}

/// The authorization predicate applied after the guard: true iff the
/// resource's owner is the authenticated subject.
pub fn authorize(identity: &AuthenticatedUser, resource: &impl OwnedResource) -> bool {
    resource.owner_id() == identity.user_id
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        owner: i64,
    }

    impl OwnedResource for TestResource {
        fn owner_id(&self) -> i64 {
            self.owner
        }
    }

    fn identity(user_id: i64) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id,
            username: format!("user{user_id}"),
            expires_at: 0,
        }
    }

    #[test]
    fn owner_is_authorized() {
        let resource = TestResource { owner: 1 };
        assert!(authorize(&identity(1), &resource));
    }

    #[test]
    fn non_owner_is_not_authorized() {
        let resource = TestResource { owner: 1 };
        assert!(!authorize(&identity(2), &resource));
    }
}
