//! JSON body POSTed to the external service.

use std::collections::BTreeMap;

use external_authn_sdk::UserProfile;
use serde::Serialize;

/// Wire form of a [`UserProfile`]:
/// `{"groups": [..], "roles": [..], "attributes": {"name": "first value"}}`.
///
/// An attribute without values is sent as `""` so the key stays visible
/// to the external service.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserPayload<'a> {
    pub groups: &'a [String],
    pub roles: &'a [String],
    pub attributes: BTreeMap<&'a str, &'a str>,
}

impl<'a> UserPayload<'a> {
    #[must_use]
    pub fn from_profile(user: &'a UserProfile) -> Self {
        let attributes = user
            .attributes
            .iter()
            .map(|(name, values)| (name.as_str(), values.first().map_or("", String::as_str)))
            .collect();

        Self {
            groups: &user.groups,
            roles: &user.roles,
            attributes,
        }
    }

    /// Serialize to the request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
