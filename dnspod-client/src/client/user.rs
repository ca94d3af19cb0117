//! `User.*` actions

use serde::Deserialize;

use crate::error::Result;
use crate::types::User;

use super::{DnspodClient, Resource};

#[derive(Debug, Deserialize)]
struct UserInfo {
    user: User,
}

impl DnspodClient {
    /// Account details of the token owner (`User.Detail`).
    pub async fn get_user_info(&self) -> Result<User> {
        let payload = self.payload();

        let envelope = self
            .call(Resource::User, "Detail", &payload, "could not get user info")
            .await?;
        let info: UserInfo = envelope.required("info")?;
        Ok(info.user)
    }
}
