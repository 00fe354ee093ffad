//! 内存目录 - 协作方只读接口的进程内实现
//!
//! 测试与本地运行使用；生产环境由宿主应用注入其数据存储的实现。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::model::{Recipient, RoomProfile, UserProfile};
use crate::domain::repository::{RoomReader, UserReader};
use crate::error::LookupError;

#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, UserProfile>>,
    tokens: RwLock<HashMap<String, String>>,
    rooms: RwLock<HashMap<String, RoomProfile>>,
    members: RwLock<HashMap<String, Vec<Recipient>>>,
}

impl InMemoryDirectory {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn insert_user(&self, profile: UserProfile) {
        self.users
            .write()
            .await
            .insert(profile.user_id.clone(), profile);
    }

    pub async fn insert_device_token(&self, user_id: &str, token: &str) {
        self.tokens
            .write()
            .await
            .insert(user_id.to_string(), token.to_string());
    }

    pub async fn insert_room(&self, room: RoomProfile) {
        self.rooms.write().await.insert(room.room_id.clone(), room);
    }

    pub async fn insert_member(&self, room_id: &str, member: Recipient) {
        self.members
            .write()
            .await
            .entry(room_id.to_string())
            .or_default()
            .push(member);
    }
}

#[async_trait]
impl UserReader for InMemoryDirectory {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserProfile>, LookupError> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_device_token(&self, user_id: &str) -> Result<Option<String>, LookupError> {
        Ok(self.tokens.read().await.get(user_id).cloned())
    }
}

#[async_trait]
impl RoomReader for InMemoryDirectory {
    async fn find_room(&self, room_id: &str) -> Result<Option<RoomProfile>, LookupError> {
        Ok(self.rooms.read().await.get(room_id).cloned())
    }

    async fn alarm_enabled_members(&self, room_id: &str) -> Result<Vec<Recipient>, LookupError> {
        let members = self.members.read().await;
        Ok(members
            .get(room_id)
            .map(|list| {
                list.iter()
                    .filter(|member| member.alarm_enabled)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
