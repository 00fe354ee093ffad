//! 收件人解析
//!
//! 好友类事件的引用用户缺失视为硬失败（整次分发中止）；日程事件的批量
//! 收件人列表则按条件静默过滤。两条路径的差异是有意保留的。

use tracing::debug;

use crate::domain::model::{DomainEvent, Recipient, UserProfile};
use crate::domain::repository::{RoomReaderRef, UserReaderRef};
use crate::error::ResolutionError;

use super::composer::NoticeContent;

/// 单次分发的解析结果：通知内容 + 收件人集合
#[derive(Debug)]
pub struct ResolvedNotice {
    pub content: NoticeContent,
    pub recipients: Vec<Recipient>,
}

/// 收件人解析器 - 只读查询，不持有可变状态
pub struct RecipientResolver {
    users: UserReaderRef,
    rooms: RoomReaderRef,
}

impl RecipientResolver {
    pub fn new(users: UserReaderRef, rooms: RoomReaderRef) -> Self {
        Self { users, rooms }
    }

    pub async fn resolve(&self, event: &DomainEvent) -> Result<ResolvedNotice, ResolutionError> {
        match event {
            DomainEvent::FriendRequested {
                requester_id,
                addressee_id,
            } => {
                let requester = self.require_user(requester_id).await?;
                let addressee = self.require_user(addressee_id).await?;
                let recipient = self.recipient_from(addressee).await?;
                Ok(ResolvedNotice {
                    content: NoticeContent::friend_request(&requester.nickname, requester_id),
                    recipients: vec![recipient],
                })
            }
            DomainEvent::FriendAccepted {
                requester_id,
                addressee_id,
            } => {
                let requester = self.require_user(requester_id).await?;
                let addressee = self.require_user(addressee_id).await?;
                let recipient = self.recipient_from(requester).await?;
                Ok(ResolvedNotice {
                    content: NoticeContent::friend_accept(&addressee.nickname, addressee_id),
                    recipients: vec![recipient],
                })
            }
            DomainEvent::ScheduleBatchUpdated {
                trip_id,
                room_id,
                actor_user_id,
                actor_nickname,
                day_number,
            } => {
                let room = self
                    .rooms
                    .find_room(room_id)
                    .await?
                    .ok_or_else(|| ResolutionError::RoomNotFound {
                        room_id: room_id.clone(),
                    })?;

                let members = self.rooms.alarm_enabled_members(room_id).await?;
                let recipients: Vec<Recipient> = members
                    .into_iter()
                    .filter(|member| {
                        member.alarm_enabled && member.active && member.user_id != *actor_user_id
                    })
                    .collect();

                // 排除操作者后集合为空是合法情况：零发送，不算错误
                debug!(
                    room_id = %room_id,
                    recipient_count = recipients.len(),
                    "schedule update recipients resolved"
                );

                Ok(ResolvedNotice {
                    content: NoticeContent::schedule_update(
                        &room.display_name,
                        actor_nickname,
                        *day_number,
                        trip_id,
                    ),
                    recipients,
                })
            }
        }
    }

    async fn require_user(&self, user_id: &str) -> Result<UserProfile, ResolutionError> {
        self.users
            .find_user(user_id)
            .await?
            .ok_or_else(|| ResolutionError::UserNotFound {
                user_id: user_id.to_string(),
            })
    }

    async fn recipient_from(&self, profile: UserProfile) -> Result<Recipient, ResolutionError> {
        let device_token = self.users.find_device_token(&profile.user_id).await?;
        Ok(Recipient {
            user_id: profile.user_id,
            nickname: profile.nickname,
            device_token,
            alarm_enabled: true,
            active: profile.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::model::{RoomProfile, UserProfile};
    use crate::infrastructure::lookup::InMemoryDirectory;

    fn user(id: &str, nickname: &str) -> UserProfile {
        UserProfile {
            user_id: id.to_string(),
            nickname: nickname.to_string(),
            active: true,
        }
    }

    fn member(id: &str, active: bool, token: Option<&str>) -> Recipient {
        Recipient {
            user_id: id.to_string(),
            nickname: format!("nick-{id}"),
            device_token: token.map(|t| t.to_string()),
            alarm_enabled: true,
            active,
        }
    }

    async fn directory() -> Arc<InMemoryDirectory> {
        let dir = InMemoryDirectory::shared();
        dir.insert_user(user("u-req", "jun")).await;
        dir.insert_user(user("u-addr", "mina")).await;
        dir.insert_device_token("u-addr", "token-addr").await;
        dir.insert_device_token("u-req", "token-req").await;
        dir
    }

    /// 测试：好友申请 -> 收件人为被申请人，文案引用申请人昵称
    #[tokio::test]
    async fn test_friend_request_targets_addressee() {
        let dir = directory().await;
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::FriendRequested {
            requester_id: "u-req".to_string(),
            addressee_id: "u-addr".to_string(),
        };
        let notice = resolver.resolve(&event).await.unwrap();

        assert_eq!(notice.recipients.len(), 1);
        assert_eq!(notice.recipients[0].user_id, "u-addr");
        assert_eq!(notice.recipients[0].device_token.as_deref(), Some("token-addr"));
        assert!(notice.content.body.contains("jun"));
    }

    /// 测试：好友接受 -> 收件人为原申请人，文案引用被申请人昵称
    #[tokio::test]
    async fn test_friend_accept_targets_requester() {
        let dir = directory().await;
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::FriendAccepted {
            requester_id: "u-req".to_string(),
            addressee_id: "u-addr".to_string(),
        };
        let notice = resolver.resolve(&event).await.unwrap();

        assert_eq!(notice.recipients[0].user_id, "u-req");
        assert!(notice.content.body.contains("mina"));
    }

    /// 测试：引用用户缺失时好友事件整体中止
    #[tokio::test]
    async fn test_friend_event_aborts_on_missing_user() {
        let dir = InMemoryDirectory::shared();
        dir.insert_user(user("u-req", "jun")).await;
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::FriendRequested {
            requester_id: "u-req".to_string(),
            addressee_id: "u-ghost".to_string(),
        };
        let err = resolver.resolve(&event).await.unwrap_err();
        assert!(matches!(err, ResolutionError::UserNotFound { user_id } if user_id == "u-ghost"));
    }

    /// 测试：日程事件排除操作者与非活跃成员
    #[tokio::test]
    async fn test_schedule_update_filters_members() {
        let dir = InMemoryDirectory::shared();
        dir.insert_room(RoomProfile {
            room_id: "room-1".to_string(),
            display_name: "Jeju 2026".to_string(),
        })
        .await;
        dir.insert_member("room-1", member("u-actor", true, Some("t-actor"))).await;
        dir.insert_member("room-1", member("u-a", true, Some("t-a"))).await;
        dir.insert_member("room-1", member("u-b", false, Some("t-b"))).await;
        dir.insert_member("room-1", member("u-c", true, None)).await;
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::ScheduleBatchUpdated {
            trip_id: "trip-7".to_string(),
            room_id: "room-1".to_string(),
            actor_user_id: "u-actor".to_string(),
            actor_nickname: "jun".to_string(),
            day_number: 2,
        };
        let notice = resolver.resolve(&event).await.unwrap();

        // u-actor 被排除，u-b 非活跃被排除；u-c 无 token 但在解析阶段保留
        let ids: Vec<&str> = notice.recipients.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u-a", "u-c"]);
        assert_eq!(notice.content.title, "Jeju 2026");
    }

    /// 测试：房间缺失时日程事件中止
    #[tokio::test]
    async fn test_schedule_update_aborts_on_missing_room() {
        let dir = InMemoryDirectory::shared();
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::ScheduleBatchUpdated {
            trip_id: "trip-7".to_string(),
            room_id: "room-missing".to_string(),
            actor_user_id: "u-actor".to_string(),
            actor_nickname: "jun".to_string(),
            day_number: 2,
        };
        let err = resolver.resolve(&event).await.unwrap_err();
        assert!(matches!(err, ResolutionError::RoomNotFound { .. }));
    }

    /// 测试：排除操作者后收件人为空是合法结果
    #[tokio::test]
    async fn test_schedule_update_empty_recipients_is_ok() {
        let dir = InMemoryDirectory::shared();
        dir.insert_room(RoomProfile {
            room_id: "room-1".to_string(),
            display_name: "Jeju 2026".to_string(),
        })
        .await;
        dir.insert_member("room-1", member("u-actor", true, Some("t-actor"))).await;
        let resolver = RecipientResolver::new(dir.clone(), dir);

        let event = DomainEvent::ScheduleBatchUpdated {
            trip_id: "trip-7".to_string(),
            room_id: "room-1".to_string(),
            actor_user_id: "u-actor".to_string(),
            actor_nickname: "jun".to_string(),
            day_number: 2,
        };
        let notice = resolver.resolve(&event).await.unwrap();
        assert!(notice.recipients.is_empty());
    }
}
