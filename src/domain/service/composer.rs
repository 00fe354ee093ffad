//! 通知内容组装

use crate::domain::model::{EventKind, PushNotification, Recipient};

/// 好友类通知的固定标题（应用名）
pub const APP_TITLE: &str = "TripMate";

/// 单个事件解析出的通知内容 - 同一事件的所有收件人共享
#[derive(Debug, Clone)]
pub struct NoticeContent {
    pub kind: EventKind,
    pub reference_id: String,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl NoticeContent {
    pub fn friend_request(requester_nickname: &str, requester_id: &str) -> Self {
        Self {
            kind: EventKind::FriendRequest,
            reference_id: requester_id.to_string(),
            title: APP_TITLE.to_string(),
            body: format!("{requester_nickname} sent you a friend request."),
            image_url: None,
        }
    }

    pub fn friend_accept(addressee_nickname: &str, addressee_id: &str) -> Self {
        Self {
            kind: EventKind::FriendAccept,
            reference_id: addressee_id.to_string(),
            title: APP_TITLE.to_string(),
            body: format!("You are now friends with {addressee_nickname}."),
            image_url: None,
        }
    }

    /// 日程更新通知以房间展示名为标题，引用所属行程
    pub fn schedule_update(
        room_display_name: &str,
        actor_nickname: &str,
        day_number: u32,
        trip_id: &str,
    ) -> Self {
        Self {
            kind: EventKind::ScheduleUpdate,
            reference_id: trip_id.to_string(),
            title: room_display_name.to_string(),
            body: format!("{actor_nickname} updated day {day_number} of the itinerary."),
            image_url: None,
        }
    }
}

/// 为单个收件人组装一条推送消息
///
/// 收件人没有设备 token 时不产生任何消息对象（静默跳过，不算错误）。
pub fn compose(content: &NoticeContent, recipient: &Recipient) -> Option<PushNotification> {
    let device_token = recipient.device_token.as_deref()?;
    if device_token.is_empty() {
        return None;
    }

    Some(PushNotification {
        kind: content.kind,
        reference_id: content.reference_id.clone(),
        title: content.title.clone(),
        body: content.body.clone(),
        image_url: content.image_url.clone(),
        device_token: device_token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient(token: Option<&str>) -> Recipient {
        Recipient {
            user_id: "u-1".to_string(),
            nickname: "mina".to_string(),
            device_token: token.map(|t| t.to_string()),
            alarm_enabled: true,
            active: true,
        }
    }

    /// 测试：好友申请文案与固定标题
    #[test]
    fn test_friend_request_content() {
        let content = NoticeContent::friend_request("jun", "u-9");
        assert_eq!(content.title, APP_TITLE);
        assert_eq!(content.body, "jun sent you a friend request.");
        assert_eq!(content.reference_id, "u-9");
        assert_eq!(content.kind, EventKind::FriendRequest);
    }

    /// 测试：好友接受文案
    #[test]
    fn test_friend_accept_content() {
        let content = NoticeContent::friend_accept("mina", "u-2");
        assert_eq!(content.body, "You are now friends with mina.");
        assert_eq!(content.title, APP_TITLE);
    }

    /// 测试：日程更新以房间名为标题
    #[test]
    fn test_schedule_update_content() {
        let content = NoticeContent::schedule_update("Jeju 2026", "jun", 3, "trip-7");
        assert_eq!(content.title, "Jeju 2026");
        assert_eq!(content.body, "jun updated day 3 of the itinerary.");
        assert_eq!(content.reference_id, "trip-7");
    }

    /// 测试：有 token 的收件人得到一条新消息
    #[test]
    fn test_compose_with_token() {
        let content = NoticeContent::friend_request("jun", "u-9");
        let message = compose(&content, &recipient(Some("token-a"))).unwrap();
        assert_eq!(message.device_token, "token-a");
        assert_eq!(message.body, content.body);
    }

    /// 测试：缺少 token 不产生消息对象
    #[test]
    fn test_compose_without_token_yields_nothing() {
        let content = NoticeContent::friend_request("jun", "u-9");
        assert!(compose(&content, &recipient(None)).is_none());
        assert!(compose(&content, &recipient(Some(""))).is_none());
    }
}
