use chrono::{DateTime, Duration, Utc};
use serenity::all::InviteCreateEvent;

/// The parts of an invite-creation event that go into the invite log.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteDetails {
    pub code: String,
    /// `User::tag()` of the inviter, absent for invites created by integrations.
    pub inviter_tag: Option<String>,
    /// Channel the invite points at.
    pub channel_id: u64,
    pub created_at: DateTime<Utc>,
    /// Lifetime in seconds; 0 means the invite never expires.
    pub max_age_secs: u32,
}

impl InviteDetails {
    pub fn from_event(event: &InviteCreateEvent) -> Self {
        // Discord sends sub-second precision; the RFC 3339 rendering keeps it.
        let created_at = DateTime::parse_from_rfc3339(&event.created_at.to_string())
            .map(|at| at.with_timezone(&Utc))
            .ok()
            .or_else(|| DateTime::from_timestamp(event.created_at.unix_timestamp(), 0))
            .unwrap_or_else(Utc::now);

        Self {
            code: event.code.clone(),
            inviter_tag: event.inviter.as_ref().map(|user| user.tag()),
            channel_id: event.channel_id.get(),
            created_at,
            max_age_secs: event.max_age,
        }
    }

    /// Moment the invite stops working, or `None` if it never expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.max_age_secs == 0 {
            return None;
        }

        Some(self.created_at + Duration::seconds(i64::from(self.max_age_secs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn invite(max_age_secs: u32) -> InviteDetails {
        InviteDetails {
            code: "abc123".to_string(),
            inviter_tag: Some("inviter".to_string()),
            channel_id: 10,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            max_age_secs,
        }
    }

    fn invite_event(inviter: Option<serde_json::Value>) -> InviteCreateEvent {
        let mut payload = serde_json::json!({
            "channel_id": "10",
            "code": "abc123",
            "created_at": "2024-06-01T00:00:00.123+00:00",
            "guild_id": "100",
            "max_age": 3600,
            "max_uses": 0,
            "temporary": false,
            "uses": 0,
        });
        if let Some(inviter) = inviter {
            payload["inviter"] = inviter;
        }

        serde_json::from_value(payload).unwrap()
    }

    /// Tests reading a gateway invite with an inviter.
    ///
    /// Expected: inviter tag, channel and max age copied, created_at keeps its
    /// milliseconds
    #[test]
    fn from_event_reads_invite() {
        let event = invite_event(Some(serde_json::json!({
            "id": "1",
            "username": "mod_person",
            "discriminator": "0",
            "avatar": null,
            "global_name": null,
        })));

        let details = InviteDetails::from_event(&event);

        assert_eq!(details.code, "abc123");
        assert_eq!(details.inviter_tag.as_deref(), Some("mod_person"));
        assert_eq!(details.channel_id, 10);
        assert_eq!(details.max_age_secs, 3600);
        assert_eq!(
            details.created_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::milliseconds(123)
        );
        assert_eq!(
            details
                .expires_at()
                .map(|at| at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
            Some("2024-06-01T01:00:00.123Z".to_string())
        );
    }

    /// Tests an invite created without a user, e.g. by an integration.
    ///
    /// Expected: inviter_tag is None
    #[test]
    fn from_event_without_inviter() {
        let details = InviteDetails::from_event(&invite_event(None));

        assert!(details.inviter_tag.is_none());
    }

    #[test]
    fn zero_max_age_never_expires() {
        assert!(invite(0).expires_at().is_none());
    }

    #[test]
    fn expiry_adds_max_age() {
        assert_eq!(
            invite(86_400).expires_at(),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap())
        );
    }
}
