use inviter_core::InviteError;

/// 邀请结果分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteClassification {
    Success,
    /// 账号被限流，需要冷却指定秒数
    RateLimited { seconds: u64 },
    /// 目标本身不可邀请（已是成员、被封禁、隐私限制）
    PolicySkip(InviteError),
    Failed(InviteError),
}

impl InviteClassification {
    pub fn classify(result: Result<(), InviteError>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(InviteError::RateLimited { seconds }) => Self::RateLimited { seconds },
            Err(err) if err.is_policy_skip() => Self::PolicySkip(err),
            Err(err) => Self::Failed(err),
        }
    }

    /// 结果日志中记录的错误描述
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Success => None,
            Self::RateLimited { seconds } => {
                Some(InviteError::RateLimited { seconds: *seconds }.to_string())
            }
            Self::PolicySkip(err) | Self::Failed(err) => Some(err.to_string()),
        }
    }

    /// 只有成功之后才需要等待邀请间隔
    pub fn needs_delay(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success() {
        let classification = InviteClassification::classify(Ok(()));
        assert_eq!(classification, InviteClassification::Success);
        assert!(classification.needs_delay());
        assert!(classification.detail().is_none());
    }

    #[test]
    fn test_classify_rate_limited() {
        let classification =
            InviteClassification::classify(Err(InviteError::RateLimited { seconds: 60 }));
        assert_eq!(classification, InviteClassification::RateLimited { seconds: 60 });
        assert_eq!(classification.detail().as_deref(), Some("FLOOD_WAIT_60"));
        assert!(!classification.needs_delay());
    }

    #[test]
    fn test_classify_policy_skips() {
        for err in [
            InviteError::AlreadyMember,
            InviteError::Banned,
            InviteError::PrivacyRestricted,
        ] {
            let classification = InviteClassification::classify(Err(err.clone()));
            assert_eq!(classification, InviteClassification::PolicySkip(err));
        }
    }

    #[test]
    fn test_classify_other_failure() {
        let classification =
            InviteClassification::classify(Err(InviteError::other("PEER_ID_INVALID")));
        assert_eq!(classification.detail().as_deref(), Some("PEER_ID_INVALID"));
        assert!(matches!(classification, InviteClassification::Failed(_)));
    }
}
