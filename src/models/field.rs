use serde::Serialize;

/// The text inputs the two forms are made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Identifier,
    Password,
    Nickname,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Identifier => "identifier",
            FieldKind::Password => "password",
            FieldKind::Nickname => "nickname",
        }
    }

    /// Short name used by the shell (`id`, `pw`, `nick`).
    pub fn from_alias(s: &str) -> Option<Self> {
        match s {
            "id" | "identifier" => Some(FieldKind::Identifier),
            "pw" | "password" => Some(FieldKind::Password),
            "nick" | "nickname" => Some(FieldKind::Nickname),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value counts as filled in when it is present and not empty.
#[inline]
pub fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(FieldKind::from_alias("id"), Some(FieldKind::Identifier));
        assert_eq!(FieldKind::from_alias("pw"), Some(FieldKind::Password));
        assert_eq!(FieldKind::from_alias("nickname"), Some(FieldKind::Nickname));
        assert_eq!(FieldKind::from_alias("email"), None);
    }

    #[test]
    fn non_empty_rejects_absent_and_empty() {
        assert!(!non_empty(None));
        assert!(!non_empty(Some("")));
        assert!(non_empty(Some(" ")));
        assert!(non_empty(Some("a")));
    }
}
