/// Request-scoped identity resolved by the JWT middleware. Handlers and
/// services never read role claims from request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Customer,
    Employee,
}

impl ActorKind {
    pub fn from_role(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Self::Customer),
            "admin" => Some(Self::Employee),
            _ => None,
        }
    }

    pub fn as_role(&self) -> &'static str {
        match self {
            Self::Customer => "user",
            Self::Employee => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub kind: ActorKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip() {
        assert_eq!(ActorKind::from_role("user"), Some(ActorKind::Customer));
        assert_eq!(ActorKind::from_role("admin"), Some(ActorKind::Employee));
        assert_eq!(ActorKind::Customer.as_role(), "user");
        assert_eq!(ActorKind::Employee.as_role(), "admin");
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(ActorKind::from_role("superadmin"), None);
    }
}
