// Thu Oct 15 2026 - Alex

/// A single signature field: either a wildcard or a concrete requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint<T> {
    Any,
    Exactly(T),
}

impl<T> Constraint<T> {
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Any => None,
            Self::Exactly(value) => Some(value),
        }
    }
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T> From<Option<T>> for Constraint<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Exactly(value),
            None => Self::Any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_allows_everything() {
        let any: Constraint<u16> = Constraint::Any;
        assert!(any.is_any());
        assert_eq!(any.value(), None);
    }

    #[test]
    fn test_exactly_carries_value() {
        let exact = Constraint::Exactly(9u16);
        assert!(!exact.is_any());
        assert_eq!(exact.value(), Some(&9));
        assert_eq!(Constraint::from(Some(3)), Constraint::Exactly(3));
        assert_eq!(Constraint::<u8>::from(None), Constraint::Any);
    }
}
