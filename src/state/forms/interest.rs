//! Single-choice interest selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Area of interest a registrant can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Development,
    Design,
    Marketing,
    Sales,
}

impl Interest {
    /// All options in display order
    pub const ALL: [Interest; 4] = [
        Interest::Development,
        Interest::Design,
        Interest::Marketing,
        Interest::Sales,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Development => "Development",
            Interest::Design => "Design",
            Interest::Marketing => "Marketing",
            Interest::Sales => "Sales",
        }
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Development => Self::Design,
            Self::Design => Self::Marketing,
            Self::Marketing => Self::Sales,
            Self::Sales => Self::Development,
        }
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Development => Self::Sales,
            Self::Design => Self::Development,
            Self::Marketing => Self::Design,
            Self::Sales => Self::Marketing,
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interest '{0}'")]
pub struct UnknownInterest(pub String);

impl FromStr for Interest {
    type Err = UnknownInterest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interest::ALL
            .into_iter()
            .find(|interest| interest.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownInterest(s.to_string()))
    }
}

/// At most one chosen interest
///
/// Selecting a value replaces whatever was chosen before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestSelection {
    selected: Option<Interest>,
}

impl InterestSelection {
    pub fn select(&mut self, interest: Interest) {
        self.selected = Some(interest);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Interest> {
        self.selected
    }

    pub fn is_set(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_selected(&self, interest: Interest) -> bool {
        self.selected == Some(interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous_choice() {
        let mut selection = InterestSelection::default();
        assert!(!selection.is_set());

        selection.select(Interest::Design);
        selection.select(Interest::Sales);

        assert_eq!(selection.selected(), Some(Interest::Sales));
        assert!(!selection.is_selected(Interest::Design));
        let chosen = Interest::ALL
            .iter()
            .filter(|i| selection.is_selected(**i))
            .count();
        assert_eq!(chosen, 1);
    }

    #[test]
    fn test_clear_unsets_selection() {
        let mut selection = InterestSelection::default();
        selection.select(Interest::Marketing);
        selection.clear();
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sales".parse::<Interest>(), Ok(Interest::Sales));
        assert_eq!(" Design ".parse::<Interest>(), Ok(Interest::Design));
        assert!("cooking".parse::<Interest>().is_err());
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Interest::Sales.next(), Interest::Development);
        assert_eq!(Interest::Development.prev(), Interest::Sales);
        for interest in Interest::ALL {
            assert_eq!(interest.next().prev(), interest);
        }
    }
}
