//! Menu choice parsing
//!
//! Maps the numeric selector typed at the main menu onto an action.

/// One action selectable from the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    DisplayInfo,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection from user input
    ///
    /// Anything other than the digits 1-6 is an invalid choice.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::CreateAccount),
            "2" => Some(Self::Deposit),
            "3" => Some(Self::Withdraw),
            "4" => Some(Self::CheckBalance),
            "5" => Some(Self::DisplayInfo),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CreateAccount));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Deposit));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Withdraw));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::CheckBalance));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::DisplayInfo));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::CheckBalance));
    }

    #[test]
    fn test_parse_invalid_choices() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("1 2"), None);
    }
}
